use yew::prelude::*;

use crate::config;
use crate::links;

#[derive(Properties, PartialEq)]
pub struct WhatsAppLinkProps {
    /// Prefilled message; falls back to the default greeting when missing or empty.
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Opens a WhatsApp conversation with the business number in a new tab.
#[function_component(WhatsAppLink)]
pub fn whatsapp_link(props: &WhatsAppLinkProps) -> Html {
    let message = props
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(config::DEFAULT_WHATSAPP_MESSAGE);
    let href = links::contact_whatsapp_url(Some(message));

    html! {
        <a
            data-wa-link=""
            class={props.class.clone()}
            href={href}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Abrir conversa no WhatsApp"
        >
            { for props.children.iter() }
        </a>
    }
}
