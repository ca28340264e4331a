use yew::prelude::*;
use log::{debug, info};
use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::whatsapp_link::WhatsAppLink;
use crate::config;
use crate::lead_form::{self, Field, FormStatus, LeadFields, SubmitOutcome};

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.focus();
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let status = use_state(|| None::<FormStatus>);
    // Pending hand-off to the mail client; dropping it cancels the navigation
    let pending = use_mut_ref(|| None::<Timeout>);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let status = status.clone();
        let pending = pending.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if pending.borrow_mut().take().is_some() {
                debug!("Replacing pending mail hand-off");
            }
            status.set(None);

            let fields = LeadFields {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                message: textarea_value(&message_ref),
            };

            match lead_form::submit(&fields) {
                SubmitOutcome::Invalid { status: error_status, focus: field } => {
                    info!("Contact form rejected at field {:?}", field);
                    status.set(Some(error_status));
                    match field {
                        Field::Name => focus(&name_ref),
                        Field::Email => focus(&email_ref),
                        Field::Message => focus(&message_ref),
                    }
                }
                SubmitOutcome::Ready { status: ready_status, mailto } => {
                    info!("Contact form valid, opening mail client");
                    status.set(Some(ready_status));
                    let handle = Timeout::new(config::MAILTO_DELAY_MS, move || {
                        if let Some(window) = window() {
                            let _ = window.location().set_href(&mailto);
                        }
                    });
                    *pending.borrow_mut() = Some(handle);
                }
            }
        })
    };

    let (status_class, status_text) = match (*status).as_ref() {
        Some(current) => (Some(current.kind.class()), current.text.clone()),
        None => (None, String::new()),
    };

    html! {
        <section id="contato" class="contact-section">
            <h2>{"Vamos conversar?"}</h2>
            <p class="contact-subtitle">
                {"Conte um pouco sobre o seu negócio. Respondemos em até um dia útil, ou chame direto no "}
                <WhatsAppLink message="Olá! Vim pelo site e quero um orçamento.">{"WhatsApp"}</WhatsAppLink>
                {"."}
            </p>
            <form id="leadForm" class="lead-form" novalidate={true} onsubmit={onsubmit}>
                <label for={Field::Name.input_id()}>{"Nome"}</label>
                <input
                    id={Field::Name.input_id()}
                    name="nome"
                    type="text"
                    autocomplete="name"
                    ref={name_ref}
                />
                <label for={Field::Email.input_id()}>{"E-mail"}</label>
                <input
                    id={Field::Email.input_id()}
                    name="email"
                    type="email"
                    autocomplete="email"
                    ref={email_ref}
                />
                <label for={Field::Message.input_id()}>{"Mensagem"}</label>
                <textarea
                    id={Field::Message.input_id()}
                    name="mensagem"
                    rows="5"
                    ref={message_ref}
                />
                <button type="submit" class="form-submit">{"Enviar mensagem"}</button>
                <p
                    class={classes!("form-status", status_class)}
                    data-form-status=""
                    role="status"
                    aria-live="polite"
                >
                    {status_text}
                </p>
            </form>
        </section>
    }
}
