use yew::prelude::*;
use log::debug;
use web_sys::{window, KeyboardEvent, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::menu::{self, MenuAction, MenuState};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#servicos", "Serviços"),
    ("#processo", "Como funciona"),
    ("#faq", "Dúvidas"),
    ("#contato", "Contato"),
];

fn set_body_scroll_lock(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);

    // Lock the page behind the open panel
    use_effect_with_deps(
        move |locked| {
            set_body_scroll_lock(*locked);
            || ()
        },
        menu.scroll_locked(),
    );

    {
        let dispatcher = menu.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|w| w.document()).map(|document| {
                    let key_callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if let Some(action) = menu::action_for_key(&e.key()) {
                            dispatcher.dispatch(action);
                        }
                    });
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    );
                    (document, key_callback)
                });

                move || {
                    if let Some((document, key_callback)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Menu toggled, was open: {}", menu.open);
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(MenuAction::SetOpen(false));
        })
    };

    html! {
        <header class="site-header">
            <div class="header-content">
                <a href="#inicio" class="brand">{"L3me"}</a>

                <button
                    type="button"
                    class="menu-button"
                    data-menu-button=""
                    aria-controls="site-menu"
                    aria-expanded={menu.aria_expanded()}
                    aria-label={menu.aria_label()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav id="site-menu" class="site-nav" data-menu="" data-open={menu.data_open()}>
                    {
                        for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                                {*label}
                            </a>
                        })
                    }
                </nav>
            </div>
        </header>
    }
}
