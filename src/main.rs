use yew::prelude::*;
use log::{info, warn, Level};

mod config;
mod links;
mod menu;
mod accordion;
mod anchor_scroll;
mod lead_form;
mod components {
    pub mod nav;
    pub mod whatsapp_link;
    pub mod footer;
}
mod pages {
    pub mod landing;
    pub mod faq;
    pub mod contact;
}

use anchor_scroll::AnchorScrolling;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    // Same-page anchors scroll with the header offset for as long as the app is mounted
    use_effect_with_deps(move |_| {
        let anchor_scrolling = AnchorScrolling::install();
        if anchor_scrolling.is_none() {
            warn!("Anchor scrolling unavailable, using default navigation");
        }
        move || drop(anchor_scrolling)
    }, ());

    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
