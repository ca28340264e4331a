use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::config;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Instant,
    Smooth,
}

impl ScrollMode {
    pub fn for_preference(reduced_motion: bool) -> Self {
        if reduced_motion { ScrollMode::Instant } else { ScrollMode::Smooth }
    }

    fn behavior(self) -> ScrollBehavior {
        match self {
            ScrollMode::Instant => ScrollBehavior::Auto,
            ScrollMode::Smooth => ScrollBehavior::Smooth,
        }
    }
}

/// Element id an in-page link points at. `"#"` and non-fragment hrefs have none.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_offset(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y - config::HEADER_HEIGHT + config::SCROLL_CORRECTION
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn scroll_to_element(window: &Window, element: &Element, mode: ScrollMode) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = scroll_offset(element.get_bounding_client_rect().top(), scroll_y);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(mode.behavior());
    window.scroll_to_with_scroll_to_options(&options);
}

fn replace_fragment(window: &Window, id: &str) {
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)));
    }
}

fn handle_click(window: &Window, document: &Document, mode: ScrollMode, event: &MouseEvent) {
    let Some(anchor) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(ANCHOR_SELECTOR).ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(id) = fragment_target(&href) else {
        return;
    };
    // Unknown ids keep the browser's own navigation.
    let Some(target) = document.get_element_by_id(id) else {
        return;
    };

    event.prevent_default();
    debug!("Scrolling to #{}", id);
    scroll_to_element(window, &target, mode);
    replace_fragment(window, id);
}

/// Document-wide click listener for same-page anchors. Removed on drop.
pub struct AnchorScrolling {
    document: Document,
    callback: Closure<dyn Fn(MouseEvent)>,
}

impl AnchorScrolling {
    pub fn install() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let mode = ScrollMode::for_preference(prefers_reduced_motion(&window));

        let callback = {
            let document = document.clone();
            Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
                handle_click(&window, &document, mode, &event);
            })
        };

        document
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { document, callback })
    }
}

impl Drop for AnchorScrolling {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}
