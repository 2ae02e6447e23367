use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// The selector an in-page link points at. A bare `#` points nowhere.
pub fn fragment_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Smooth-scrolls to the link target. Returns false when the browser
/// should handle the click itself.
fn scroll_to_fragment(window: &Window, document: &Document, href: &str) -> bool {
    let Some(fragment) = fragment_target(href) else {
        return false;
    };
    // An id the selector engine rejects behaves like a missing target.
    let Ok(Some(target)) = document.query_selector(fragment) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(fragment));
    }
    true
}

pub fn init_smooth_scroll(window: &Window, document: &Document) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR)? {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        let callback = Closure::wrap(Box::new(move |e: MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            if scroll_to_fragment(&window, &document, &href) {
                e.prevent_default();
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        anchor.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_have_targets() {
        assert_eq!(fragment_target("#pricing"), Some("#pricing"));
        assert_eq!(fragment_target("#missing"), Some("#missing"));
    }

    #[test]
    fn bare_hash_falls_through() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn other_links_fall_through() {
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/pricing#plans"), None);
        assert_eq!(fragment_target("https://example.com/#top"), None);
    }
}
