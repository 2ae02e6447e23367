use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry};

use super::smooth_scroll::ANCHOR_SELECTOR;
use crate::config::MotionConfig;
use crate::dom;

pub const SECTION_SELECTOR: &str = "section[id]";
pub const ACTIVE_CLASS: &str = "active";

/// Index of the nav link whose href is `#{section_id}`.
pub fn matching_link<'a>(
    hrefs: impl IntoIterator<Item = Option<&'a str>>,
    section_id: &str,
) -> Option<usize> {
    hrefs.into_iter().position(|href| {
        href.and_then(|h| h.strip_prefix('#'))
            .is_some_and(|id| id == section_id)
    })
}

fn on_section_entered(links: &[Element], section_id: &str) {
    for link in links {
        let _ = link.class_list().remove_1(ACTIVE_CLASS);
    }
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    if let Some(index) = matching_link(hrefs.iter().map(Option::as_deref), section_id) {
        // Highlighting the link is switched off on the live pages.
        log::debug!("Section #{} is active (nav link {})", section_id, index);
    }
}

/// Tracks which section is in view. Stale highlights are cleared, but no
/// link is highlighted.
pub fn init_scroll_spy(document: &Document, config: &MotionConfig) -> Result<(), JsValue> {
    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    if sections.is_empty() {
        return Ok(());
    }
    let links = dom::query_all(document, ANCHOR_SELECTOR)?;

    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(id) = entry.target().get_attribute("id") {
                on_section_entered(&links, &id);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &dom::observer_init(&config.scroll_spy),
    )?;
    for section in &sections {
        observer.observe(section);
    }
    callback.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_link_for_a_section() {
        let hrefs = [Some("#welcome"), None, Some("#price"), Some("#faq")];
        assert_eq!(matching_link(hrefs, "price"), Some(2));
    }

    #[test]
    fn prefixes_do_not_match() {
        let hrefs = [Some("#price-cards"), Some("price")];
        assert_eq!(matching_link(hrefs, "price"), None);
    }

    #[test]
    fn no_links_no_match() {
        assert_eq!(matching_link(std::iter::empty(), "faq"), None);
    }
}
