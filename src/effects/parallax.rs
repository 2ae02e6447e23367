use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

pub const SECTION_SELECTOR: &str = ".parallax-section";
pub const LAYER_ID: &str = "parallaxBg";
/// Background moves at half the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

/// Vertical layer offset for the current scroll position, or `None` when
/// the section is out of range and the layer should stay where it is.
pub fn parallax_offset(scroll_y: f64, section: SectionBox, viewport_height: f64) -> Option<f64> {
    let in_range =
        scroll_y > section.top - viewport_height && scroll_y < section.top + section.height;
    in_range.then(|| (scroll_y - section.top) * PARALLAX_FACTOR)
}

fn update(window: &Window, document: &Document) {
    let Some(section) = document
        .query_selector(SECTION_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(layer) = document
        .get_element_by_id(LAYER_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let section = SectionBox {
        top: f64::from(section.offset_top()),
        height: f64::from(section.offset_height()),
    };
    let viewport_height = dom::viewport_height(window);
    if let Some(offset) = parallax_offset(dom::scroll_y(window), section, viewport_height) {
        let _ = layer
            .style()
            .set_property("transform", &format!("translateY({}px)", offset));
    }
}

pub fn init_parallax(window: &Window, document: &Document) -> Result<(), JsValue> {
    if document.query_selector(SECTION_SELECTOR)?.is_none() {
        return Ok(());
    }
    let window_clone = window.clone();
    let document = document.clone();
    let callback = Closure::wrap(Box::new(move || {
        update(&window_clone, &document);
    }) as Box<dyn FnMut()>);
    dom::listen_passive(window, "scroll", callback)
}
