use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, EventTarget, HtmlElement,
    IntersectionObserverInit, Window,
};

use crate::config::ObserverOptions;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn viewport_width(window: &Window) -> f64 {
    window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn document_height(document: &Document) -> f64 {
    document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

pub fn observer_init(options: &ObserverOptions) -> IntersectionObserverInit {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    init
}

/// Appends an empty, layout-neutral container to `body` for a Yew app to render into.
pub fn mount_host(document: &Document, name: &str) -> Result<Element, JsValue> {
    let host = document.create_element("div")?;
    host.set_attribute("data-motion-host", name)?;
    host.set_attribute("style", "display: contents;")?;
    body(document)?.append_child(&host)?;
    Ok(host)
}

/// Attaches a passive listener that lives as long as the page.
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    callback: Closure<dyn FnMut()>,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

/// Runs `ready` once the DOM has been parsed.
pub fn on_dom_ready(document: &Document, ready: impl FnOnce() + 'static) -> Result<(), JsValue> {
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(ready);
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        ready();
    }
    Ok(())
}
