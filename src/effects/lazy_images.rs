use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::{classes, MotionConfig};
use crate::dom;
use crate::reveal::observer::watch_once;
use crate::reveal::tracker::RevealTracker;

pub const IMAGE_SELECTOR: &str = "img[data-src]";

fn load(image: &Element) -> Result<(), JsValue> {
    if let Some(src) = image.get_attribute("data-src") {
        image.set_attribute("src", &src)?;
    }
    image.class_list().add_1(classes::LAZY_LOADED)
}

/// Swaps `data-src` into `src` the first time an image approaches the viewport.
pub fn init_lazy_images(document: &Document, config: &MotionConfig) -> Result<(), JsValue> {
    let images = dom::query_all(document, IMAGE_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }
    let tracker = Rc::new(RefCell::new(RevealTracker::new(
        images.len(),
        config.lazy_images.threshold,
    )));
    let loader = Rc::clone(&tracker);
    watch_once(Rc::new(images), tracker, &config.lazy_images, move |index, image, _| {
        if loader.borrow_mut().reveal(index) {
            if let Err(err) = load(image) {
                log::warn!("Lazy image failed to load: {:?}", err);
            }
        }
    })?;
    Ok(())
}
