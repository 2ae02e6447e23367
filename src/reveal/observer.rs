use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, Window};

use super::style::{parse_delay, ANIMATION_ATTR, DELAY_ATTR};
use super::tracker::{RevealTracker, Sighting};
use crate::config::{classes, MotionConfig, ObserverOptions};
use crate::dom;

/// Observes `elements` until each one crosses the threshold, then hands it
/// to `on_cross` exactly once, together with the delay the tracker holds
/// for it. The element is unobserved before `on_cross` runs; completing the
/// reveal through the tracker is up to the caller.
pub fn watch_once<F>(
    elements: Rc<Vec<Element>>,
    tracker: Rc<RefCell<RevealTracker>>,
    options: &ObserverOptions,
    mut on_cross: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(usize, &Element, u32) + 'static,
{
    let watched = Rc::clone(&elements);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = watched.iter().position(|el| *el == target) else {
                continue;
            };
            let scheduled = tracker.borrow_mut().sight(Sighting {
                index,
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            });
            if let Some(delay) = scheduled {
                observer.unobserve(&target);
                on_cross(index, &target, delay);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &dom::observer_init(options),
    )?;
    for element in elements.iter() {
        observer.observe(element);
    }
    // Observers live as long as the page.
    callback.forget();
    Ok(observer)
}

/// Reveals every `[data-scroll-animation]` element the first time it scrolls
/// into view, after its own `data-scroll-delay`.
pub fn init_scroll_reveal(
    window: &Window,
    document: &Document,
    config: &MotionConfig,
) -> Result<(), JsValue> {
    let selector = format!("[{}]", ANIMATION_ATTR);
    let elements = dom::query_all(document, &selector)?;
    let delays = elements
        .iter()
        .map(|el| parse_delay(el.get_attribute(DELAY_ATTR).as_deref()))
        .collect();
    let mut tracker = RevealTracker::with_delays(delays, config.reveal.threshold);

    if !tracker.begin(dom::prefers_reduced_motion(window)) {
        for element in &elements {
            element.class_list().add_1(classes::VISIBLE)?;
        }
        log::info!("Revealed {} elements without animating", tracker.revealed());
        return Ok(());
    }

    let count = tracker.watching();
    let tracker = Rc::new(RefCell::new(tracker));
    let revealer = Rc::clone(&tracker);
    watch_once(
        Rc::new(elements),
        tracker,
        &config.reveal,
        move |index, element, delay| {
            let element = element.clone();
            let tracker = Rc::clone(&revealer);
            Timeout::new(delay, move || {
                if tracker.borrow_mut().reveal(index) {
                    let _ = element
                        .class_list()
                        .add_2(classes::VISIBLE, classes::ANIMATED);
                }
            })
            .forget();
        },
    )?;
    log::debug!("Watching {} elements for scroll reveal", count);
    Ok(())
}
