use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, KeyboardEvent, Window};

use crate::dom;

/// ↑ ↑ ↓ ↓ ← ← → →
pub const KONAMI_SEQUENCE: [&str; 8] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowLeft",
    "ArrowRight",
    "ArrowRight",
];

const CELEBRATION_MS: u32 = 2000;
const CELEBRATION_ANIMATION: &str = "rainbow 2s infinite";
/// Page copy, kept in the language the landing pages are written in.
pub const CELEBRATION_MESSAGE: &str = "🎉 Parabéns! Você encontrou o easter egg da BENEDI! 🎉";

#[derive(Debug, Default)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    /// Feeds one key. Returns true when it completes the sequence.
    /// A wrong key drops all progress and is not taken as a fresh start.
    pub fn press(&mut self, key: &str) -> bool {
        if KONAMI_SEQUENCE.get(self.progress) != Some(&key) {
            self.progress = 0;
            return false;
        }
        self.progress += 1;
        if self.progress == KONAMI_SEQUENCE.len() {
            self.progress = 0;
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn progress(&self) -> usize {
        self.progress
    }
}

fn celebrate(window: &Window, document: &Document) -> Result<(), JsValue> {
    let body = dom::body(document)?;
    body.style().set_property("animation", CELEBRATION_ANIMATION)?;
    let window = window.clone();
    Timeout::new(CELEBRATION_MS, move || {
        let _ = body.style().remove_property("animation");
        let _ = window.alert_with_message(CELEBRATION_MESSAGE);
    })
    .forget();
    Ok(())
}

pub fn init_konami(window: &Window, document: &Document) -> Result<(), JsValue> {
    let tracker = Rc::new(RefCell::new(KonamiTracker::default()));
    let window = window.clone();
    let doc = document.clone();
    let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        let completed = tracker.borrow_mut().press(&e.key());
        if completed {
            log::info!("Easter egg unlocked");
            if let Err(err) = celebrate(&window, &doc) {
                log::warn!("Easter egg celebration failed: {:?}", err);
            }
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
