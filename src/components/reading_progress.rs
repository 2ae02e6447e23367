use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::debounce::Debounced;
use crate::dom;

const UPDATE_DEBOUNCE_MS: u32 = 10;

/// Percentage of the scrollable distance already read, in `[0, 100]`.
/// Pages that fit in the viewport report 0.
pub fn reading_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

fn current_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let Some(document) = window.document() else {
        return 0.0;
    };
    reading_progress(
        dom::scroll_y(&window),
        dom::document_height(&document),
        dom::viewport_height(&window),
    )
}

#[function_component(ReadingProgress)]
pub fn reading_progress_bar() -> Html {
    let width = use_state(|| 0.0_f64);

    {
        let width = width.setter();
        use_effect_with_deps(
            move |_| {
                let update = Debounced::new(UPDATE_DEBOUNCE_MS, move |()| {
                    width.set(current_progress());
                });
                update.call(()); // Initial measurement

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let update = update.clone();
                        move || update.call(())
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div class="reading-progress" style={format!("width: {}%;", *width)}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_scrolled_fraction() {
        assert_eq!(reading_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(reading_progress(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn progress_is_clamped() {
        // Overscroll bounce on touch devices.
        assert_eq!(reading_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(2100.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_pages_report_zero() {
        assert_eq!(reading_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(reading_progress(0.0, 1000.0, 1000.0), 0.0);
    }
}
