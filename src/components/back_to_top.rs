use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::debounce::Debounced;
use crate::dom;

const SCROLL_DEBOUNCE_MS: u32 = 100;
/// The button shows up once the reader is this far down the page.
pub const SHOW_AFTER_PX: f64 = 500.0;
/// Page copy, kept in the language the landing pages are written in.
pub const LABEL: &str = "Voltar ao topo";

pub fn should_show(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.setter();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let update = Debounced::new(SCROLL_DEBOUNCE_MS, {
                        let window = window.clone();
                        move |()| visible.set(should_show(dom::scroll_y(&window)))
                    });
                    let callback = Closure::<dyn Fn()>::new(move || update.call(()));
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

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            class={classes!("back-to-top", (*visible).then(|| "visible"))}
            aria-label={LABEL}
            onclick={onclick}
        >
            {"↑"}
        </button>
    }
}
