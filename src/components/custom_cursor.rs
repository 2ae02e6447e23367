use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

/// Share of the remaining distance the cursor covers each frame.
pub const EASING: f64 = 0.3;
pub const HOVER_SELECTOR: &str = "a, button, .btn";

/// A point that eases toward the mouse pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pointer: (f64, f64),
    position: (f64, f64),
}

impl CursorFollower {
    pub fn aim(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    pub fn step(&mut self) -> (f64, f64) {
        let (px, py) = self.pointer;
        let (x, y) = self.position;
        self.position = (x + (px - x) * EASING, y + (py - y) * EASING);
        self.position
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &FrameSlot) -> Option<i32> {
    let window = web_sys::window()?;
    let frame = slot.borrow();
    let callback = frame.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor_ref = use_node_ref();
    let hovering = use_state(|| false);
    let follower = use_mut_ref(CursorFollower::default);

    {
        let follower = follower.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            follower
                .borrow_mut()
                .aim(f64::from(e.client_x()), f64::from(e.client_y()));
        });
    }

    // Per-frame easing loop
    {
        let cursor_ref = cursor_ref.clone();
        use_effect_with_deps(
            move |_| {
                let slot: FrameSlot = Rc::new(RefCell::new(None));
                let pending = Rc::new(Cell::new(None::<i32>));
                {
                    let next = Rc::clone(&slot);
                    let pending = Rc::clone(&pending);
                    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        let (x, y) = follower.borrow_mut().step();
                        if let Some(cursor) = cursor_ref.cast::<HtmlElement>() {
                            let style = cursor.style();
                            let _ = style.set_property("left", &format!("{}px", x));
                            let _ = style.set_property("top", &format!("{}px", y));
                        }
                        pending.set(request_frame(&next));
                    }) as Box<dyn FnMut()>));
                }
                pending.set(request_frame(&slot));

                move || {
                    if let (Some(window), Some(id)) = (web_sys::window(), pending.get()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    slot.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Grow over anything clickable
    {
        let hovering = hovering.setter();
        use_effect_with_deps(
            move |_| {
                let mut bound: Vec<(Element, Closure<dyn Fn()>, Closure<dyn Fn()>)> = Vec::new();
                let targets = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| dom::query_all(&document, HOVER_SELECTOR).ok())
                    .unwrap_or_default();
                for target in targets {
                    let enter = Closure::<dyn Fn()>::new({
                        let hovering = hovering.clone();
                        move || hovering.set(true)
                    });
                    let leave = Closure::<dyn Fn()>::new({
                        let hovering = hovering.clone();
                        move || hovering.set(false)
                    });
                    let _ = target.add_event_listener_with_callback(
                        "mouseenter",
                        enter.as_ref().unchecked_ref(),
                    );
                    let _ = target.add_event_listener_with_callback(
                        "mouseleave",
                        leave.as_ref().unchecked_ref(),
                    );
                    bound.push((target, enter, leave));
                }

                move || {
                    for (target, enter, leave) in bound {
                        let _ = target.remove_event_listener_with_callback(
                            "mouseenter",
                            enter.as_ref().unchecked_ref(),
                        );
                        let _ = target.remove_event_listener_with_callback(
                            "mouseleave",
                            leave.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={cursor_ref}
            class={classes!("custom-cursor", (*hovering).then(|| "cursor-hover"))}
        ></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_covers_thirty_percent_per_frame() {
        let mut follower = CursorFollower::default();
        follower.aim(100.0, 50.0);
        let (x, y) = follower.step();
        assert!((x - 30.0).abs() < 1e-9);
        assert!((y - 15.0).abs() < 1e-9);
        let (x, _) = follower.step();
        assert!((x - 51.0).abs() < 1e-9);
    }

    #[test]
    fn cursor_converges_on_the_pointer() {
        let mut follower = CursorFollower::default();
        follower.aim(640.0, 360.0);
        let mut last = (0.0, 0.0);
        for _ in 0..60 {
            last = follower.step();
        }
        assert!((last.0 - 640.0).abs() < 0.01);
        assert!((last.1 - 360.0).abs() < 0.01);
    }

    #[test]
    fn resting_cursor_stays_put() {
        let mut follower = CursorFollower::default();
        assert_eq!(follower.step(), (0.0, 0.0));
    }
}
