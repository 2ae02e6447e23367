use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};
use yew::html::BaseComponent;

mod config;
mod debounce;
mod dom;
mod reveal {
    pub mod cards;
    pub mod groups;
    pub mod observer;
    pub mod style;
    pub mod tracker;
}
mod effects {
    pub mod accordion;
    pub mod device;
    pub mod konami;
    pub mod lazy_images;
    pub mod parallax;
    pub mod scroll_spy;
    pub mod smooth_scroll;
}
mod components {
    pub mod back_to_top;
    pub mod custom_cursor;
    pub mod reading_progress;
}

use components::{
    back_to_top::BackToTop, custom_cursor::CustomCursor, reading_progress::ReadingProgress,
};
use config::{Feature, Features, MotionConfig, DESKTOP_BREAKPOINT};
use debounce::Debounced;
use effects::accordion::{self, ACCORDION, FAQ};

const RESIZE_DEBOUNCE_MS: u32 = 250;
const FEATURES_ATTR: &str = "data-motion";

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!("{} failed to initialize: {:?}", what, err);
    }
}

/// Renders a widget component into its own host node at the end of `body`.
fn mount<C>(document: &Document, name: &str) -> Result<(), JsValue>
where
    C: BaseComponent,
    C::Properties: Default,
{
    let host = dom::mount_host(document, name)?;
    yew::Renderer::<C>::with_root(host).render();
    Ok(())
}

fn page_features(document: &Document) -> Features {
    let attr = document.body().and_then(|body| body.get_attribute(FEATURES_ATTR));
    Features::from_attr(attr.as_deref())
}

fn watch_resize(window: &Window, document: &Document, features: Features) -> Result<(), JsValue> {
    let retune = Debounced::new(RESIZE_DEBOUNCE_MS, {
        let window = window.clone();
        let document = document.clone();
        move |()| {
            let config = MotionConfig::for_viewport(dom::viewport_width(&window), features.clone());
            report("device tuning", effects::device::apply_device_class(&document, &config));
        }
    });
    let callback = Closure::wrap(Box::new(move || retune.call(())) as Box<dyn FnMut()>);
    dom::listen_passive(window, "resize", callback)
}

fn init(window: &Window, document: &Document) {
    info!("Initializing landing page motion");

    let config = MotionConfig::for_viewport(dom::viewport_width(window), page_features(document));
    let reduced_motion = dom::prefers_reduced_motion(window);

    report("device tuning", effects::device::apply_device_class(document, &config));

    if config.enabled(Feature::SmoothScroll) {
        report("smooth scroll", effects::smooth_scroll::init_smooth_scroll(window, document));
    }
    if config.enabled(Feature::Reveal) {
        report(
            "reveal groups",
            reveal::groups::tag_groups(document, config.stagger_delay_ms).map(|_| ()),
        );
        report("scroll reveal", reveal::observer::init_scroll_reveal(window, document, &config));
    }
    if config.enabled(Feature::Cards) {
        report("card fade", reveal::cards::init_card_fade(window, document, &config));
    }
    if config.enabled(Feature::Accordion) {
        report("accordion", accordion::init_accordion(document, ACCORDION));
        report("faq", accordion::init_accordion(document, FAQ));
    }
    if config.enabled(Feature::Parallax) {
        report("parallax", effects::parallax::init_parallax(window, document));
    }
    if config.enabled(Feature::Progress) {
        report("reading progress", mount::<ReadingProgress>(document, "reading-progress"));
    }
    if config.enabled(Feature::BackToTop) {
        report("back to top", mount::<BackToTop>(document, "back-to-top"));
    }
    if config.enabled(Feature::ScrollSpy) {
        report("scroll spy", effects::scroll_spy::init_scroll_spy(document, &config));
    }
    if config.enabled(Feature::LazyImages) {
        report("lazy images", effects::lazy_images::init_lazy_images(document, &config));
    }
    if config.enabled(Feature::Cursor) {
        if reduced_motion || dom::viewport_width(window) < DESKTOP_BREAKPOINT {
            info!("Skipping custom cursor on this device");
        } else {
            report("custom cursor", mount::<CustomCursor>(document, "custom-cursor"));
        }
    }
    if config.enabled(Feature::Konami) {
        report("konami", effects::konami::init_konami(window, document));
    }

    report("resize watcher", watch_resize(window, document, config.features.clone()));

    info!("Landing page motion ready");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let ready_document = document.clone();
    report(
        "page bootstrap",
        dom::on_dom_ready(&document, move || init(&window, &ready_document)),
    );
}
