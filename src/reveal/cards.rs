use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::observer::watch_once;
use super::style::ANIMATION_ATTR;
use super::tracker::RevealTracker;
use crate::config::MotionConfig;
use crate::dom;

pub const CARD_CLASSES: [&str; 4] = [
    ".feature-card",
    ".about-card",
    ".supervision-card",
    ".pricing-card",
];

const HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
const SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Matches the cards that the scroll reveal has not already claimed.
/// Inline styles would override a tagged card's class-driven animation
/// and drop its stagger.
pub fn card_selector() -> String {
    CARD_CLASSES
        .iter()
        .map(|class| format!("{}:not([{}])", class, ANIMATION_ATTR))
        .collect::<Vec<_>>()
        .join(", ")
}

fn apply(element: &Element, props: &[(&str, &str)]) -> Result<(), JsValue> {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    let style = element.style();
    for (name, value) in props {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Older landing pages fade their cards in with inline styles instead of
/// classes. Same one-shot latch, no per-card delay. Runs after the reveal
/// groups are tagged.
pub fn init_card_fade(
    window: &Window,
    document: &Document,
    config: &MotionConfig,
) -> Result<(), JsValue> {
    let cards = dom::query_all(document, &card_selector())?;
    if cards.is_empty() {
        return Ok(());
    }

    let mut tracker = RevealTracker::new(cards.len(), config.cards.threshold);
    if !tracker.begin(dom::prefers_reduced_motion(window)) {
        for card in &cards {
            apply(card, &SHOWN)?;
        }
        return Ok(());
    }

    for card in &cards {
        apply(card, &HIDDEN)?;
    }
    let tracker = Rc::new(RefCell::new(tracker));
    let revealer = Rc::clone(&tracker);
    watch_once(Rc::new(cards), tracker, &config.cards, move |index, card, _| {
        if revealer.borrow_mut().reveal(index) {
            let _ = apply(card, &SHOWN);
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_cards_are_left_to_the_scroll_reveal() {
        let selector = card_selector();
        let parts: Vec<&str> = selector.split(", ").collect();
        assert_eq!(parts.len(), CARD_CLASSES.len());
        for part in parts {
            assert!(part.ends_with(":not([data-scroll-animation])"), "{}", part);
        }
    }

    #[test]
    fn about_cards_are_still_covered_when_untagged() {
        let selector = card_selector();
        assert!(selector.contains(".about-card:not([data-scroll-animation])"));
        assert!(selector.starts_with(".feature-card:not("));
    }
}
