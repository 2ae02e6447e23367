use wasm_bindgen::JsValue;
use web_sys::Document;

use super::style::{AnimationStyle, ANIMATION_ATTR, DELAY_ATTR};
use crate::dom;

/// How the members of a group are spaced out in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stagger {
    /// No delay attribute is written.
    None,
    /// `index * stagger_delay_ms` from the active config.
    Config,
    /// `index * step_ms + offset_ms`.
    Step { step_ms: u32, offset_ms: u32 },
}

impl Stagger {
    const fn step(step_ms: u32) -> Self {
        Stagger::Step {
            step_ms,
            offset_ms: 0,
        }
    }

    pub fn delay_for(self, index: usize, config_step_ms: u32) -> Option<u32> {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        match self {
            Stagger::None => None,
            Stagger::Config => Some(index.saturating_mul(config_step_ms)),
            Stagger::Step { step_ms, offset_ms } => {
                Some(index.saturating_mul(step_ms).saturating_add(offset_ms))
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub style: AnimationStyle,
    pub stagger: Stagger,
}

const fn group(selector: &'static str, style: AnimationStyle, stagger: Stagger) -> RevealGroup {
    RevealGroup {
        selector,
        style,
        stagger,
    }
}

/// Applied top to bottom; a later group wins on elements matched twice.
pub const REVEAL_GROUPS: &[RevealGroup] = &[
    group(".welcome-card", AnimationStyle::FadeUp, Stagger::Config),
    group(".impact-line", AnimationStyle::FadeSlide, Stagger::step(150)),
    group(".change-card", AnimationStyle::FadeSlide, Stagger::step(150)),
    group(".find-card", AnimationStyle::ScaleIn, Stagger::step(80)),
    group(".dep-card", AnimationStyle::FadeUp, Stagger::step(120)),
    group(".certificate-container ul li", AnimationStyle::SlideRight, Stagger::step(60)),
    group(".accordion", AnimationStyle::FadeUp, Stagger::step(50)),
    group(
        ".intro-text, .welcome-text, .change-text, .find-text, .not-alone-container, \
         .active-content, .price-intro, .mockup-text, .about-intro, .dep-text, .faq-text, \
         .benedi-container",
        AnimationStyle::FadeUp,
        Stagger::None,
    ),
    group(".mockup-imgs > div", AnimationStyle::ZoomIn, Stagger::step(150)),
    group(".not-alone .not-alone-container h2", AnimationStyle::ZoomIn, Stagger::step(150)),
    group(
        ".not-alone .not-alone-container .not-alone-icon",
        AnimationStyle::PopIn,
        Stagger::Step {
            step_ms: 80,
            offset_ms: 500,
        },
    ),
    group(".active-item", AnimationStyle::PopIn, Stagger::step(100)),
    group(
        ".about-nat .about-cards-wrap .about-card",
        AnimationStyle::FadeSlide,
        Stagger::step(150),
    ),
    group(".price .price-cards .price-card", AnimationStyle::FadeSlide, Stagger::step(150)),
    group(".benedi .benedi-container", AnimationStyle::ZoomIn, Stagger::step(150)),
];

/// Writes animation and delay attributes onto every group member.
/// Returns how many elements were tagged.
pub fn tag_groups(document: &Document, stagger_delay_ms: u32) -> Result<usize, JsValue> {
    let mut tagged = 0;
    for group in REVEAL_GROUPS {
        for (index, element) in dom::query_all(document, group.selector)?.iter().enumerate() {
            element.set_attribute(ANIMATION_ATTR, group.style.as_str())?;
            if let Some(delay) = group.stagger.delay_for(index, stagger_delay_ms) {
                element.set_attribute(DELAY_ATTR, &delay.to_string())?;
            }
            tagged += 1;
        }
    }
    log::debug!("Tagged {} reveal elements", tagged);
    Ok(tagged)
}
