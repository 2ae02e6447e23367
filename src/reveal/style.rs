pub const ANIMATION_ATTR: &str = "data-scroll-animation";
pub const DELAY_ATTR: &str = "data-scroll-delay";

/// Which CSS entrance animation an element plays when revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStyle {
    FadeUp,
    FadeSlide,
    ScaleIn,
    SlideRight,
    ZoomIn,
    PopIn,
}

impl AnimationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationStyle::FadeUp => "fade-up",
            AnimationStyle::FadeSlide => "fade-slide",
            AnimationStyle::ScaleIn => "scale-in",
            AnimationStyle::SlideRight => "slide-right",
            AnimationStyle::ZoomIn => "zoom-in",
            AnimationStyle::PopIn => "pop-in",
        }
    }
}

/// Reads a `data-scroll-delay` value. Anything missing or not a positive
/// number of milliseconds means no delay.
pub fn parse_delay(attr: Option<&str>) -> u32 {
    attr.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| ms.min(f64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_use_kebab_case_names() {
        assert_eq!(AnimationStyle::FadeUp.as_str(), "fade-up");
        assert_eq!(AnimationStyle::SlideRight.as_str(), "slide-right");
        assert_eq!(AnimationStyle::PopIn.as_str(), "pop-in");
    }

    #[test]
    fn missing_delay_is_zero() {
        assert_eq!(parse_delay(None), 0);
        assert_eq!(parse_delay(Some("")), 0);
    }

    #[test]
    fn delay_parses_milliseconds() {
        assert_eq!(parse_delay(Some("150")), 150);
        assert_eq!(parse_delay(Some(" 580 ")), 580);
        assert_eq!(parse_delay(Some("62.9")), 62);
    }

    #[test]
    fn garbage_delay_is_zero() {
        assert_eq!(parse_delay(Some("soon")), 0);
        assert_eq!(parse_delay(Some("-40")), 0);
        assert_eq!(parse_delay(Some("NaN")), 0);
    }
}
