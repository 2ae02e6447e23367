use std::str::FromStr;

use log::Level;

/// Viewports narrower than this are treated as phones.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Viewports at least this wide are treated as desktops.
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;

const DEFAULT_STAGGER_MS: u32 = 100;
const MOBILE_STAGGER_MS: u32 = 50;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// CSS classes written by the reveal trigger and the device tuner.
pub mod classes {
    pub const VISIBLE: &str = "is-visible";
    pub const ANIMATED: &str = "has-animated";
    pub const LAZY_LOADED: &str = "lazy-loaded";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub const ALL: [DeviceClass; 3] = [
        DeviceClass::Mobile,
        DeviceClass::Tablet,
        DeviceClass::Desktop,
    ];

    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            DeviceClass::Mobile
        } else if width < DESKTOP_BREAKPOINT {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn body_class(self) -> &'static str {
        match self {
            DeviceClass::Mobile => "is-mobile",
            DeviceClass::Tablet => "is-tablet",
            DeviceClass::Desktop => "is-desktop",
        }
    }
}

/// Threshold and root margin handed to an intersection observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Reveal,
    Cards,
    Accordion,
    Parallax,
    SmoothScroll,
    Progress,
    BackToTop,
    ScrollSpy,
    LazyImages,
    Cursor,
    Konami,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::Reveal,
        Feature::Cards,
        Feature::Accordion,
        Feature::Parallax,
        Feature::SmoothScroll,
        Feature::Progress,
        Feature::BackToTop,
        Feature::ScrollSpy,
        Feature::LazyImages,
        Feature::Cursor,
        Feature::Konami,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Reveal => "reveal",
            Feature::Cards => "cards",
            Feature::Accordion => "accordion",
            Feature::Parallax => "parallax",
            Feature::SmoothScroll => "smooth-scroll",
            Feature::Progress => "progress",
            Feature::BackToTop => "back-to-top",
            Feature::ScrollSpy => "scroll-spy",
            Feature::LazyImages => "lazy-images",
            Feature::Cursor => "cursor",
            Feature::Konami => "konami",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFeature(pub String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// The set of enhancements a page opts into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Features {
    enabled: Vec<Feature>,
}

impl Features {
    pub fn all() -> Self {
        Self {
            enabled: Feature::ALL.to_vec(),
        }
    }

    /// Parses the space separated `data-motion` body attribute.
    /// No attribute means every feature; unknown names are skipped.
    pub fn from_attr(attr: Option<&str>) -> Self {
        let Some(attr) = attr else {
            return Self::all();
        };
        let mut enabled = Vec::new();
        for name in attr.split_whitespace() {
            match name.parse::<Feature>() {
                Ok(feature) if !enabled.contains(&feature) => enabled.push(feature),
                Ok(_) => {}
                Err(UnknownFeature(name)) => {
                    log::warn!("Ignoring unknown motion feature '{}'", name)
                }
            }
        }
        Self { enabled }
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything the initializers read. Never mutated: a resize builds a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub device: DeviceClass,
    pub reveal: ObserverOptions,
    pub cards: ObserverOptions,
    pub scroll_spy: ObserverOptions,
    pub lazy_images: ObserverOptions,
    pub stagger_delay_ms: u32,
    pub features: Features,
}

impl MotionConfig {
    pub fn for_viewport(width: f64, features: Features) -> Self {
        let device = DeviceClass::from_width(width);
        let stagger_delay_ms = match device {
            DeviceClass::Mobile => MOBILE_STAGGER_MS,
            DeviceClass::Tablet | DeviceClass::Desktop => DEFAULT_STAGGER_MS,
        };
        Self {
            device,
            stagger_delay_ms,
            features,
            ..Self::default()
        }
    }

    pub fn enabled(&self, feature: Feature) -> bool {
        self.features.contains(feature)
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            device: DeviceClass::Desktop,
            reveal: ObserverOptions {
                threshold: 0.15,
                root_margin: "0px 0px -10% 0px",
            },
            cards: ObserverOptions {
                threshold: 0.1,
                root_margin: "0px 0px -100px 0px",
            },
            scroll_spy: ObserverOptions {
                threshold: 0.3,
                root_margin: "-20% 0px -20% 0px",
            },
            lazy_images: ObserverOptions::default(),
            stagger_delay_ms: DEFAULT_STAGGER_MS,
            features: Features::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_split_devices() {
        assert_eq!(DeviceClass::from_width(320.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(767.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1023.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(1920.0), DeviceClass::Desktop);
    }

    #[test]
    fn mobile_config_staggers_faster() {
        let mobile = MotionConfig::for_viewport(400.0, Features::all());
        let desktop = MotionConfig::for_viewport(1400.0, Features::all());
        assert_eq!(mobile.stagger_delay_ms, 50);
        assert_eq!(desktop.stagger_delay_ms, 100);
        assert_eq!(mobile.reveal, desktop.reveal);
    }

    #[test]
    fn resize_builds_a_fresh_config() {
        let before = MotionConfig::for_viewport(1400.0, Features::all());
        let after = MotionConfig::for_viewport(500.0, before.features.clone());
        assert_eq!(before.device, DeviceClass::Desktop);
        assert_eq!(before.stagger_delay_ms, 100);
        assert_eq!(after.device, DeviceClass::Mobile);
    }

    #[test]
    fn default_reveal_options() {
        let config = MotionConfig::default();
        assert_eq!(config.reveal.threshold, 0.15);
        assert_eq!(config.reveal.root_margin, "0px 0px -10% 0px");
        assert_eq!(config.lazy_images, ObserverOptions::default());
    }

    #[test]
    fn missing_attr_enables_everything() {
        let features = Features::from_attr(None);
        assert!(Feature::ALL.iter().all(|f| features.contains(*f)));
    }

    #[test]
    fn attr_narrows_features() {
        let features = Features::from_attr(Some("reveal  accordion bogus accordion"));
        assert!(features.contains(Feature::Reveal));
        assert!(features.contains(Feature::Accordion));
        assert!(!features.contains(Feature::Cursor));
        assert_eq!(features, Features { enabled: vec![Feature::Reveal, Feature::Accordion] });
    }

    #[test]
    fn empty_attr_disables_everything() {
        let features = Features::from_attr(Some(""));
        assert!(Feature::ALL.iter().all(|f| !features.contains(*f)));
    }

    #[test]
    fn feature_names_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(feature.name().parse::<Feature>(), Ok(feature));
        }
        assert_eq!("sparkles".parse::<Feature>(), Err(UnknownFeature("sparkles".into())));
    }
}
