//! Page hooks and third-party library settings.

use serde::Serialize;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub const HERO_ID: &str = "hero";
pub const HERO_PARALLAX: &str = ".hero-parallax";
pub const HERO_VISUAL: &str = ".hero-visual";
pub const TILT_X_VAR: &str = "--tilt-x";
pub const TILT_Y_VAR: &str = "--tilt-y";

pub const METRICS_ID: &str = "impact-metrics";
pub const COUNTERS: &str = "[data-counter]";
pub const COUNTER_ATTR: &str = "data-counter";
pub const SUFFIX_ATTR: &str = "data-suffix";

pub const SECTIONS: &str = "main section, header.hero";
pub const ORB_SECTIONS: &str = "main section";
pub const ORB_CLASSES: [&str; 2] = ["section-orb orb-a", "section-orb orb-b"];
pub const IN_VIEW_CLASS: &str = "in-view";

pub const NAV_LINKS: &str = ".nav-link";
pub const NAV_PROGRESS: &str = ".nav-progress";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_ICON: &str = ".bi";
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const ACTIVE_CLASS: &str = "active";

pub const ANCHORS: &str = "a[href^=\"#\"]";
pub const CONTACT_FORM: &str = ".contact-form";
pub const SUBMIT_BUTTON: &str = ".btn-submit";
pub const YEAR_ID: &str = "year";
pub const READY_CLASS: &str = "js-ready";

/// Options passed to `AOS.init`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AosOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub offset: u32,
    pub once: bool,
    pub disable: bool,
}

impl AosOptions {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            duration: 700,
            easing: "ease-out-cubic",
            offset: 80,
            once: true,
            disable: reduced_motion,
        }
    }
}
