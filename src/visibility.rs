//! Scroll-into-view triggers: observer presets, the once-only latch, and the
//! section to nav-link matching used for the active marker.

use std::cell::Cell;

/// Intersection observer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Metrics container: fires once 30% is visible, 50px above the bottom edge.
pub const METRICS_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.3,
    root_margin: "0px 0px -50px 0px",
};

/// Page sections: fires at 20% visible, ignoring the bottom 10% of the viewport.
pub const SECTIONS_OBSERVER: ObserverOptions = ObserverOptions {
    threshold: 0.2,
    root_margin: "0px 0px -10% 0px",
};

/// A flag that can be set exactly once and never resets.
#[derive(Debug, Default)]
pub struct Latch {
    tripped: Cell<bool>,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only on the first call.
    pub fn trip(&self) -> bool {
        !self.tripped.replace(true)
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped.get()
    }
}

/// Whether a nav link's `href` points at the section with `section_id`.
pub fn link_targets(href: Option<&str>, section_id: &str) -> bool {
    match href.and_then(|h| h.strip_prefix('#')) {
        Some(fragment) => fragment == section_id,
        None => false,
    }
}

/// For each link href, whether it should carry the active marker once the
/// section `section_id` intersects. Exactly the matching links are active.
pub fn active_links<'a, I>(hrefs: I, section_id: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .map(|href| link_targets(href, section_id))
        .collect()
}
