//! Mobile navigation state.
//!
//! The open flag and the menu icon are derived from one field so they can
//! never disagree: open shows the close glyph, closed shows the list glyph.

/// Viewports wider than this close the mobile menu on resize.
pub const NAV_BREAKPOINT_PX: f64 = 768.0;

/// The hamburger icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    List,
    Close,
}

impl MenuIcon {
    pub fn class(self) -> &'static str {
        match self {
            MenuIcon::List => "bi-list",
            MenuIcon::Close => "bi-x",
        }
    }

    /// The class that must be absent while `self` is shown.
    pub fn other(self) -> MenuIcon {
        match self {
            MenuIcon::List => MenuIcon::Close,
            MenuIcon::Close => MenuIcon::List,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        if self.open {
            MenuIcon::Close
        } else {
            MenuIcon::List
        }
    }

    /// Value for `aria-expanded` on the toggle button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Flips the menu and returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Closes the menu when the viewport grows past the breakpoint.
    /// Returns `true` if that changed anything.
    pub fn resized(&mut self, viewport_width: f64) -> bool {
        viewport_width > NAV_BREAKPOINT_PX && self.close()
    }
}

/// The in-page target of an anchor `href`, without the `#`. Bare `#` and
/// non-fragment links have none.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_state() {
        let mut nav = NavState::default();
        assert_eq!(nav.icon(), MenuIcon::List);
        assert_eq!(nav.aria_expanded(), "false");
        assert!(nav.toggle());
        assert_eq!(nav.icon(), MenuIcon::Close);
        assert_eq!(nav.aria_expanded(), "true");
        assert_eq!(nav.icon().other(), MenuIcon::List);
        assert!(!nav.toggle());
        assert_eq!(nav.icon(), MenuIcon::List);
    }

    #[test]
    fn close_reports_change() {
        let mut nav = NavState::default();
        assert!(!nav.close());
        nav.toggle();
        assert!(nav.close());
        assert!(!nav.is_open());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(!nav.resized(768.0));
        assert!(nav.is_open());
        assert!(nav.resized(769.0));
        assert!(!nav.is_open());
        assert!(!nav.resized(1200.0));
    }

    #[test]
    fn fragments() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/about"), None);
    }
}
