//! Hero parallax and the scroll progress bar.

use std::cell::Cell;

/// Vertical offset applied per pixel scrolled.
pub const PARALLAX_RATE: f64 = 0.4;
/// Fixed scale keeping the hero image edges out of view while it moves.
pub const PARALLAX_SCALE: f64 = 1.1;

/// CSS transform for the hero at `scroll_y`, or `None` once the hero has
/// been scrolled past (the previous transform stays in place).
pub fn parallax_transform(scroll_y: f64, hero_height: f64) -> Option<String> {
    if scroll_y >= hero_height {
        return None;
    }
    let rate = scroll_y * PARALLAX_RATE;
    Some(format!(
        "translate3d(0, {rate}px, 0) scale({PARALLAX_SCALE})"
    ))
}

/// Percentage of the document scrolled, 0 when it cannot scroll.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable > 0.0 {
        scroll_top / scrollable * 100.0
    } else {
        0.0
    }
}

/// CSS width for the progress bar.
pub fn progress_width(percent: f64) -> String {
    format!("{percent}%")
}

/// Allows at most one animation frame in flight.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate. Returns `false` when a frame is already pending.
    pub fn try_begin(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Releases the gate at the start of the frame callback.
    pub fn end(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Body of one parallax frame. The gate is always released, including when
/// reduced motion skips the update.
pub fn parallax_frame(
    gate: &FrameGate,
    reduced_motion: bool,
    scroll_y: f64,
    hero_height: f64,
) -> Option<String> {
    gate.end();
    if reduced_motion {
        return None;
    }
    parallax_transform(scroll_y, hero_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_format() {
        assert_eq!(
            parallax_transform(100.0, 600.0).as_deref(),
            Some("translate3d(0, 40px, 0) scale(1.1)")
        );
        assert_eq!(
            parallax_transform(0.0, 600.0).as_deref(),
            Some("translate3d(0, 0px, 0) scale(1.1)")
        );
    }

    #[test]
    fn progress_handles_short_documents() {
        assert_eq!(scroll_progress(0.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(250.0, 1300.0, 800.0), 50.0);
        assert_eq!(progress_width(50.0), "50%");
        assert_eq!(progress_width(0.0), "0%");
    }

    #[test]
    fn gate_coalesces_requests() {
        let gate = FrameGate::new();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        assert!(gate.is_pending());
        gate.end();
        assert!(gate.try_begin());
    }
}
