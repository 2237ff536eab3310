//! Pointer-driven tilt of the hero visual.

/// Rotation in degrees at the edge of the hero box.
pub const TILT_MAX_DEG: f64 = 6.0;

/// Bounding box of the hero in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation to publish through the `--tilt-x` / `--tilt-y` variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Tilt {
    pub const RESET: Tilt = Tilt {
        x_deg: 0.0,
        y_deg: 0.0,
    };

    /// Tilt for a pointer at (`client_x`, `client_y`). The vertical axis is
    /// inverted so the visual leans toward the cursor.
    pub fn at(client_x: f64, client_y: f64, bounds: Bounds) -> Self {
        let x = normalize(client_x - bounds.left, bounds.width);
        let y = normalize(client_y - bounds.top, bounds.height);
        Self {
            x_deg: x * TILT_MAX_DEG,
            y_deg: -y * TILT_MAX_DEG,
        }
    }

    pub fn x_css(&self) -> String {
        deg(self.x_deg)
    }

    pub fn y_css(&self) -> String {
        deg(self.y_deg)
    }
}

/// Maps `offset` within `extent` to `[-1, 1]`.
fn normalize(offset: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (offset / extent - 0.5) * 2.0
}

fn deg(value: f64) -> String {
    // + 0.0 turns -0 into 0
    format!("{}deg", value + 0.0)
}
