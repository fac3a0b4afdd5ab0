//! Zoom and rotation of the previewed image.

/// Scale multiplier per wheel tick away from the user.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;
/// Scale multiplier per wheel tick toward the user (or a zero delta).
pub const ZOOM_IN_FACTOR: f64 = 1.1;
/// Degrees added per right-click.
pub const ROTATE_STEP_DEG: i64 = 90;

/// Accumulated zoom and rotation. Neither value is clamped or normalized:
/// scale compounds multiplicatively and rotation keeps growing past 360.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewTransform {
    scale: f64,
    rotation_deg: i64,
}

impl Default for PreviewTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_deg: 0,
        }
    }
}

impl PreviewTransform {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rotation_deg(&self) -> i64 {
        self.rotation_deg
    }

    /// Apply one wheel tick and return the new scale.
    pub fn zoom(&mut self, delta_y: f64) -> f64 {
        self.scale *= if delta_y > 0.0 {
            ZOOM_OUT_FACTOR
        } else {
            ZOOM_IN_FACTOR
        };
        self.scale
    }

    /// Rotate a quarter turn clockwise and return the new angle.
    pub fn rotate(&mut self) -> i64 {
        self.rotation_deg += ROTATE_STEP_DEG;
        self.rotation_deg
    }

    /// Transform written after a wheel tick. Carries only the scale, so a
    /// zoom visually drops any rotation until the next right-click.
    pub fn scale_css(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// Transform written after a right-click.
    pub fn css(&self) -> String {
        format!("scale({}) rotate({}deg)", self.scale, self.rotation_deg)
    }
}
