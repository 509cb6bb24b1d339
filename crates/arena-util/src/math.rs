//! Numeric and geometric helpers.

use arena_core::error::InputValidationError;
use arena_core::types::{Rect, Vec2};

fn require_finite(name: &'static str, value: f64) -> Result<(), InputValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputValidationError::NotFinite { name, value })
    }
}

/// Bound `value` into `[lo, hi]`. Requires `lo <= hi` and finite inputs.
/// Idempotent: clamping a clamped value is a no-op.
pub fn clamp(value: f64, lo: f64, hi: f64) -> Result<f64, InputValidationError> {
    require_finite("value", value)?;
    require_finite("lo", lo)?;
    require_finite("hi", hi)?;
    if lo > hi {
        return Err(InputValidationError::InvertedBounds { lo, hi });
    }
    Ok(value.max(lo).min(hi))
}

/// Linear interpolation from `a` to `b`. `t` is clamped to [0, 1] before
/// blending, so an out-of-range `t` never produces an out-of-range result.
pub fn lerp(a: f64, b: f64, t: f64) -> Result<f64, InputValidationError> {
    require_finite("a", a)?;
    require_finite("b", b)?;
    let t = clamp(t, 0.0, 1.0)?;
    Ok(a + (b - a) * t)
}

/// Euclidean distance between two points.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    glam::DVec2::new(x1, y1).distance(glam::DVec2::new(x2, y2))
}

/// Whether a point lies within a rectangle (edges inclusive).
pub fn in_bounds(point: Vec2, rect: Rect) -> bool {
    rect.contains(point)
}

/// Degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

/// Radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}
