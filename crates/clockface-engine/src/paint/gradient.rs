use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied linear colors.
/// - Shaders interpolate between the first and last stop; out-of-range
///   positions clamp to the edge stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Convenience for the common two-color axis gradient.
    pub fn two_stop(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self::new(start, end, vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}
