//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, 2-stop linear gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}
