//! Shape-specific scene types.
//!
//! One file per shape keeps command structs next to their push helpers.

pub mod circle;
pub mod line;
pub mod rect;
pub mod text;

use crate::paint::Color;

/// Stroke description shared by bordered shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
