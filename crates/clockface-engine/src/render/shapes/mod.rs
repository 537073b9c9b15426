//! Shape renderers.

mod common;

pub mod circle;
pub mod line;
pub mod rect;
pub mod text;
