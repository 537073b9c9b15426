//! Built-in widgets.

pub mod button;
pub mod container;
pub mod flex;
pub mod text;
