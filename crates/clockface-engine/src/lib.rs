//! Clockface engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the UI layer
//! and the application: windowing, input, timing, and shape rendering.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
