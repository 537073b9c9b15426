//! Analog clock model and dial widget.

pub mod face;
pub mod geometry;
pub mod state;

pub use face::ClockFace;
pub use geometry::{hand_angle, FaceGeometry, STROKE_WIDTH, TEXT_SIZE};
pub use state::{normalize_position, ClockConfig, ClockModel, ClockState};
