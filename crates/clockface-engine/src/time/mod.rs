//! Frame timing and interval scheduling.

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameClock, FrameTime};
pub use ticker::Ticker;
