//! Platform-agnostic input state and events.
//!
//! The runtime translates winit events into [`InputEvent`]s, applies them to a
//! per-window [`InputState`], and records per-frame transitions into an
//! [`InputFrame`].

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
