use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Conservative behavior: on focus loss, clear "down" sets.
                    // Avoids stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    let inserted = self.keys_down.insert(*key);
                    if inserted {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    let removed = self.keys_down.remove(key);
                    if removed {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        let inserted = self.buttons_down.insert(*button);
                        if inserted {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        let removed = self.buttons_down.remove(button);
                        if removed {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_records_transition_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let press = InputEvent::Key {
            key: Key::Space,
            state: KeyState::Pressed,
            repeat: false,
        };
        state.apply_event(&mut frame, press.clone());
        assert!(state.key_down(Key::Space));
        assert!(frame.keys_pressed.contains(&Key::Space));

        // OS key repeat delivers further Pressed events while held.
        frame.clear();
        state.apply_event(&mut frame, press);
        assert!(state.key_down(Key::Space));
        assert!(!frame.keys_pressed.contains(&Key::Space));
    }

    #[test]
    fn focus_loss_clears_held_input() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::Key {
                key: Key::Enter,
                state: KeyState::Pressed,
                repeat: false,
            },
        );
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 4.0,
                y: 8.0,
            }),
        );
        assert!(state.key_down(Key::Enter));
        assert!(state.button_down(MouseButton::Left));

        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.key_down(Key::Enter));
        assert!(!state.button_down(MouseButton::Left));
    }
}
