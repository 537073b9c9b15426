/// Logical keys the runtime distinguishes.
///
/// Keys without a dedicated variant are carried as `Unknown` with the raw
/// winit key code so applications can still match on them if needed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer position in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Focused(bool),
    PointerMoved(PointerMoveEvent),
    PointerLeft,
    PointerButton(PointerButtonEvent),
    Key {
        key: Key,
        state: KeyState,
        repeat: bool,
    },
}
