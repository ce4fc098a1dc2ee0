/// A position in frame-buffer pixels. May lie outside the buffer, e.g. a click
/// on the window border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelPosition {
    pub x: i64,
    pub y: i64,
}

impl PixelPosition {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Up,
    Down,
    Left,
    Right,
    C,
    /// Top-row digit key, 0 through 9.
    Digit(u8),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    Other,
}

/// What the presentation layer reports, one batch per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown {
        key: Key,
    },
    MouseDown {
        button: MouseButton,
        position: PixelPosition,
    },
}

impl InputEvent {
    pub fn key(key: Key) -> Self {
        InputEvent::KeyDown { key }
    }

    pub fn mouse(button: MouseButton, x: i64, y: i64) -> Self {
        InputEvent::MouseDown {
            button,
            position: PixelPosition::new(x, y),
        }
    }
}
