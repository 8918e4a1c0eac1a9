//! Input collaborator interface.
//!
//! Like the window module, this describes what the core asks of a host's
//! input layer without implementing a platform backend: a snapshot of
//! mouse state, key queries by scancode, and a character queue for text
//! entry.

/// A key scancode.
///
/// Letters and digits are addressed by their ASCII value (see
/// [`scancode_for`]); the named keys here occupy 128 and up, so the two
/// ranges never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[non_exhaustive]
pub enum Key {
    Pad0 = 128,
    Pad1,
    Pad2,
    Pad3,
    Pad4,
    Pad5,
    Pad6,
    Pad7,
    Pad8,
    Pad9,
    PadMul,
    PadAdd,
    PadEnter,
    PadSub,
    PadDot,
    PadDiv,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Backspace,
    Tab,
    Return,
    Shift,
    Control,
    Alt,
    Pause,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Insert,
    Delete,
    LWin,
    RWin,
    NumLock,
    ScrollLock,
    LShift,
    RShift,
    LControl,
    RControl,
    LAlt,
    RAlt,
    Semicolon,
    Equals,
    Comma,
    Minus,
    Dot,
    Slash,
    Backtick,
    LSquare,
    Backslash,
    RSquare,
    Tick,
}

impl Key {
    /// The numeric scancode.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// The scancode for a letter or digit, or `None` for characters that
/// have no scancode of their own.
///
/// Letters map case-insensitively to their uppercase ASCII value.
pub fn scancode_for(c: char) -> Option<u8> {
    match c {
        'a'..='z' => Some(c as u8 - b'a' + b'A'),
        'A'..='Z' | '0'..='9' => Some(c as u8),
        _ => None,
    }
}

/// Pressed mouse buttons as a bitmask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseButtons(pub u8);

impl MouseButtons {
    /// Left button bit.
    pub const LEFT: u8 = 1;
    /// Middle button bit.
    pub const MIDDLE: u8 = 2;
    /// Right button bit.
    pub const RIGHT: u8 = 4;

    /// Whether the left button is pressed.
    #[inline]
    pub fn left(self) -> bool {
        self.0 & Self::LEFT != 0
    }

    /// Whether the middle button is pressed.
    #[inline]
    pub fn middle(self) -> bool {
        self.0 & Self::MIDDLE != 0
    }

    /// Whether the right button is pressed.
    #[inline]
    pub fn right(self) -> bool {
        self.0 & Self::RIGHT != 0
    }
}

/// A snapshot of mouse state in surface coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mouse {
    /// Cursor x, in surface pixels; may be negative or past the surface
    /// edge while the cursor is outside the window content.
    pub x: i32,
    /// Cursor y, in surface pixels.
    pub y: i32,
    /// Currently pressed buttons.
    pub buttons: MouseButtons,
}

/// A host's input layer, polled once per frame.
pub trait InputSource {
    /// Current mouse snapshot.
    fn mouse(&self) -> Mouse;

    /// Whether `key` went down since the previous poll (edge-triggered,
    /// true for exactly one poll per press).
    fn key_down(&self, key: Key) -> bool;

    /// Whether `key` is currently held (level-triggered).
    fn key_held(&self, key: Key) -> bool;

    /// The next typed character, or `None` when the queue is empty.
    /// Consumes the character.
    fn read_char(&mut self) -> Option<char>;
}
