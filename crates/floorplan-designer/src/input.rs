//! Host-agnostic input events.
//!
//! The host translates its native pointer, keyboard and wheel events into
//! these values (screen coordinates in pixels) and queues them on the
//! editor session.

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command key on macOS; treated like ctrl for shortcuts.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl or Cmd.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Delete,
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64, modifiers: Modifiers },
    PointerMove { x: f64, y: f64, modifiers: Modifiers },
    PointerUp { x: f64, y: f64 },
    DoubleClick { x: f64, y: f64 },
    Key { key: Key, modifiers: Modifiers },
    /// Wheel deltas in pixels; (`x`, `y`) is the cursor position.
    Wheel {
        dx: f64,
        dy: f64,
        x: f64,
        y: f64,
        modifiers: Modifiers,
    },
    Resize { width: f64, height: f64 },
}

impl InputEvent {
    pub fn down(x: f64, y: f64) -> Self {
        InputEvent::PointerDown {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        InputEvent::PointerMove {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        InputEvent::PointerUp { x, y }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::Key {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn char(c: char) -> Self {
        Self::key(Key::Char(c))
    }
}
