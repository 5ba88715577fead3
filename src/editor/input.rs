//! Input event boundary types
//!
//! The windowing collaborator translates its native events into this shape;
//! the core never sees the event pump itself. Time arrives only through
//! `Tick`, so the controller stays deterministic under test.

use egui::Pos2;

/// Pointer button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button: drag, connect, menu selection
    Primary,
    /// Right button: disconnect, open the creation menu
    Secondary,
}

/// Key codes the controller reacts to; anything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    Other,
}

/// One event handed to the interaction controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerPressed {
        button: PointerButton,
        position: Pos2,
    },
    PointerReleased {
        button: PointerButton,
        position: Pos2,
    },
    PointerMoved {
        position: Pos2,
    },
    KeyPressed {
        key: Key,
        /// Typed character for text entry, when the key produced one
        character: Option<char>,
    },
    /// Frame tick advancing the controller clock
    Tick {
        elapsed_ms: u64,
    },
}

impl InputEvent {
    /// Convenience constructor for a typed character
    pub fn character(c: char) -> Self {
        InputEvent::KeyPressed {
            key: Key::Other,
            character: Some(c),
        }
    }
}
