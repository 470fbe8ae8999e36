//! The input-event boundary.
//!
//! The terminal backend translates raw key presses into these events;
//! the controller only ever sees this vocabulary.

/// A key press the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// The escape key.
    Escape,
    /// Ctrl-C.
    CtrlC,
    /// The up arrow.
    ArrowUp,
    /// The down arrow.
    ArrowDown,
    /// A printable character.
    Char(char),
}

/// An event produced by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A recognized key press.
    Key(Key),
    /// Anything else (resize, mouse, unknown keys); ignored.
    Other,
}
