//! The render-surface boundary.
//!
//! Automata project their state onto a [`Surface`]; the concrete
//! terminal backend lives in `krill-term`. The core calls `clear` once
//! per frame, `set_cell` once per drawable cell, and `flush` once per
//! frame, and never interprets colors beyond passing them through.

use std::error::Error;
use std::fmt;

/// An opaque palette token passed through to the render backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    /// The terminal's default color.
    #[default]
    Default,
    /// Black.
    Black,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
}

/// A drawable cell surface.
///
/// `clear` and `set_cell` may buffer; `flush` makes the frame visible.
/// All three propagate backend I/O failures as [`SurfaceError`].
pub trait Surface {
    /// Erase the whole surface at the start of a frame.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Place a symbol at `(col, row)` with the given colors.
    fn set_cell(
        &mut self,
        col: u16,
        row: u16,
        symbol: char,
        fg: Color,
        bg: Color,
    ) -> Result<(), SurfaceError>;

    /// Present the buffered frame.
    fn flush(&mut self) -> Result<(), SurfaceError>;
}

/// Errors from the render backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The terminal backend could not be acquired. Fatal: the process
    /// cannot proceed without a render surface, and there is no retry.
    Init {
        /// Description of the initialization failure.
        reason: String,
    },
    /// Writing a frame to the backend failed.
    Io {
        /// Description of the I/O failure.
        reason: String,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init { reason } => write!(f, "terminal initialization failed: {reason}"),
            Self::Io { reason } => write!(f, "render write failed: {reason}"),
        }
    }
}

impl Error for SurfaceError {}
