//! Core types and traits for the Krill cellular automata toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared across the Krill workspace:
//! cells, the colony catalog, Wolfram rule decoding, the render-surface
//! and input-event boundaries, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod colony;
pub mod error;
pub mod input;
pub mod render;
pub mod rule;
pub mod traits;

pub use cell::Cell;
pub use colony::{Colony, ColonyCatalog, ColonyId};
pub use error::{ConfigError, GridError};
pub use input::{InputEvent, Key};
pub use render::{Color, Surface, SurfaceError};
pub use rule::Rule;
pub use traits::Automaton;
