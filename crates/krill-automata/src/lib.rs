//! Automaton engines for the Krill workspace.
//!
//! Three simulation kinds, all sharing the replace-on-transition
//! discipline (a generation is computed into a fresh buffer and then
//! swapped in atomically):
//!
//! - [`Board`] — Conway's Game of Life on a 2-D grid with a
//!   configurable border policy.
//! - [`ColonyBoard`] — the Life rules plus colony conquest: live cells
//!   belong to competing populations that spread by majority vote.
//! - [`LineAutomaton`] + [`HistoryRing`] — a 1-D elementary automaton
//!   driven by a Wolfram rule, with a fixed-depth ring of past
//!   generations for scrolling display.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod conquest;
pub mod elementary;
pub mod life;
pub mod trace;

pub use conquest::{choose_colony, ColonyBoard};
pub use elementary::LineAutomaton;
pub use life::Board;
pub use trace::HistoryRing;

/// The 8 Moore-neighbourhood offsets, in row-major scan order.
///
/// Neighbour counting is order-independent, but the conquest
/// tie-break resolves to the earliest-inserted candidate, so the scan
/// order is part of the documented behavior.
pub(crate) const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
