//! The cell value type shared by every automaton kind.

use crate::colony::ColonyId;

/// A single automaton cell.
///
/// Cells are plain `Copy` values owned by their grid; a generation
/// transition builds a fresh grid of cells rather than mutating in
/// place, so neighbour reads never alias writes.
///
/// `ever_alive` and `colony` only carry weight in colony mode: the
/// former drives the "explored territory" render trail, the latter is
/// an index into the [`ColonyCatalog`](crate::colony::ColonyCatalog)
/// rather than a reference, so cells stay `Copy` and lifetime-free.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Whether the cell is live in the current generation.
    pub alive: bool,
    /// Whether the cell has been live in any generation so far.
    pub ever_alive: bool,
    /// The colony this cell belongs to, if any.
    pub colony: Option<ColonyId>,
}

impl Cell {
    /// A live cell with no colony affiliation.
    pub fn live() -> Self {
        Self {
            alive: true,
            ever_alive: true,
            colony: None,
        }
    }

    /// A live cell belonging to the given colony.
    pub fn live_in(colony: ColonyId) -> Self {
        Self {
            alive: true,
            ever_alive: true,
            colony: Some(colony),
        }
    }
}
