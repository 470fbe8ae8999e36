//! Colony conquest: the Life rules plus competing populations.
//!
//! Every live cell belongs to a colony. On survival or birth, the cell
//! joins the colony with the most votes among its ancestor and live
//! neighbours — territory spreads by majority, as if by conquest or
//! conversion.

use indexmap::IndexMap;
use krill_core::{
    Automaton, Cell, Color, ColonyCatalog, ColonyId, ConfigError, Surface, SurfaceError,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::life::validate_dims;
use crate::MOORE_OFFSETS;

/// Background color marking dead-but-explored territory.
const EXPLORED_BACKGROUND: Color = Color::Black;

/// Probability denominator for colony-mode seeding: 1 in 5 cells live.
const SEED_DENOMINATOR: u64 = 5;

/// Pick the colony for a surviving or newly-born cell.
///
/// The tally seeds the ancestor's own colony (if any) with one vote,
/// then adds one vote per live neighbour's colony. The colony with the
/// strictly greatest count wins.
///
/// Ties are deterministic: the tally is insertion-ordered and the
/// comparison is strict, so the earliest-inserted candidate — the
/// ancestor first, then neighbours in scan order — keeps the win. (The
/// system this derives from resolved ties by unordered map iteration;
/// that non-determinism is deliberately replaced here.)
pub fn choose_colony(ancestor: Cell, neighbours: &[Cell]) -> Option<ColonyId> {
    let mut votes: IndexMap<ColonyId, u32> = IndexMap::new();
    if let Some(colony) = ancestor.colony {
        votes.insert(colony, 1);
    }
    for cell in neighbours {
        if let Some(colony) = cell.colony {
            *votes.entry(colony).or_insert(0) += 1;
        }
    }

    let mut winner: Option<(ColonyId, u32)> = None;
    for (&colony, &count) in &votes {
        match winner {
            Some((_, best)) if count <= best => {}
            _ => winner = Some((colony, count)),
        }
    }
    winner.map(|(colony, _)| colony)
}

/// A Game of Life board where cells belong to competing colonies.
///
/// Differences from the plain [`Board`](crate::Board):
///
/// - the grid edge is always a dead border here. The conquest rule
///   needs actual neighbour cells to vote with, and a virtual live
///   border has no colony — so the configurable border policy does not
///   apply to this board (a deliberate asymmetry, documented rather
///   than unified);
/// - cells remember whether they were ever live, for the optional
///   "explored territory" render trail. This bookkeeping carries no
///   simulation weight.
#[derive(Clone, Debug)]
pub struct ColonyBoard {
    rows: usize,
    cols: usize,
    colony_count: usize,
    catalog: ColonyCatalog,
    show_explored: bool,
    cells: Vec<Cell>,
    rng: ChaCha8Rng,
}

impl ColonyBoard {
    /// Create an all-dead colony board over `colony_count` colonies
    /// drawn from the catalog.
    ///
    /// Fails fast on zero dimensions or a colony count outside the
    /// catalog's supported range.
    pub fn new(
        rows: usize,
        cols: usize,
        colony_count: usize,
        show_explored: bool,
        catalog: ColonyCatalog,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        validate_dims(rows, cols)?;
        catalog.validate_active(colony_count)?;
        Ok(Self {
            rows,
            cols,
            colony_count,
            catalog,
            show_explored,
            cells: vec![Cell::default(); rows * cols],
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of active colonies.
    pub fn colony_count(&self) -> usize {
        self.colony_count
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// The cell at `(row, col)`. In-bounds only.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Overwrite the cell at `(row, col)`. Used for seeding scenarios.
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// The live in-bounds neighbours of `(row, col)`, in scan order.
    ///
    /// Out-of-range neighbours contribute nothing: the edge is a fixed
    /// dead border on this board.
    pub fn live_neighbours_at(&self, row: usize, col: usize) -> SmallVec<[Cell; 8]> {
        let mut live = SmallVec::new();
        for (dr, dc) in MOORE_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || r >= self.rows as isize || c < 0 || c >= self.cols as isize {
                continue;
            }
            let cell = self.cells[r as usize * self.cols + c as usize];
            if cell.alive {
                live.push(cell);
            }
        }
        live
    }

    /// Compute the next generation and swap it in.
    ///
    /// The four Life rules apply unchanged; additionally, a surviving
    /// or newly-born cell joins the colony chosen by [`choose_colony`],
    /// and births mark the cell as explored.
    pub fn next(&mut self) {
        let mut next = vec![Cell::default(); self.rows * self.cols];

        for row in 0..self.rows {
            for col in 0..self.cols {
                let neighbours = self.live_neighbours_at(row, col);
                let live_neighbours = neighbours.len();
                let idx = self.index(row, col);
                let current = self.cells[idx];
                next[idx].ever_alive = current.ever_alive;

                if current.alive {
                    if live_neighbours == 2 || live_neighbours == 3 {
                        next[idx].alive = true;
                        next[idx].colony = choose_colony(current, &neighbours);
                    }
                } else if live_neighbours == 3 {
                    next[idx].alive = true;
                    next[idx].ever_alive = true;
                    next[idx].colony = choose_colony(current, &neighbours);
                }
            }
        }

        self.cells = next;
    }

    /// Re-seed the board: each cell live with probability 1/5, live
    /// cells assigned a uniformly random active colony and marked
    /// explored.
    pub fn randomize(&mut self) {
        for cell in &mut self.cells {
            let alive = self.rng.random_range(0..SEED_DENOMINATOR) == 1;
            *cell = Cell::default();
            cell.alive = alive;
            cell.ever_alive = alive;
            if alive {
                let id = self.rng.random_range(0..self.colony_count as u8);
                cell.colony = Some(ColonyId(id));
            }
        }
    }
}

impl Automaton for ColonyBoard {
    fn advance(&mut self) {
        self.next();
    }

    fn randomize(&mut self) {
        ColonyBoard::randomize(self);
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        let background = if self.show_explored {
            EXPLORED_BACKGROUND
        } else {
            Color::Default
        };
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                if cell.alive {
                    let colony = cell.colony.and_then(|id| self.catalog.get(id));
                    let (symbol, fg) = match colony {
                        Some(colony) => (colony.symbol, colony.color),
                        None => ('O', Color::Default),
                    };
                    surface.set_cell(col as u16, row as u16, symbol, fg, background)?;
                } else if self.show_explored && cell.ever_alive {
                    surface.set_cell(
                        col as u16,
                        row as u16,
                        ' ',
                        Color::Default,
                        EXPLORED_BACKGROUND,
                    )?;
                }
            }
        }
        Ok(())
    }
}
