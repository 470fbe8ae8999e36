//! 2-D Game of Life board with a configurable border policy.

use krill_core::{Automaton, Cell, Color, ConfigError, GridError, Surface, SurfaceError};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

use crate::MOORE_OFFSETS;

/// Symbol drawn for live cells on a plain (colony-less) board.
const LIVE_SYMBOL: char = 'O';

/// A Conway's Game of Life board.
///
/// Cells live in a flat row-major buffer whose dimensions never change
/// after construction. `next` builds the following generation in a
/// fresh buffer and swaps it in whole, so neighbour counting always
/// reads a consistent generation.
///
/// Out-of-range neighbour probes resolve to the fixed
/// `border_cells_alive` policy value — a virtual border of uniformly
/// live or dead cells, not a wraparound.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    border_cells_alive: bool,
    cells: Vec<Cell>,
    rng: ChaCha8Rng,
}

impl Board {
    /// Maximum size of either dimension. Cells are addressed on the
    /// render surface with `u16` coordinates, so each axis must fit.
    pub const MAX_DIM: usize = u16::MAX as usize;

    /// Create an all-dead board.
    ///
    /// Returns `Err(ConfigError::EmptyGrid)` if either dimension is
    /// zero, or `Err(ConfigError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM). The seed makes every random
    /// operation on this board reproducible.
    pub fn new(
        rows: usize,
        cols: usize,
        border_cells_alive: bool,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        validate_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            border_cells_alive,
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

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Liveness of the logical cell at `(row, col)`.
    ///
    /// Coordinates outside `[0, rows) x [0, cols)` resolve to the
    /// border policy value rather than indexing anything.
    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        if row < 0 || row >= self.rows as isize {
            return self.border_cells_alive;
        }
        if col < 0 || col >= self.cols as isize {
            return self.border_cells_alive;
        }
        self.cells[row as usize * self.cols + col as usize].alive
    }

    /// Number of live cells in the Moore neighbourhood of `(row, col)`,
    /// border policy included.
    pub fn count_live_neighbours(&self, row: usize, col: usize) -> usize {
        MOORE_OFFSETS
            .iter()
            .filter(|(dr, dc)| self.is_alive(row as isize + dr, col as isize + dc))
            .count()
    }

    /// Set a cell's liveness directly. Used for seeding test patterns.
    ///
    /// Out-of-range coordinates are ignored.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx].alive = alive;
        }
    }

    /// Compute the next generation and swap it in.
    ///
    /// The four Life rules:
    ///
    /// 1. a live cell with fewer than two live neighbours dies, as if
    ///    by underpopulation;
    /// 2. a live cell with two or three live neighbours lives on;
    /// 3. a live cell with more than three live neighbours dies, as if
    ///    by overpopulation;
    /// 4. a dead cell with exactly three live neighbours becomes live,
    ///    as if by reproduction.
    pub fn next(&mut self) {
        let mut next = vec![Cell::default(); self.rows * self.cols];

        for row in 0..self.rows {
            for col in 0..self.cols {
                let live_neighbours = self.count_live_neighbours(row, col);
                let idx = self.index(row, col);
                next[idx].alive = if self.cells[idx].alive {
                    live_neighbours == 2 || live_neighbours == 3
                } else {
                    live_neighbours == 3
                };
            }
        }

        self.cells = next;
    }

    /// Set every cell live with probability 1/2.
    pub fn randomize(&mut self) {
        for cell in &mut self.cells {
            cell.alive = self.rng.random_bool(0.5);
        }
    }

    /// Randomize a rectangular sub-region, leaving the rest untouched.
    ///
    /// Ranges reaching past the grid are clamped to it.
    pub fn randomize_area(&mut self, rows: Range<usize>, cols: Range<usize>) {
        let row_end = rows.end.min(self.rows);
        let col_end = cols.end.min(self.cols);
        for row in rows.start..row_end {
            for col in cols.start..col_end {
                let idx = self.index(row, col);
                self.cells[idx].alive = self.rng.random_bool(0.5);
            }
        }
    }

    /// Stamp the canonical 5-cell glider centered at `(row, col)`:
    ///
    /// ```text
    ///  O
    ///   O
    /// OOO
    /// ```
    ///
    /// The anchor must be at least one cell away from every edge;
    /// otherwise `Err(GridError::PatternOutOfBounds)` and the board is
    /// left untouched.
    pub fn create_glider_at(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        if row < 1 || col < 1 || row + 1 >= self.rows || col + 1 >= self.cols {
            return Err(GridError::PatternOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        for (r, c) in [
            (row - 1, col),
            (row, col + 1),
            (row + 1, col - 1),
            (row + 1, col),
            (row + 1, col + 1),
        ] {
            let idx = self.index(r, c);
            self.cells[idx].alive = true;
        }
        Ok(())
    }
}

impl Automaton for Board {
    fn advance(&mut self) {
        self.next();
    }

    fn randomize(&mut self) {
        Board::randomize(self);
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.cells[self.index(row, col)].alive {
                    surface.set_cell(
                        col as u16,
                        row as u16,
                        LIVE_SYMBOL,
                        Color::Default,
                        Color::Default,
                    )?;
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn validate_dims(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyGrid { rows, cols });
    }
    if rows > Board::MAX_DIM {
        return Err(ConfigError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: Board::MAX_DIM,
        });
    }
    if cols > Board::MAX_DIM {
        return Err(ConfigError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: Board::MAX_DIM,
        });
    }
    Ok(())
}
