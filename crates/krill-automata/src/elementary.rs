//! 1-D elementary cellular automaton driven by a Wolfram rule.

use krill_core::{Cell, ConfigError, Rule};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A line of cells evolving under an elementary automaton rule.
///
/// Each generation, every cell's next state is looked up from the
/// rule's transition table using the 3-bit pattern of its left
/// neighbour, itself, and its right neighbour. The array edges act as
/// a fixed dead border — out-of-bounds neighbours contribute 0, with
/// no wraparound. Transitions follow the same replace-on-write
/// discipline as the 2-D boards.
#[derive(Clone, Debug)]
pub struct LineAutomaton {
    rule: Rule,
    cells: Vec<Cell>,
    rng: ChaCha8Rng,
}

impl LineAutomaton {
    /// Create an all-dead line of `size` cells.
    ///
    /// Returns `Err(ConfigError::EmptyGrid)` if `size` is zero, so the
    /// center-seeding and transition paths never face an empty array.
    pub fn new(rule: Rule, size: usize, seed: u64) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyGrid { rows: 1, cols: 0 });
        }
        Ok(Self {
            rule,
            cells: vec![Cell::default(); size],
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// The rule driving this automaton.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Number of cells in the line.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The current generation's cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Compute the next generation and swap it in.
    pub fn next(&mut self) {
        let mut next = vec![Cell::default(); self.cells.len()];

        for (i, slot) in next.iter_mut().enumerate() {
            let left = i > 0 && self.cells[i - 1].alive;
            let center = self.cells[i].alive;
            let right = i + 1 < self.cells.len() && self.cells[i + 1].alive;
            slot.alive = self.rule.output(Rule::pattern(left, center, right));
        }

        self.cells = next;
    }

    /// Set a cell's liveness directly. Used for seeding test patterns.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_alive(&mut self, index: usize, alive: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.alive = alive;
        }
    }

    /// Set every cell live with probability 1/2.
    pub fn randomize(&mut self) {
        for cell in &mut self.cells {
            cell.alive = self.rng.random_bool(0.5);
        }
    }

    /// Clear the line and seed a single live cell at the middle index.
    pub fn start_with_center(&mut self) {
        let center = self.cells.len() / 2;
        for cell in &mut self.cells {
            cell.alive = false;
        }
        self.cells[center].alive = true;
    }
}
