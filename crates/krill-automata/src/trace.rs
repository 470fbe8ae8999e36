//! Fixed-depth history ring for the scrolling 1-D automaton trace.

use krill_core::{Automaton, Cell, Color, ConfigError, Surface, SurfaceError};

use crate::elementary::LineAutomaton;

/// Symbol drawn for live cells in the trace.
const TRACE_SYMBOL: char = '+';

/// A fixed-capacity circular buffer of past line-automaton generations.
///
/// Construction pre-fills every slot from the automaton's first
/// `capacity` generations, so exactly `capacity` generations are
/// retained at all times — the sequence never grows and never shrinks.
/// Each [`next`](Self::next) advances the automaton one generation and
/// overwrites the oldest slot.
///
/// Rendering one generation per row, oldest at the top, produces the
/// classic scrolling trace of an elementary automaton.
#[derive(Clone, Debug)]
pub struct HistoryRing {
    automaton: LineAutomaton,
    slots: Vec<Vec<Cell>>,
    cursor: usize,
}

impl HistoryRing {
    /// Build a ring of `capacity` generations over a seeded automaton.
    ///
    /// The automaton's current state becomes the oldest retained
    /// generation. Returns `Err(ConfigError::ZeroCapacity)` for an
    /// empty ring.
    pub fn new(mut automaton: LineAutomaton, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.push(automaton.cells().to_vec());
        for _ in 1..capacity {
            automaton.next();
            slots.push(automaton.cells().to_vec());
        }
        Ok(Self {
            automaton,
            slots,
            cursor: 0,
        })
    }

    /// The ring capacity; also the exact number of retained generations.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Advance the automaton one generation, overwriting the oldest
    /// retained slot with the new state.
    pub fn next(&mut self) {
        self.automaton.next();
        self.slots[self.cursor].copy_from_slice(self.automaton.cells());
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// The retained generations in insertion order, oldest first.
    ///
    /// Restartable: each call yields a fresh pass over exactly
    /// [`capacity`](Self::capacity) generations.
    pub fn generations(&self) -> impl Iterator<Item = &[Cell]> {
        self.slots[self.cursor..]
            .iter()
            .chain(self.slots[..self.cursor].iter())
            .map(Vec::as_slice)
    }
}

impl Automaton for HistoryRing {
    fn advance(&mut self) {
        self.next();
    }

    fn randomize(&mut self) {
        self.automaton.randomize();
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        for (row, generation) in self.generations().enumerate() {
            for (col, cell) in generation.iter().enumerate() {
                if cell.alive {
                    surface.set_cell(
                        col as u16,
                        row as u16,
                        TRACE_SYMBOL,
                        Color::Default,
                        Color::Default,
                    )?;
                }
            }
        }
        Ok(())
    }
}
