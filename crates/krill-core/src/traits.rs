//! The automaton seam between the engines and the controller.

use crate::render::{Surface, SurfaceError};

/// A discrete automaton the controller can drive.
///
/// Object-safe: the controller owns a `Box<dyn Automaton>` and never
/// cares which simulation kind is behind it. Implementations uphold
/// the whole-generation-replace contract — `advance` swaps in a fully
/// computed next state, never a partially updated one.
pub trait Automaton {
    /// Compute and apply the next generation.
    fn advance(&mut self);

    /// Reset the state randomly, in whatever way suits the kind.
    fn randomize(&mut self);

    /// Project the current state onto a surface.
    ///
    /// Implementations only place cells; the caller clears before and
    /// flushes after.
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), SurfaceError>;
}
