//! Run configuration shared by the CLI front-ends.

use std::time::{SystemTime, UNIX_EPOCH};

use krill_core::ConfigError;

/// Parameters for a controller run.
///
/// Grid dimensions are validated by the automaton constructors; this
/// only covers the controller's own knobs.
#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    /// Initial delay between generations, in milliseconds.
    pub delay_ms: u64,
    /// Seed for the automaton's random operations.
    pub seed: u64,
}

impl RunConfig {
    /// Build a config, deriving the seed from the clock when none is
    /// given.
    pub fn new(delay_ms: u64, seed: Option<u64>) -> Self {
        Self {
            delay_ms,
            seed: seed.unwrap_or_else(seed_from_clock),
        }
    }

    /// Check structural invariants at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        Ok(())
    }
}

/// A wall-clock-derived seed, for runs where reproducibility is not
/// requested.
fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
