//! Error types for automaton construction and grid operations.

use std::error::Error;
use std::fmt;

/// Errors detected when constructing or configuring an automaton.
///
/// All variants are construction-time failures: a malformed automaton
/// is never handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A grid dimension is zero.
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A grid dimension exceeds the addressable maximum.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The maximum allowed.
        max: usize,
    },
    /// The requested colony count is outside the catalog's bounds.
    ColonyCountOutOfRange {
        /// The requested count.
        requested: usize,
        /// Minimum active colonies.
        min: usize,
        /// Maximum active colonies (the catalog size).
        max: usize,
    },
    /// The generation delay is zero.
    ZeroDelay,
    /// The history ring capacity is zero.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::ColonyCountOutOfRange {
                requested,
                min,
                max,
            } => {
                write!(
                    f,
                    "colony count {requested} outside the supported range {min}..={max}"
                )
            }
            Self::ZeroDelay => write!(f, "generation delay must be positive"),
            Self::ZeroCapacity => write!(f, "history capacity must be positive"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from grid mutation helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A stamped pattern would extend past the grid edges.
    PatternOutOfBounds {
        /// Requested anchor row.
        row: usize,
        /// Requested anchor column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "pattern anchored at ({row}, {col}) does not fit a {rows}x{cols} grid"
                )
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::EmptyGrid { rows: 0, cols: 10 };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x10");

        let err = ConfigError::ColonyCountOutOfRange {
            requested: 12,
            min: 2,
            max: 8,
        };
        assert_eq!(
            err.to_string(),
            "colony count 12 outside the supported range 2..=8"
        );
    }

    #[test]
    fn grid_error_display() {
        let err = GridError::PatternOutOfBounds {
            row: 0,
            col: 3,
            rows: 10,
            cols: 10,
        };
        assert_eq!(
            err.to_string(),
            "pattern anchored at (0, 3) does not fit a 10x10 grid"
        );
    }
}
