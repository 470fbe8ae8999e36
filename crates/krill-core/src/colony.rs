//! The colony catalog: named population variants competing for territory.

use std::fmt;

use crate::error::ConfigError;
use crate::render::Color;

/// Index of a colony within a [`ColonyCatalog`].
///
/// Cells store this small index instead of a reference into the
/// catalog, keeping cell values `Copy` and free of lifetimes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColonyId(pub u8);

impl fmt::Display for ColonyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A population variant with a distinctive render symbol and color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colony {
    /// Display name.
    pub name: &'static str,
    /// Symbol drawn for live cells of this colony.
    pub symbol: char,
    /// Foreground color drawn for live cells of this colony.
    pub color: Color,
}

/// The standard catalog entries, in fixed index order.
const STANDARD_COLONIES: [Colony; 8] = [
    Colony {
        name: "Outsiders",
        symbol: 'O',
        color: Color::Default,
    },
    Colony {
        name: "Red March",
        symbol: '-',
        color: Color::Red,
    },
    Colony {
        name: "Green Tide",
        symbol: '+',
        color: Color::Green,
    },
    Colony {
        name: "Blue Order",
        symbol: 'X',
        color: Color::Blue,
    },
    Colony {
        name: "Gold Rush",
        symbol: '$',
        color: Color::Yellow,
    },
    Colony {
        name: "Magenta Bloom",
        symbol: '*',
        color: Color::Magenta,
    },
    Colony {
        name: "Cyan Drift",
        symbol: '%',
        color: Color::Cyan,
    },
    Colony {
        name: "White Static",
        symbol: '8',
        color: Color::White,
    },
];

/// An immutable, ordered catalog of colonies.
///
/// Passed explicitly to the boards that need one — there is no hidden
/// process-wide registry, so test instances can run side by side with
/// different catalogs.
#[derive(Clone, Copy, Debug)]
pub struct ColonyCatalog {
    colonies: &'static [Colony],
}

impl ColonyCatalog {
    /// The minimum number of active colonies for a meaningful contest.
    pub const MIN_ACTIVE: usize = 2;

    /// The standard 8-colony catalog.
    pub fn standard() -> Self {
        Self {
            colonies: &STANDARD_COLONIES,
        }
    }

    /// Build a catalog over a custom static colony list.
    pub fn from_static(colonies: &'static [Colony]) -> Self {
        Self { colonies }
    }

    /// Number of colonies in the catalog.
    pub fn len(&self) -> usize {
        self.colonies.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.colonies.is_empty()
    }

    /// Look up a colony by index.
    pub fn get(&self, id: ColonyId) -> Option<&Colony> {
        self.colonies.get(usize::from(id.0))
    }

    /// Validate an active-subset size against the catalog bounds.
    ///
    /// Returns `Err(ConfigError::ColonyCountOutOfRange)` unless
    /// `MIN_ACTIVE <= count <= len()`.
    pub fn validate_active(&self, count: usize) -> Result<(), ConfigError> {
        if count < Self::MIN_ACTIVE || count > self.colonies.len() {
            return Err(ConfigError::ColonyCountOutOfRange {
                requested: count,
                min: Self::MIN_ACTIVE,
                max: self.colonies.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_eight_colonies() {
        let catalog = ColonyCatalog::standard();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = ColonyCatalog::standard();
        let zeroth = catalog.get(ColonyId(0)).unwrap();
        assert_eq!(zeroth.symbol, 'O');
        assert_eq!(zeroth.color, Color::Default);
        assert!(catalog.get(ColonyId(8)).is_none());
    }

    #[test]
    fn validate_active_bounds() {
        let catalog = ColonyCatalog::standard();
        assert!(catalog.validate_active(2).is_ok());
        assert!(catalog.validate_active(8).is_ok());
        assert!(matches!(
            catalog.validate_active(1),
            Err(ConfigError::ColonyCountOutOfRange {
                requested: 1,
                min: 2,
                max: 8,
            })
        ));
        assert!(matches!(
            catalog.validate_active(9),
            Err(ConfigError::ColonyCountOutOfRange { requested: 9, .. })
        ));
    }

    #[test]
    fn symbols_are_distinct() {
        let catalog = ColonyCatalog::standard();
        for i in 0..catalog.len() {
            for j in (i + 1)..catalog.len() {
                let a = catalog.get(ColonyId(i as u8)).unwrap();
                let b = catalog.get(ColonyId(j as u8)).unwrap();
                assert_ne!(a.symbol, b.symbol, "{} vs {}", a.name, b.name);
            }
        }
    }
}
