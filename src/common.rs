//! Common types: board errors, shot results, and non-fatal hit outcomes.

use crate::cell::Cell;
use crate::config::REQUIRED_FLEET;
use crate::vessel::{VesselClass, NUM_CLASSES};

/// Result of a shot at a board location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a vessel that still has live cells.
    Hit,
    /// Shot struck a vessel that is now fully sunk.
    Sunk,
}

impl core::fmt::Display for ShotResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotResult::Miss => write!(f, "Miss"),
            ShotResult::Hit => write!(f, "Hit"),
            ShotResult::Sunk => write!(f, "Sunk"),
        }
    }
}

/// Outcome of delivering a hit to a vessel. The non-fatal cases are no-ops on
/// the vessel and are surfaced here instead of an error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// A live cell was destroyed; the vessel still floats.
    Damaged,
    /// The last live cell was destroyed; the vessel is now sunk.
    Sunk,
    /// The coordinate is not one of this vessel's cells.
    NotFound,
    /// The vessel was already sunk before this hit.
    AlreadySunk,
    /// The targeted cell was already destroyed.
    AlreadyDestroyed,
}

/// Outcome of looking up a cell on a vessel by coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellLookup<'a> {
    /// The coordinate matches one of the vessel's cells.
    Found(&'a Cell),
    /// The coordinate is not part of the vessel.
    NotFound,
    /// The vessel is already sunk; the search is skipped.
    AlreadySunk,
}

/// How a single board location should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// No vessel occupies the location.
    Water,
    /// A live cell of an unsunk vessel.
    Intact,
    /// A destroyed cell of a vessel that still floats.
    Damaged,
    /// Any cell of a fully sunk vessel.
    Sunk,
}

/// Errors returned by board and vessel construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate lies outside the accepted range.
    InvalidCoordinate { row: usize, column: usize },
    /// Vessel endpoints do not form a straight contiguous span of length 1-4.
    InvalidShape {
        start: (usize, usize),
        end: (usize, usize),
    },
    /// Fleet does not contain the required number of vessels per class.
    FleetComposition { actual: [usize; NUM_CLASSES] },
    /// Two distinct vessels occupy touching cells, diagonals included.
    AdjacencyViolation {
        first: (usize, usize),
        second: (usize, usize),
    },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, column } => {
                write!(f, "coordinate ({}, {}) is outside the field", row, column)
            }
            BoardError::InvalidShape { start, end } => {
                write!(
                    f,
                    "vessel endpoints ({}, {}) and ({}, {}) do not form a straight span",
                    start.0, start.1, end.0, end.1
                )
            }
            BoardError::FleetComposition { actual } => {
                write!(f, "fleet composition mismatch; expected")?;
                for (class, count) in REQUIRED_FLEET {
                    write!(f, " {}x{}", count, class.name())?;
                }
                write!(f, ", got")?;
                for class in VesselClass::ALL {
                    write!(f, " {}x{}", actual[class as usize], class.name())?;
                }
                Ok(())
            }
            BoardError::AdjacencyViolation { first, second } => {
                write!(
                    f,
                    "vessels touch at ({}, {}) and ({}, {})",
                    first.0, first.1, second.0, second.1
                )
            }
        }
    }
}

impl std::error::Error for BoardError {}
