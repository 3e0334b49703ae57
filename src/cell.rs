//! A single grid cell with a hit flag. Identity is the coordinate pair only.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::common::BoardError;
use crate::config::COORD_BOUND;

/// One cell of a vessel: a coordinate pair plus a live/destroyed flag.
#[derive(Debug, Clone)]
pub struct Cell {
    row: usize,
    column: usize,
    alive: bool,
}

impl Cell {
    /// Create a live cell, rejecting coordinates beyond [`COORD_BOUND`].
    pub fn new(row: usize, column: usize) -> Result<Self, BoardError> {
        if row > COORD_BOUND || column > COORD_BOUND {
            return Err(BoardError::InvalidCoordinate { row, column });
        }
        Ok(Cell {
            row,
            column,
            alive: true,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// `false` once the cell has been hit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Destroy the cell. Called by the owning vessel only.
    pub(crate) fn strike(&mut self) {
        self.alive = false;
    }
}

// Equality and hashing ignore `alive`: a cell is identified by its
// coordinates alone, so coordinate lookups keep working after a hit.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.column == other.column
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
