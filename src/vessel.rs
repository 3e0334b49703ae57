//! Vessel construction and hit resolution.

use core::fmt;

use crate::cell::Cell;
use crate::common::{BoardError, CellLookup, HitOutcome};

/// Number of vessel classes.
pub const NUM_CLASSES: usize = 4;

/// Class of a vessel, named by its cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VesselClass {
    Submarine,
    Cruiser,
    Battleship,
    Carrier,
}

impl VesselClass {
    /// All classes, in ascending cell-count order.
    pub const ALL: [VesselClass; NUM_CLASSES] = [
        VesselClass::Submarine,
        VesselClass::Cruiser,
        VesselClass::Battleship,
        VesselClass::Carrier,
    ];

    /// Class for a given cell count, `None` outside 1-4.
    pub fn from_cell_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(VesselClass::Submarine),
            2 => Some(VesselClass::Cruiser),
            3 => Some(VesselClass::Battleship),
            4 => Some(VesselClass::Carrier),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VesselClass::Submarine => "Submarine",
            VesselClass::Cruiser => "Cruiser",
            VesselClass::Battleship => "Battleship",
            VesselClass::Carrier => "Carrier",
        }
    }

    pub fn cell_count(self) -> usize {
        self as usize + 1
    }
}

impl fmt::Display for VesselClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A straight, contiguous run of 1-4 cells on the board.
///
/// The cell set is fixed at construction; only the cells' alive flags and the
/// vessel's `sunk` flag change afterwards, and `sunk` flips exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    cells: Vec<Cell>,
    sunk: bool,
    class: VesselClass,
}

impl Vessel {
    /// Build a vessel spanning `start..=end` along whichever axis differs.
    ///
    /// Rows ascend when `start.0 < end.0`, columns ascend when
    /// `start.1 < end.1`, and equal endpoints give a single cell. Diagonal or
    /// reversed endpoint pairs fail with [`BoardError::InvalidShape`].
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Result<Self, BoardError> {
        let cells = Self::span(start, end)?;
        let class = VesselClass::from_cell_count(cells.len())
            .ok_or(BoardError::InvalidShape { start, end })?;
        Ok(Vessel {
            cells,
            sunk: false,
            class,
        })
    }

    fn span(start: (usize, usize), end: (usize, usize)) -> Result<Vec<Cell>, BoardError> {
        if start.0 != end.0 && start.1 != end.1 {
            return Err(BoardError::InvalidShape { start, end });
        }
        if start.0 < end.0 {
            (start.0..=end.0).map(|r| Cell::new(r, start.1)).collect()
        } else if start.1 < end.1 {
            (start.1..=end.1).map(|c| Cell::new(start.0, c)).collect()
        } else if start == end {
            Ok(vec![Cell::new(start.0, start.1)?])
        } else {
            // reversed span
            Err(BoardError::InvalidShape { start, end })
        }
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    /// Cells in span order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Look up the cell at (`row`, `column`), short-circuiting on a sunk
    /// vessel. Both failure cases are advisory, not errors.
    pub fn cell_at(&self, row: usize, column: usize) -> CellLookup<'_> {
        if self.sunk {
            log::debug!("{} is already sunk", self.class);
            return CellLookup::AlreadySunk;
        }
        match self.cells.iter().find(|c| c.coords() == (row, column)) {
            Some(cell) => CellLookup::Found(cell),
            None => {
                log::debug!("{} has no cell at ({}, {})", self.class, row, column);
                CellLookup::NotFound
            }
        }
    }

    /// Deliver a hit at (`row`, `column`).
    ///
    /// Sunk vessels, foreign coordinates, and already-destroyed cells are
    /// no-ops reported through the returned [`HitOutcome`]. Otherwise the
    /// cell is destroyed, and the vessel sinks once no live cell remains.
    pub fn hit(&mut self, row: usize, column: usize) -> HitOutcome {
        if self.sunk {
            log::debug!("{} is already sunk", self.class);
            return HitOutcome::AlreadySunk;
        }
        let Some(cell) = self
            .cells
            .iter_mut()
            .find(|c| c.coords() == (row, column))
        else {
            log::debug!("{} has no cell at ({}, {})", self.class, row, column);
            return HitOutcome::NotFound;
        };
        if !cell.is_alive() {
            log::debug!("cell ({}, {}) is already destroyed", row, column);
            return HitOutcome::AlreadyDestroyed;
        }
        cell.strike();
        if self.cells.iter().all(|c| !c.is_alive()) {
            self.sunk = true;
            log::info!("{} is sunk", self.class);
            HitOutcome::Sunk
        } else {
            HitOutcome::Damaged
        }
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.class)?;
        for cell in &self.cells {
            write!(f, " {}", cell)?;
        }
        Ok(())
    }
}
