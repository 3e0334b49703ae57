//! Game board: fleet ownership, coordinate lookup, validation, and shots.

use std::collections::HashMap;

use crate::common::{BoardError, CellView, ShotResult};
use crate::config::{GRID_SIZE, REQUIRED_FLEET};
use crate::render;
use crate::vessel::{Vessel, NUM_CLASSES};

/// Offsets of the 8-connected neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
];

/// The full game state: an owned fleet plus a coordinate index into it.
///
/// `grid` maps every grid coordinate to the index of the occupying vessel, or
/// `None` for open water. Indexes rather than copies, so a hit delivered
/// through one coordinate is visible through every coordinate of that vessel.
#[derive(Debug)]
pub struct Board {
    vessels: Vec<Vessel>,
    grid: HashMap<(usize, usize), Option<usize>>,
}

impl Board {
    /// Build a board from vessel endpoint pairs and validate it.
    ///
    /// Vessel construction errors propagate as-is; a fleet with the wrong
    /// class counts fails with [`BoardError::FleetComposition`], and two
    /// vessels touching (diagonals included) fail with
    /// [`BoardError::AdjacencyViolation`]. On any failure no board value is
    /// produced.
    pub fn new(fleet: &[((usize, usize), (usize, usize))]) -> Result<Self, BoardError> {
        let vessels = fleet
            .iter()
            .map(|&(start, end)| Vessel::new(start, end))
            .collect::<Result<Vec<_>, _>>()?;
        let grid = Self::build_grid(&vessels);
        let board = Board { vessels, grid };
        board.validate_composition()?;
        board.validate_spacing()?;
        Ok(board)
    }

    fn build_grid(vessels: &[Vessel]) -> HashMap<(usize, usize), Option<usize>> {
        let mut grid = HashMap::new();
        for (index, vessel) in vessels.iter().enumerate() {
            for cell in vessel.cells() {
                grid.insert(cell.coords(), Some(index));
            }
        }
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                grid.entry((row, column)).or_insert(None);
            }
        }
        grid
    }

    fn validate_composition(&self) -> Result<(), BoardError> {
        let mut expected = [0usize; NUM_CLASSES];
        for (class, count) in REQUIRED_FLEET {
            expected[class as usize] = count;
        }
        let mut actual = [0usize; NUM_CLASSES];
        for vessel in &self.vessels {
            actual[vessel.class() as usize] += 1;
        }
        if actual != expected {
            return Err(BoardError::FleetComposition { actual });
        }
        Ok(())
    }

    fn validate_spacing(&self) -> Result<(), BoardError> {
        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                let index = match self.grid.get(&(row, column)) {
                    Some(&Some(index)) => index,
                    _ => continue,
                };
                for (dr, dc) in NEIGHBOR_OFFSETS {
                    let nr = row as isize + dr;
                    let nc = column as isize + dc;
                    if nr < 0 || nc < 0 {
                        continue;
                    }
                    let neighbor = (nr as usize, nc as usize);
                    if let Some(&Some(other)) = self.grid.get(&neighbor) {
                        if other != index {
                            return Err(BoardError::AdjacencyViolation {
                                first: (row, column),
                                second: neighbor,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Fire at a location and print the resulting board to stdout.
    ///
    /// Open water is a [`ShotResult::Miss`] with no mutation. An occupied
    /// location delegates to the vessel's hit handling; repeat shots are not
    /// an error here, the result simply reflects the vessel's current state.
    pub fn fire(&mut self, location: (usize, usize)) -> ShotResult {
        let result = match self.grid.get(&location).copied().flatten() {
            None => ShotResult::Miss,
            Some(index) => {
                let vessel = &mut self.vessels[index];
                vessel.hit(location.0, location.1);
                if vessel.is_sunk() {
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                }
            }
        };
        render::print_board(self);
        result
    }

    /// The fleet, in construction order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Vessel occupying (`row`, `column`), if any.
    pub fn vessel_at(&self, row: usize, column: usize) -> Option<&Vessel> {
        self.grid
            .get(&(row, column))
            .copied()
            .flatten()
            .map(|index| &self.vessels[index])
    }

    /// Number of coordinates in the lookup grid.
    pub fn grid_len(&self) -> usize {
        self.grid.len()
    }

    /// Number of grid coordinates occupied by a vessel.
    pub fn occupied_cells(&self) -> usize {
        self.grid.values().filter(|entry| entry.is_some()).count()
    }

    /// `true` once every vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        self.vessels.iter().all(Vessel::is_sunk)
    }

    /// Display state of a single location.
    pub fn cell_view(&self, row: usize, column: usize) -> CellView {
        match self.vessel_at(row, column) {
            None => CellView::Water,
            Some(vessel) if vessel.is_sunk() => CellView::Sunk,
            Some(vessel) => {
                let alive = vessel
                    .cells()
                    .iter()
                    .find(|c| c.coords() == (row, column))
                    .is_some_and(|c| c.is_alive());
                if alive {
                    CellView::Intact
                } else {
                    CellView::Damaged
                }
            }
        }
    }
}
