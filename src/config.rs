use crate::vessel::VesselClass;

/// Side length of the playing field; cells are iterated `0..GRID_SIZE`.
pub const GRID_SIZE: usize = 10;

/// Highest coordinate accepted at cell construction, inclusive. One past the
/// last drawn row/column; kept that way deliberately.
pub const COORD_BOUND: usize = 10;

/// Required number of vessels per class for a legal fleet.
pub const REQUIRED_FLEET: [(VesselClass, usize); 4] = [
    (VesselClass::Submarine, 4),
    (VesselClass::Cruiser, 3),
    (VesselClass::Battleship, 2),
    (VesselClass::Carrier, 1),
];

/// Total occupied cells of a legal fleet.
pub const TOTAL_VESSEL_CELLS: usize = 20;
