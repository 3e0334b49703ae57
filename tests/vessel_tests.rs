use armada::{BoardError, Cell, CellLookup, HitOutcome, Vessel, VesselClass};

#[test]
fn horizontal_span_builds_in_order() -> Result<(), BoardError> {
    let vessel = Vessel::new((2, 1), (2, 4))?;
    assert_eq!(vessel.class(), VesselClass::Carrier);
    let coords: Vec<_> = vessel.cells().iter().map(Cell::coords).collect();
    assert_eq!(coords, vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
    Ok(())
}

#[test]
fn vertical_span_builds_in_order() -> Result<(), BoardError> {
    let vessel = Vessel::new((5, 3), (7, 3))?;
    assert_eq!(vessel.class(), VesselClass::Battleship);
    let coords: Vec<_> = vessel.cells().iter().map(Cell::coords).collect();
    assert_eq!(coords, vec![(5, 3), (6, 3), (7, 3)]);
    Ok(())
}

#[test]
fn single_cell_is_a_submarine() -> Result<(), BoardError> {
    let vessel = Vessel::new((4, 4), (4, 4))?;
    assert_eq!(vessel.class(), VesselClass::Submarine);
    assert_eq!(vessel.cells().len(), 1);
    Ok(())
}

#[test]
fn class_follows_cell_count() -> Result<(), BoardError> {
    assert_eq!(Vessel::new((0, 0), (0, 1))?.class(), VesselClass::Cruiser);
    assert_eq!(Vessel::new((0, 3), (2, 3))?.class(), VesselClass::Battleship);
    assert_eq!(VesselClass::Carrier.cell_count(), 4);
    assert_eq!(VesselClass::from_cell_count(5), None);
    Ok(())
}

#[test]
fn diagonal_endpoints_are_rejected() {
    assert_eq!(
        Vessel::new((0, 0), (1, 1)).unwrap_err(),
        BoardError::InvalidShape {
            start: (0, 0),
            end: (1, 1)
        }
    );
}

#[test]
fn reversed_span_is_rejected() {
    assert_eq!(
        Vessel::new((3, 3), (1, 3)).unwrap_err(),
        BoardError::InvalidShape {
            start: (3, 3),
            end: (1, 3)
        }
    );
}

#[test]
fn five_cell_span_is_rejected() {
    assert_eq!(
        Vessel::new((0, 0), (0, 4)).unwrap_err(),
        BoardError::InvalidShape {
            start: (0, 0),
            end: (0, 4)
        }
    );
}

#[test]
fn out_of_range_coordinate_is_rejected() {
    assert_eq!(
        Vessel::new((11, 0), (11, 2)).unwrap_err(),
        BoardError::InvalidCoordinate { row: 11, column: 0 }
    );
    assert_eq!(
        Cell::new(0, 11).unwrap_err(),
        BoardError::InvalidCoordinate { row: 0, column: 11 }
    );
}

#[test]
fn coordinate_bound_is_inclusive() -> Result<(), BoardError> {
    // 10 is accepted even though the drawn grid stops at 9
    assert!(Cell::new(10, 10).is_ok());
    let vessel = Vessel::new((10, 7), (10, 10))?;
    assert_eq!(vessel.class(), VesselClass::Carrier);
    Ok(())
}

#[test]
fn cell_equality_ignores_alive_flag() -> Result<(), BoardError> {
    let mut vessel = Vessel::new((2, 2), (2, 3))?;
    assert_eq!(vessel.hit(2, 2), HitOutcome::Damaged);
    // the destroyed cell still compares equal to a fresh one at the same spot
    match vessel.cell_at(2, 2) {
        CellLookup::Found(cell) => {
            assert!(!cell.is_alive());
            assert_eq!(*cell, Cell::new(2, 2)?);
        }
        other => panic!("expected Found, got {:?}", other),
    }
    Ok(())
}

#[test]
fn lookup_reports_not_found_and_already_sunk() -> Result<(), BoardError> {
    let mut vessel = Vessel::new((6, 6), (6, 6))?;
    assert_eq!(vessel.cell_at(0, 0), CellLookup::NotFound);
    assert!(matches!(vessel.cell_at(6, 6), CellLookup::Found(_)));
    assert_eq!(vessel.hit(6, 6), HitOutcome::Sunk);
    assert_eq!(vessel.cell_at(6, 6), CellLookup::AlreadySunk);
    Ok(())
}

#[test]
fn hit_outcomes_cover_every_case() -> Result<(), BoardError> {
    let mut vessel = Vessel::new((1, 1), (1, 2))?;
    assert_eq!(vessel.hit(0, 0), HitOutcome::NotFound);
    assert_eq!(vessel.hit(1, 1), HitOutcome::Damaged);
    assert_eq!(vessel.hit(1, 1), HitOutcome::AlreadyDestroyed);
    assert!(!vessel.is_sunk());
    assert_eq!(vessel.hit(1, 2), HitOutcome::Sunk);
    assert!(vessel.is_sunk());
    assert_eq!(vessel.hit(1, 1), HitOutcome::AlreadySunk);
    Ok(())
}

#[test]
fn sunk_only_when_every_cell_is_dead() -> Result<(), BoardError> {
    let mut vessel = Vessel::new((0, 0), (2, 0))?;
    assert_eq!(vessel.hit(1, 0), HitOutcome::Damaged);
    assert_eq!(vessel.hit(2, 0), HitOutcome::Damaged);
    assert!(!vessel.is_sunk());
    assert_eq!(vessel.hit(0, 0), HitOutcome::Sunk);
    assert!(vessel.is_sunk());
    Ok(())
}

#[test]
fn display_forms() -> Result<(), BoardError> {
    let cell = Cell::new(2, 3)?;
    assert_eq!(cell.to_string(), "(2, 3)");
    let vessel = Vessel::new((2, 3), (2, 4))?;
    let text = vessel.to_string();
    assert!(text.contains("Cruiser"));
    assert!(text.contains("(2, 3)"));
    assert!(text.contains("(2, 4)"));
    Ok(())
}
