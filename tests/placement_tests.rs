use broadside::{
    is_placement_valid, place_ship, try_place, validate_placement, Cell, GameError, Grid,
    Orientation, Placement,
};

#[test]
fn test_horizontal_edge() {
    let grid = Grid::new();
    assert!(!is_placement_valid(0, 6, 5, Orientation::Horizontal, &grid));
    assert!(is_placement_valid(0, 5, 5, Orientation::Horizontal, &grid));
}

#[test]
fn test_vertical_edge() {
    let grid = Grid::new();
    assert!(!is_placement_valid(7, 0, 4, Orientation::Vertical, &grid));
    assert!(is_placement_valid(6, 0, 4, Orientation::Vertical, &grid));
    // a horizontal ship on the last row is fine
    assert!(is_placement_valid(9, 0, 4, Orientation::Horizontal, &grid));
}

#[test]
fn test_origin_off_board_is_invalid() {
    let grid = Grid::new();
    assert!(!is_placement_valid(10, 0, 2, Orientation::Horizontal, &grid));
    assert!(!is_placement_valid(0, 10, 2, Orientation::Vertical, &grid));
}

#[test]
fn test_overlap_is_invalid() {
    let mut grid = Grid::new();
    place_ship(4, 2, 5, Orientation::Horizontal, &mut grid);
    assert!(!is_placement_valid(2, 4, 3, Orientation::Vertical, &grid));
    assert!(!is_placement_valid(4, 6, 2, Orientation::Horizontal, &grid));
    assert!(is_placement_valid(5, 2, 4, Orientation::Horizontal, &grid));
}

#[test]
fn test_validation_does_not_mutate() {
    let mut grid = Grid::new();
    place_ship(0, 0, 3, Orientation::Vertical, &mut grid);
    let before = grid.clone();
    let _ = is_placement_valid(0, 0, 2, Orientation::Horizontal, &grid);
    let _ = is_placement_valid(5, 5, 2, Orientation::Horizontal, &grid);
    assert_eq!(grid, before);
}

#[test]
fn test_place_ship_writes_exactly_length_cells() {
    let mut grid = Grid::new();
    place_ship(2, 3, 4, Orientation::Vertical, &mut grid);
    assert_eq!(grid.count(Cell::Ship(4)), 4);
    for r in 2..6 {
        assert_eq!(grid.get(r, 3), Cell::Ship(4));
    }
    assert_eq!(grid.get(6, 3), Cell::Empty);
    assert_eq!(grid.occupied_cells(), 4);
}

#[test]
fn test_try_place_is_all_or_nothing() {
    let mut grid = Grid::new();
    try_place(&Placement::new(0, 0, 5, Orientation::Horizontal), &mut grid).unwrap();
    let before = grid.clone();
    let err = try_place(&Placement::new(0, 4, 3, Orientation::Vertical), &mut grid).unwrap_err();
    assert_eq!(err, GameError::InvalidPlacement);
    assert_eq!(grid, before);
}

#[test]
fn test_validate_placement_result() {
    let grid = Grid::new();
    assert_eq!(
        validate_placement(&Placement::new(0, 8, 3, Orientation::Horizontal), &grid),
        Err(GameError::InvalidPlacement)
    );
    assert!(validate_placement(&Placement::new(0, 7, 3, Orientation::Horizontal), &grid).is_ok());
}

#[test]
fn test_placement_cells() {
    let cells: Vec<_> = Placement::new(1, 1, 3, Orientation::Horizontal).cells().collect();
    assert_eq!(cells, vec![(1, 1), (1, 2), (1, 3)]);
    let cells: Vec<_> = Placement::new(1, 1, 2, Orientation::Vertical).cells().collect();
    assert_eq!(cells, vec![(1, 1), (2, 1)]);
}

#[test]
fn test_orientation_from_char() {
    assert_eq!(Orientation::try_from('H'), Ok(Orientation::Horizontal));
    assert_eq!(Orientation::try_from('v'), Ok(Orientation::Vertical));
    assert_eq!(Orientation::try_from('D'), Err(GameError::InvalidOrientation));
}
