use broadside::{attack, place_ship, Cell, Grid, GuessResult, Orientation, TurnCounters};

fn grid_with_submarine() -> Grid {
    let mut grid = Grid::new();
    place_ship(2, 2, 3, Orientation::Horizontal, &mut grid);
    grid
}

#[test]
fn test_hit_marks_cell_and_counts() {
    let mut grid = grid_with_submarine();
    let mut counters = TurnCounters::default();
    assert_eq!(attack(2, 3, &mut grid, &mut counters), GuessResult::Hit(3));
    assert_eq!(grid.get(2, 3), Cell::ShipHit(3));
    assert_eq!(counters.hits, 1);
    assert_eq!(counters.misses, 0);
}

#[test]
fn test_miss_marks_cell_and_counts() {
    let mut grid = grid_with_submarine();
    let mut counters = TurnCounters::default();
    assert_eq!(attack(5, 5, &mut grid, &mut counters), GuessResult::Miss);
    assert_eq!(grid.get(5, 5), Cell::Miss);
    assert_eq!(counters.misses, 1);
    assert_eq!(counters.hits, 0);
}

#[test]
fn test_repeat_attack_changes_nothing() {
    let mut grid = grid_with_submarine();
    let mut counters = TurnCounters::default();
    attack(2, 2, &mut grid, &mut counters);
    attack(0, 0, &mut grid, &mut counters);
    let before = grid.clone();

    assert_eq!(attack(2, 2, &mut grid, &mut counters), GuessResult::AlreadyGuessed);
    assert_eq!(attack(0, 0, &mut grid, &mut counters), GuessResult::AlreadyGuessed);
    assert_eq!(grid, before);
    assert_eq!(counters.hits, 1);
    assert_eq!(counters.misses, 1);
    assert_eq!(counters.shots(), 2);
}

#[test]
fn test_hit_names_the_ship() {
    let mut grid = grid_with_submarine();
    let mut counters = TurnCounters::default();
    let result = attack(2, 4, &mut grid, &mut counters);
    assert!(result.is_hit());
    assert_eq!(result.ship().map(|s| s.name()), Some("Submarine"));
    assert_eq!(GuessResult::Miss.ship(), None);
}
