use broadside::{
    attack, count_sunk, place_ship, sunk_ships, Grid, Orientation, SunkTracker, TurnCounters,
};

fn fleet_grid() -> Grid {
    let mut grid = Grid::new();
    place_ship(0, 0, 5, Orientation::Horizontal, &mut grid);
    place_ship(2, 0, 4, Orientation::Horizontal, &mut grid);
    place_ship(4, 0, 3, Orientation::Horizontal, &mut grid);
    place_ship(6, 0, 2, Orientation::Horizontal, &mut grid);
    grid
}

#[test]
fn test_patrol_boat_needs_both_cells() {
    let mut grid = fleet_grid();
    let mut counters = TurnCounters::default();
    assert_eq!(count_sunk(&grid), 0);

    attack(6, 0, &mut grid, &mut counters);
    assert_eq!(count_sunk(&grid), 0);

    attack(6, 1, &mut grid, &mut counters);
    assert_eq!(count_sunk(&grid), 1);
    let sunk = sunk_ships(&grid);
    assert_eq!(sunk.iter().map(|s| s.name()).collect::<Vec<_>>(), vec!["Patrol Boat"]);
}

#[test]
fn test_partial_hits_on_every_ship_sink_nothing() {
    let mut grid = fleet_grid();
    let mut counters = TurnCounters::default();
    for row in [0, 2, 4, 6] {
        attack(row, 0, &mut grid, &mut counters);
    }
    assert_eq!(count_sunk(&grid), 0);
}

#[test]
fn test_whole_fleet_sunk() {
    let mut grid = fleet_grid();
    let mut counters = TurnCounters::default();
    let targets: Vec<_> = grid
        .iter()
        .filter(|(_, _, c)| c.ship_length().is_some())
        .map(|(r, c, _)| (r, c))
        .collect();
    for (r, c) in targets {
        attack(r, c, &mut grid, &mut counters);
    }
    assert_eq!(count_sunk(&grid), 4);
    // counting is stateless
    assert_eq!(count_sunk(&grid), 4);
}

#[test]
fn test_tracker_reports_each_sinking_once() {
    let mut grid = fleet_grid();
    let mut counters = TurnCounters::default();
    let mut tracker = SunkTracker::new();

    attack(4, 0, &mut grid, &mut counters);
    attack(4, 1, &mut grid, &mut counters);
    assert!(tracker.update(&grid).newly_sunk.is_empty());

    attack(4, 2, &mut grid, &mut counters);
    let report = tracker.update(&grid);
    assert_eq!(report.sunk, 1);
    assert_eq!(report.newly_sunk.len(), 1);
    assert_eq!(report.newly_sunk.iter().next().map(|s| s.name()), Some("Submarine"));

    // a later miss does not re-announce
    attack(9, 9, &mut grid, &mut counters);
    let report = tracker.update(&grid);
    assert_eq!(report.sunk, 1);
    assert!(report.newly_sunk.is_empty());
    assert_eq!(tracker.reported().len(), 1);
}
