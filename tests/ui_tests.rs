#![cfg(feature = "std")]

use broadside::ui::{render_grid, render_statistics, render_view};
use broadside::{
    attack, place_ship, GameSession, Grid, Orientation, TargetView, TurnCounters,
};
use rand::{rngs::SmallRng, SeedableRng};

fn row_line(board: &str, row: usize) -> &str {
    board
        .lines()
        .find(|l| l.starts_with(&format!("{:2} |", row)))
        .expect("row missing")
}

#[test]
fn test_board_frame() {
    let out = render_grid(&Grid::new(), "Your Board", true);
    assert!(out.contains("Your Board"));
    assert!(out.contains(" 1  2  3  4  5  6  7  8  9 10"));
    assert_eq!(out.lines().filter(|l| l.trim_start().starts_with("===")).count(), 2);
    assert_eq!(out.lines().filter(|l| l.contains('|')).count(), 10);
}

#[test]
fn test_own_board_reveals_ships() {
    let mut grid = Grid::new();
    place_ship(0, 0, 3, Orientation::Horizontal, &mut grid);
    let mut counters = TurnCounters::default();
    attack(0, 1, &mut grid, &mut counters);
    attack(0, 5, &mut grid, &mut counters);

    let shown = render_grid(&grid, "Your Board", true);
    let line = row_line(&shown, 1);
    assert!(line.starts_with(" 1 | 3  X  3  .  .  O"));

    let hidden = render_grid(&grid, "Enemy Board", false);
    let line = row_line(&hidden, 1);
    assert!(line.starts_with(" 1 | .  X  .  .  .  O"));
}

#[test]
fn test_view_only_shows_results() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut session = GameSession::new();
    session.place_player_fleet_random(&mut rng).unwrap();
    session.place_opponent_fleet(&mut rng).unwrap();
    session.start().unwrap();

    // a fresh view looks like open water no matter where the ships are
    let out = render_view(session.player_view(), "Enemy Board");
    assert_eq!(out, render_view(&TargetView::new(), "Enemy Board"));
    assert!(!out.contains('X'));

    let (r, c) = session
        .opponent_grid()
        .iter()
        .find(|(_, _, cell)| cell.ship_length().is_some())
        .map(|(r, c, _)| (r, c))
        .unwrap();
    session.player_attack(r, c).unwrap();
    let out = render_view(session.player_view(), "Enemy Board");
    assert_eq!(out.matches('X').count(), 1);
    assert_eq!(out.matches('O').count(), 0);
}

#[test]
fn test_statistics_block() {
    let player = TurnCounters {
        hits: 14,
        misses: 20,
        sunk: 4,
    };
    let opponent = TurnCounters {
        hits: 9,
        misses: 25,
        sunk: 2,
    };
    let out = render_statistics(&player, &opponent);
    assert!(out.contains("Game Statistics"));
    assert!(out.contains("Shots that hit: 14"));
    assert!(out.contains("Shots that missed: 20"));
    assert!(out.contains("Enemy ships sunk: 4"));
    assert!(out.contains("Your ships sunk by the enemy: 2"));
}
