#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    attack::TurnCounters,
    config::BOARD_SIZE,
    game::{Knowledge, TargetView},
    grid::{Cell, Grid},
};

const N: usize = BOARD_SIZE as usize;

pub const EMPTY_GLYPH: char = '.';
pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = 'O';

fn render_board(title: &str, glyph: impl Fn(usize, usize) -> char) -> String {
    let rule = "===".repeat(N);
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", title);
    out.push_str("    ");
    for c in 0..N {
        let _ = write!(out, "{:2} ", c + 1);
    }
    out.push('\n');
    let _ = writeln!(out, "   ={}=", rule);
    for r in 0..N {
        let _ = write!(out, "{:2} |", r + 1);
        for c in 0..N {
            let _ = write!(out, "{:>2} ", glyph(r, c));
        }
        out.push_str("|\n");
    }
    let _ = writeln!(out, "   ={}=", rule);
    out
}

/// Text board for `grid`. Unhit ship cells show their ship's length when
/// `reveal` is set and look like open water otherwise.
pub fn render_grid(grid: &Grid, title: &str, reveal: bool) -> String {
    render_board(title, |r, c| match grid.get(r, c) {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Ship(len) if reveal => char::from_digit(len as u32, 10).unwrap_or('S'),
        Cell::Ship(_) => EMPTY_GLYPH,
        Cell::ShipHit(_) => HIT_GLYPH,
        Cell::Miss => MISS_GLYPH,
    })
}

/// Text board for what an attacker knows about the enemy.
pub fn render_view(view: &TargetView, title: &str) -> String {
    render_board(title, |r, c| match view.get(r, c) {
        Knowledge::Unknown => EMPTY_GLYPH,
        Knowledge::Hit => HIT_GLYPH,
        Knowledge::Miss => MISS_GLYPH,
    })
}

/// End-of-game statistics block.
pub fn render_statistics(player: &TurnCounters, opponent: &TurnCounters) -> String {
    let bar = "=====================================";
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", bar);
    let _ = writeln!(out, "           Game Statistics           ");
    let _ = writeln!(out, "{}", bar);
    let _ = writeln!(out, "Shots that hit: {}", player.hits);
    let _ = writeln!(out, "Shots that missed: {}", player.misses);
    let _ = writeln!(out, "Enemy ships sunk: {}", player.sunk);
    let _ = writeln!(out, "Your ships sunk by the enemy: {}", opponent.sunk);
    let _ = writeln!(out, "{}", bar);
    out
}
