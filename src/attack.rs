//! Attack resolution and per-side shot tallies.

use log::debug;

use crate::common::GuessResult;
use crate::grid::{Cell, Grid};

/// Running totals for one side of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TurnCounters {
    pub hits: usize,
    pub misses: usize,
    /// Enemy ships this side has sunk. Recomputed from the enemy grid after
    /// each shot rather than incremented.
    pub sunk: usize,
}

impl TurnCounters {
    /// Shots that resolved to a hit or a miss.
    pub fn shots(&self) -> usize {
        self.hits + self.misses
    }
}

/// Fire at (`row`, `col`) on `grid`, crediting the result to `counters`.
///
/// Repeating a shot on a resolved cell changes nothing and reports
/// [`GuessResult::AlreadyGuessed`].
///
/// # Panics
///
/// Panics if the coordinate is off the board.
pub fn attack(row: usize, col: usize, grid: &mut Grid, counters: &mut TurnCounters) -> GuessResult {
    let result = match grid.get(row, col) {
        Cell::ShipHit(_) | Cell::Miss => GuessResult::AlreadyGuessed,
        Cell::Ship(length) => {
            grid.set(row, col, Cell::ShipHit(length));
            counters.hits += 1;
            GuessResult::Hit(length)
        }
        Cell::Empty => {
            grid.set(row, col, Cell::Miss);
            counters.misses += 1;
            GuessResult::Miss
        }
    };
    debug!("attack at ({}, {}) -> {:?}", row + 1, col + 1, result);
    result
}
