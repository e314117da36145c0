// Opponent targeting: random search, switching to a hunt around the most
// recent hit.

use log::{debug, warn};
use rand::Rng;

use crate::{
    common::{GameError, GuessResult},
    config::{BOARD_SIZE, MAX_TARGETING_ATTEMPTS},
    grid::{is_valid_coordinate, Cell, Grid},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Search order around a hit: down, up, right, left.
const HUNT_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// In-bounds, not-yet-attacked orthogonal neighbours of (`row`, `col`), in
/// search order.
pub fn hunt_candidates(
    row: usize,
    col: usize,
    grid: &Grid,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    HUNT_OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if !is_valid_coordinate(r, c) {
            return None;
        }
        let (r, c) = (r as usize, c as usize);
        if grid.get(r, c).is_guessed() {
            None
        } else {
            Some((r, c))
        }
    })
}

/// Uniformly random unattacked cell, giving up after
/// [`MAX_TARGETING_ATTEMPTS`] draws.
pub fn random_target<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &Grid,
) -> Result<(usize, usize), GameError> {
    for _ in 0..MAX_TARGETING_ATTEMPTS {
        let r = rng.random_range(0..GRID_SIZE);
        let c = rng.random_range(0..GRID_SIZE);
        if !grid.get(r, c).is_guessed() {
            return Ok((r, c));
        }
    }
    Err(GameError::TargetingExhausted)
}

/// Targeting memory for the scripted opponent.
///
/// After a hit the opponent checks the four neighbours of that hit and takes
/// the first one that actually holds an unhit ship segment. It reads ship
/// presence straight from the grid it is attacking, so it has perfect
/// knowledge at those four cells and nowhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Targeting {
    last_hit: Option<(usize, usize)>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinate hunt mode is centred on, if any.
    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.last_hit
    }

    /// Choose the next cell to attack on `grid`.
    ///
    /// Never returns a cell that has already been attacked. Falls back to
    /// random search when no neighbour of the last hit qualifies, clearing the
    /// hunt in the process.
    pub fn next_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: &Grid,
    ) -> Result<(usize, usize), GameError> {
        if let Some((row, col)) = self.last_hit {
            let found = hunt_candidates(row, col, grid)
                .find(|&(r, c)| matches!(grid.get(r, c), Cell::Ship(_)));
            if let Some(target) = found {
                debug!("hunting around ({}, {}) -> {:?}", row + 1, col + 1, target);
                return Ok(target);
            }
            debug!("nothing left around ({}, {}), back to random search", row + 1, col + 1);
            self.last_hit = None;
        }
        random_target(rng, grid).map_err(|e| {
            warn!("opponent targeting gave up after {} attempts", MAX_TARGETING_ATTEMPTS);
            e
        })
    }

    /// Update memory with the result of the shot at `coord`.
    pub fn observe(&mut self, coord: (usize, usize), result: GuessResult) {
        match result {
            GuessResult::Hit(_) => self.last_hit = Some(coord),
            GuessResult::Miss => self.last_hit = None,
            GuessResult::AlreadyGuessed => {}
        }
    }
}
