//! Sunk-ship detection.
//!
//! Sinking is derived from the grid alone: a ship of length `n` is sunk when
//! `n` cells hold `ShipHit(n)`. That is sound because every length appears
//! once per fleet and placement never lets ships overlap.

use log::info;

use crate::config::{NUM_SHIPS, SHIPS};
use crate::grid::{Cell, Grid};
use crate::ship::ShipType;

/// Subset of the fleet, indexed like [`SHIPS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipSet {
    bits: u8,
}

impl ShipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize) {
        debug_assert!(index < NUM_SHIPS);
        self.bits |= 1 << index;
    }

    pub fn contains(&self, index: usize) -> bool {
        index < NUM_SHIPS && self.bits & (1 << index) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Ships in the set, in fleet order.
    pub fn iter(&self) -> impl Iterator<Item = ShipType> + '_ {
        let fleet: &'static [ShipType; NUM_SHIPS] = &SHIPS;
        fleet
            .iter()
            .enumerate()
            .filter(move |(i, _)| self.contains(*i))
            .map(|(_, s)| *s)
    }

    fn difference(&self, other: &ShipSet) -> ShipSet {
        ShipSet {
            bits: self.bits & !other.bits,
        }
    }
}

/// Ships on `grid` whose every cell has been hit.
pub fn sunk_ships(grid: &Grid) -> ShipSet {
    let mut set = ShipSet::new();
    for (i, ship) in SHIPS.iter().enumerate() {
        let hit = grid.count(Cell::ShipHit(ship.length()));
        if hit == ship.length() {
            set.insert(i);
        }
    }
    set
}

/// Number of sunk ships on `grid`. Stateless, safe to call repeatedly.
pub fn count_sunk(grid: &Grid) -> usize {
    sunk_ships(grid).len()
}

/// Result of one [`SunkTracker::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunkReport {
    pub sunk: usize,
    /// Ships that went down since the previous update.
    pub newly_sunk: ShipSet,
}

/// Remembers which sinkings were already announced for one grid so each ship
/// is reported exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunkTracker {
    reported: ShipSet,
}

impl SunkTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recount `grid` and return the ships not yet reported.
    pub fn update(&mut self, grid: &Grid) -> SunkReport {
        let now = sunk_ships(grid);
        let newly_sunk = now.difference(&self.reported);
        for ship in newly_sunk.iter() {
            info!("{} sunk", ship.name());
        }
        self.reported = now;
        SunkReport {
            sunk: now.len(),
            newly_sunk,
        }
    }

    pub fn reported(&self) -> ShipSet {
        self.reported
    }
}
