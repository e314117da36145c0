//! Placement validation and ship commit.

use log::debug;

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::grid::{Cell, Grid};
use crate::ship::{Orientation, Placement};

const N: usize = BOARD_SIZE as usize;

/// Check whether a ship of `length` fits at (`row`, `col`) running in
/// `orientation` without leaving the board or touching an occupied cell.
/// Never mutates the grid.
pub fn is_placement_valid(
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
    grid: &Grid,
) -> bool {
    if row >= N || col >= N || length == 0 {
        return false;
    }
    let end = match orientation {
        Orientation::Horizontal => col + length,
        Orientation::Vertical => row + length,
    };
    if end > N {
        return false;
    }
    Placement::new(row, col, length, orientation)
        .cells()
        .all(|(r, c)| grid.get(r, c) == Cell::Empty)
}

/// [`is_placement_valid`] for a placement record, as a `Result`.
pub fn validate_placement(placement: &Placement, grid: &Grid) -> Result<(), GameError> {
    if is_placement_valid(
        placement.row,
        placement.col,
        placement.length,
        placement.orientation,
        grid,
    ) {
        Ok(())
    } else {
        Err(GameError::InvalidPlacement)
    }
}

/// Write `Ship(length)` into every cell the ship covers.
///
/// Performs no checks of its own: the placement must already have passed
/// [`is_placement_valid`] against this grid.
pub fn place_ship(row: usize, col: usize, length: usize, orientation: Orientation, grid: &mut Grid) {
    for (r, c) in Placement::new(row, col, length, orientation).cells() {
        grid.set(r, c, Cell::Ship(length));
    }
    debug!(
        "placed ship of length {} at ({}, {}) {}",
        length,
        row + 1,
        col + 1,
        orientation
    );
}

/// Validate then commit. Either every cell is written or none is.
pub fn try_place(placement: &Placement, grid: &mut Grid) -> Result<(), GameError> {
    validate_placement(placement, grid)?;
    place_ship(
        placement.row,
        placement.col,
        placement.length,
        placement.orientation,
        grid,
    );
    Ok(())
}
