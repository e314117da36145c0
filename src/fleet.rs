//! Putting the fixed fleet on a grid, either interactively or at random.

use log::debug;
use rand::Rng;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, SHIPS};
use crate::grid::Grid;
use crate::placement::{is_placement_valid, place_ship, validate_placement};
use crate::ship::{Orientation, Placement, ShipType};

/// Collaborator that proposes and confirms ship positions for the human side.
pub trait PlacementSource {
    type Error;

    /// Propose an origin and orientation for `ship`. The returned placement's
    /// `length` is ignored in favour of the ship's own.
    fn propose(&mut self, ship: ShipType, grid: &Grid) -> Result<Placement, Self::Error>;

    /// Ask whether a valid placement should be committed.
    fn confirm(&mut self, ship: ShipType, placement: &Placement) -> Result<bool, Self::Error>;

    /// Told when a proposal was invalid or declined, before asking again.
    fn rejected(
        &mut self,
        _ship: ShipType,
        _placement: &Placement,
        _reason: Option<GameError>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Told once a ship has been committed.
    fn placed(&mut self, _ship: ShipType, _placement: &Placement) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Place every ship in fleet order using `source`. Retries each ship until a
/// valid, confirmed placement is supplied; only the source can end the loop
/// early, by returning an error.
pub fn place_fleet_interactive<S: PlacementSource>(
    source: &mut S,
    grid: &mut Grid,
) -> Result<(), S::Error> {
    for ship in SHIPS {
        loop {
            let proposed = source.propose(ship, grid)?;
            let placement = Placement {
                length: ship.length(),
                ..proposed
            };
            if let Err(e) = validate_placement(&placement, grid) {
                source.rejected(ship, &placement, Some(e))?;
                continue;
            }
            if !source.confirm(ship, &placement)? {
                source.rejected(ship, &placement, None)?;
                continue;
            }
            place_ship(
                placement.row,
                placement.col,
                placement.length,
                placement.orientation,
                grid,
            );
            source.placed(ship, &placement)?;
            break;
        }
    }
    Ok(())
}

/// Draw uniformly random origins and orientations until one fits.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    ship: ShipType,
    grid: &Grid,
) -> Result<Placement, GameError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = rng.random_range(0..BOARD_SIZE as usize);
        let col = rng.random_range(0..BOARD_SIZE as usize);
        if is_placement_valid(row, col, ship.length(), orientation, grid) {
            return Ok(Placement::new(row, col, ship.length(), orientation));
        }
    }
    Err(GameError::UnableToPlaceShip)
}

/// Place the whole fleet by rejection sampling.
pub fn place_fleet_random<R: Rng + ?Sized>(rng: &mut R, grid: &mut Grid) -> Result<(), GameError> {
    for ship in SHIPS {
        let p = random_placement(rng, ship, grid)?;
        place_ship(p.row, p.col, p.length, p.orientation, grid);
        debug!("randomly placed {} at ({}, {}) {}", ship.name(), p.row + 1, p.col + 1, p.orientation);
    }
    Ok(())
}
