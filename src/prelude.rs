//! Commonly used types and utilities for ease of import.

pub use crate::{
    count_sunk, is_placement_valid, is_valid_coordinate, place_ship, Cell, GameError,
    GameSession, GameStatus, Grid, GuessResult, Orientation, Targeting, SHIPS,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, PlayOptions};
