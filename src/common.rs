//! Common types: attack results and the engine's error taxonomy.

use crate::config::ship_for_length;
use crate::ship::ShipType;

/// Outcome of resolving one attack against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Struck the ship of the given length.
    Hit(usize),
    /// Landed in open water.
    Miss,
    /// Cell was already resolved; nothing changed.
    AlreadyGuessed,
}

impl GuessResult {
    /// Ship that was struck, if any.
    pub fn ship(&self) -> Option<ShipType> {
        match self {
            GuessResult::Hit(length) => ship_for_length(*length),
            _ => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, GuessResult::Hit(_))
    }
}

/// Errors produced by the engine and the console collaborator. None of these
/// are fatal to a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the board (or outside 1-10 when typed in).
    InvalidCoordinate,
    /// Orientation other than H or V.
    InvalidOrientation,
    /// Ship would leave the board or overlap another ship.
    InvalidPlacement,
    /// A result was recorded twice for the same cell.
    AlreadyGuessed,
    /// Opponent could not find an unguessed cell within its attempt budget.
    TargetingExhausted,
    /// Automated game ran past its round limit without a winner.
    RoundLimitReached,
    /// Random placement hit its attempt cap.
    UnableToPlaceShip,
    /// Play was started before both fleets were on the board.
    FleetIncomplete,
    /// Operation not allowed in the current game phase.
    WrongPhase,
    /// Player name empty, too long, or containing disallowed characters.
    InvalidName,
    /// Expected a Y or N answer.
    InvalidAnswer,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidCoordinate => write!(f, "Coordinate must be between 1 and 10"),
            GameError::InvalidOrientation => {
                write!(f, "Orientation must be 'H' for horizontal or 'V' for vertical")
            }
            GameError::InvalidPlacement => {
                write!(f, "Ship placement is out of bounds or overlaps another ship")
            }
            GameError::AlreadyGuessed => write!(f, "Those coordinates were already guessed"),
            GameError::TargetingExhausted => {
                write!(f, "No unguessed cell found within the attempt limit")
            }
            GameError::RoundLimitReached => {
                write!(f, "Game did not finish within the round limit")
            }
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::FleetIncomplete => write!(f, "Both fleets must be placed before play"),
            GameError::WrongPhase => write!(f, "Not allowed in the current game phase"),
            GameError::InvalidName => write!(
                f,
                "Name must be 1-32 characters of letters, numbers and spaces"
            ),
            GameError::InvalidAnswer => write!(f, "Please answer 'Y' or 'N'"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
