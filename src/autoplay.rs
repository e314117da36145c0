//! Whole games with no human at the keyboard: the player's seat is taken by
//! a second copy of the opponent's targeting heuristic.

use log::{debug, warn};
use rand::Rng;

use crate::{
    ai::Targeting,
    attack::TurnCounters,
    common::GameError,
    config::MAX_AUTOPLAY_ROUNDS,
    game::{GameSession, GameStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Winner {
    Player,
    Opponent,
}

/// Outcome of an automated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub winner: Winner,
    pub rounds: usize,
    pub player: TurnCounters,
    pub opponent: TurnCounters,
}

/// Place both fleets at random and play to the end.
pub fn play_automated<R: Rng + ?Sized>(rng: &mut R) -> Result<GameSummary, GameError> {
    let mut session = GameSession::new();
    session.place_player_fleet_random(rng)?;
    session.place_opponent_fleet(rng)?;
    session.start()?;
    finish_automated(&mut session, rng)
}

/// Drive an already started session until someone wins.
pub fn finish_automated<R: Rng + ?Sized>(
    session: &mut GameSession,
    rng: &mut R,
) -> Result<GameSummary, GameError> {
    let mut autopilot = Targeting::new();
    let mut turns = 0;
    while !session.status().is_over() {
        turns += 1;
        if turns > MAX_AUTOPLAY_ROUNDS {
            warn!("automated game still running after {} rounds", MAX_AUTOPLAY_ROUNDS);
            return Err(GameError::RoundLimitReached);
        }
        match autopilot.next_target(rng, session.opponent_grid()) {
            Ok((r, c)) => {
                let report = session.player_attack(r, c)?;
                autopilot.observe(report.target, report.result);
                if report.status.is_over() {
                    break;
                }
            }
            Err(GameError::TargetingExhausted) => debug!("autopilot skips its turn"),
            Err(e) => return Err(e),
        }
        session.opponent_turn(rng)?;
    }
    let winner = match session.status() {
        GameStatus::PlayerWon => Winner::Player,
        GameStatus::OpponentWon => Winner::Opponent,
        _ => return Err(GameError::WrongPhase),
    };
    Ok(GameSummary {
        winner,
        rounds: session.rounds(),
        player: session.player_stats(),
        opponent: session.opponent_stats(),
    })
}
