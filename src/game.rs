use log::{debug, info};
use rand::Rng;

use crate::{
    ai::Targeting,
    attack::{attack, TurnCounters},
    bitboard::BitBoard,
    common::{GameError, GuessResult},
    config::{BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS},
    fleet::{place_fleet_interactive, place_fleet_random, PlacementSource},
    grid::Grid,
    sunk::{ShipSet, SunkTracker},
};

/// Bitboard type used for the attacker's knowledge.
type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// What the attacker knows about one cell of the enemy board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Knowledge {
    Unknown,
    Hit,
    Miss,
}

/// The attacker's picture of the enemy board. Built only from attack
/// results, so it can never reveal a ship cell that was not hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetView {
    hits: BB,
    misses: BB,
}

impl TargetView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Knowledge {
        if self.hits.get(row, col).unwrap_or(false) {
            Knowledge::Hit
        } else if self.misses.get(row, col).unwrap_or(false) {
            Knowledge::Miss
        } else {
            Knowledge::Unknown
        }
    }

    /// Record the result of a shot at (row, col). `AlreadyGuessed` results
    /// carry no new information and are ignored.
    pub fn record(&mut self, row: usize, col: usize, result: GuessResult) -> Result<(), GameError> {
        if self.get(row, col) != Knowledge::Unknown {
            return Err(GameError::AlreadyGuessed);
        }
        match result {
            GuessResult::Hit(_) => self.hits.set(row, col)?,
            GuessResult::Miss => self.misses.set(row, col)?,
            GuessResult::AlreadyGuessed => {}
        }
        Ok(())
    }

    /// Number of cells with a known result.
    pub fn guessed(&self) -> usize {
        (self.hits | self.misses).count_ones()
    }
}

/// Phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    PlacingShips,
    Playing,
    PlayerWon,
    OpponentWon,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::PlayerWon | GameStatus::OpponentWon)
    }
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub target: (usize, usize),
    pub result: GuessResult,
    /// Ships that went down with this shot.
    pub newly_sunk: ShipSet,
    /// Session status after the shot.
    pub status: GameStatus,
}

/// What the opponent did with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMove {
    Fired(TurnReport),
    /// Targeting found no cell within its attempt budget.
    Skipped,
}

/// A player shot and, unless that shot ended the game, the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub player: TurnReport,
    pub opponent: Option<OpponentMove>,
}

/// One game from placement to a winner. Owns both grids, both tallies and
/// the opponent's targeting memory; a rematch is a new session.
pub struct GameSession {
    status: GameStatus,
    player_grid: Grid,
    opponent_grid: Grid,
    player_view: TargetView,
    player_stats: TurnCounters,
    opponent_stats: TurnCounters,
    targeting: Targeting,
    // Sinkings on each grid, tracked separately so each is announced once.
    opponent_fleet: SunkTracker,
    player_fleet: SunkTracker,
    rounds: usize,
}

impl GameSession {
    /// Fresh session with two empty grids, waiting for fleets.
    pub fn new() -> Self {
        Self {
            status: GameStatus::PlacingShips,
            player_grid: Grid::new(),
            opponent_grid: Grid::new(),
            player_view: TargetView::new(),
            player_stats: TurnCounters::default(),
            opponent_stats: TurnCounters::default(),
            targeting: Targeting::new(),
            opponent_fleet: SunkTracker::new(),
            player_fleet: SunkTracker::new(),
            rounds: 0,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The human's own board, ships included.
    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    /// The opponent's authoritative board. Not for display to the human.
    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent_grid
    }

    /// What the human has learned about the opponent's board.
    pub fn player_view(&self) -> &TargetView {
        &self.player_view
    }

    pub fn player_stats(&self) -> TurnCounters {
        self.player_stats
    }

    pub fn opponent_stats(&self) -> TurnCounters {
        self.opponent_stats
    }

    /// Number of player turns taken so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Place the human fleet through an interactive collaborator.
    pub fn place_player_fleet<S>(&mut self, source: &mut S) -> Result<(), S::Error>
    where
        S: PlacementSource,
        S::Error: From<GameError>,
    {
        self.ensure_unplaced(&self.player_grid)?;
        place_fleet_interactive(source, &mut self.player_grid)
    }

    /// Place the human fleet at random.
    pub fn place_player_fleet_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_unplaced(&self.player_grid)?;
        place_fleet_random(rng, &mut self.player_grid)
    }

    /// Place the opponent fleet at random.
    pub fn place_opponent_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_unplaced(&self.opponent_grid)?;
        place_fleet_random(rng, &mut self.opponent_grid)
    }

    /// Leave placement and begin play. Both fleets must be complete.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::PlacingShips {
            return Err(GameError::WrongPhase);
        }
        if self.player_grid.occupied_cells() != TOTAL_SHIP_CELLS
            || self.opponent_grid.occupied_cells() != TOTAL_SHIP_CELLS
        {
            return Err(GameError::FleetIncomplete);
        }
        self.status = GameStatus::Playing;
        debug!("fleets placed, game started");
        Ok(())
    }

    /// The human fires at (`row`, `col`) on the opponent's board.
    ///
    /// A repeated coordinate resolves to [`GuessResult::AlreadyGuessed`] and
    /// the turn is lost.
    pub fn player_attack(&mut self, row: usize, col: usize) -> Result<TurnReport, GameError> {
        self.ensure_playing()?;
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(GameError::InvalidCoordinate);
        }
        self.rounds += 1;
        let result = attack(row, col, &mut self.opponent_grid, &mut self.player_stats);
        if result != GuessResult::AlreadyGuessed {
            self.player_view.record(row, col, result)?;
        }
        let report = self.opponent_fleet.update(&self.opponent_grid);
        self.player_stats.sunk = report.sunk;
        if report.sunk == NUM_SHIPS {
            info!("player sank the whole fleet in {} rounds", self.rounds);
            self.status = GameStatus::PlayerWon;
        }
        Ok(TurnReport {
            target: (row, col),
            result,
            newly_sunk: report.newly_sunk,
            status: self.status,
        })
    }

    /// The scripted opponent picks a target on the human's board and fires.
    pub fn opponent_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<OpponentMove, GameError> {
        self.ensure_playing()?;
        let target = match self.targeting.next_target(rng, &self.player_grid) {
            Ok(t) => t,
            Err(GameError::TargetingExhausted) => {
                info!("opponent skips its turn");
                return Ok(OpponentMove::Skipped);
            }
            Err(e) => return Err(e),
        };
        let result = attack(target.0, target.1, &mut self.player_grid, &mut self.opponent_stats);
        self.targeting.observe(target, result);
        let report = self.player_fleet.update(&self.player_grid);
        self.opponent_stats.sunk = report.sunk;
        if report.sunk == NUM_SHIPS {
            info!("opponent sank the whole fleet in {} rounds", self.rounds);
            self.status = GameStatus::OpponentWon;
        }
        Ok(OpponentMove::Fired(TurnReport {
            target,
            result,
            newly_sunk: report.newly_sunk,
            status: self.status,
        }))
    }

    /// Player shot followed by the opponent's reply. The reply is skipped
    /// when the player's shot won the game.
    pub fn play_round<R: Rng + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        rng: &mut R,
    ) -> Result<RoundReport, GameError> {
        let player = self.player_attack(row, col)?;
        let opponent = if self.status == GameStatus::Playing {
            Some(self.opponent_turn(rng)?)
        } else {
            None
        };
        Ok(RoundReport { player, opponent })
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.status == GameStatus::Playing {
            Ok(())
        } else {
            Err(GameError::WrongPhase)
        }
    }

    fn ensure_unplaced(&self, grid: &Grid) -> Result<(), GameError> {
        if self.status != GameStatus::PlacingShips || grid.occupied_cells() != 0 {
            Err(GameError::WrongPhase)
        } else {
            Ok(())
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
