#![cfg(feature = "std")]

//! Console collaborator: prompts, input validation and the play-again loop.
//!
//! Everything reads from a `BufRead` and writes to a `Write`, so a whole
//! conversation can be scripted in tests.

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::string::String;

use anyhow::bail;
use rand::Rng;

use crate::{
    common::{GameError, GuessResult},
    config::{BOARD_SIZE, MAX_NAME_LENGTH, MAX_TARGETING_ATTEMPTS},
    fleet::PlacementSource,
    game::{GameSession, GameStatus, OpponentMove, TurnReport},
    grid::Grid,
    ship::{Orientation, Placement, ShipType},
    ui::{render_grid, render_statistics, render_view},
};

/// Parse a 1-based board coordinate into a 0-based index.
pub fn parse_coordinate(input: &str) -> Result<usize, GameError> {
    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| GameError::InvalidCoordinate)?;
    if n == 0 || n > BOARD_SIZE as usize {
        return Err(GameError::InvalidCoordinate);
    }
    Ok(n - 1)
}

/// Parse `H` or `V`, either case.
pub fn parse_orientation(input: &str) -> Result<Orientation, GameError> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Orientation::try_from(ch),
        _ => Err(GameError::InvalidOrientation),
    }
}

/// Parse a Y/N answer, either case.
pub fn parse_yes_no(input: &str) -> Result<bool, GameError> {
    match input.trim() {
        "Y" | "y" => Ok(true),
        "N" | "n" => Ok(false),
        _ => Err(GameError::InvalidAnswer),
    }
}

/// A name is 1 to [`MAX_NAME_LENGTH`] ASCII letters, digits or spaces.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NAME_LENGTH
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

fn parse_name(input: &str) -> Result<String, GameError> {
    if is_valid_name(input) {
        Ok(input.to_string())
    } else {
        Err(GameError::InvalidName)
    }
}

/// Runtime switches for an interactive session.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Let the engine place the human's fleet.
    pub random_placement: bool,
}

/// The human side of the game, talking over a pair of streams.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string())
    }

    /// Show `prompt` and re-ask until `parse` accepts the answer. Only a
    /// closed or failing input stream ends the loop with an error.
    pub fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, GameError>,
    ) -> anyhow::Result<T> {
        loop {
            write!(self.output, "{}", prompt)?;
            let line = self.read_line()?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(format_args!("\nInvalid input: {}. Please try again.", e))?,
            }
        }
    }

    pub fn ask_name(&mut self) -> anyhow::Result<String> {
        let name =
            self.prompt_until_valid("\nWelcome player, please enter your name: ", parse_name)?;
        self.say(format_args!("\nWelcome, {}! It's a pleasure meeting you!", name))?;
        Ok(name)
    }

    /// Print the rules and ask the player to accept them.
    pub fn ask_agreement(&mut self) -> anyhow::Result<bool> {
        self.say("\nNow that we have introduced ourselves, let's go over the rules of the game.")?;
        self.say("1. The game is played on a 10x10 grid. Each player has 4 ships to place on the grid.")?;
        self.say("2. The ships and their lengths are: Carrier (5), Battleship (4), Submarine (3), Patrol Boat (2).")?;
        self.say("3. Place your ships anywhere on the grid, either horizontally (H) or vertically (V).")?;
        self.say("4. You and the enemy take turns attacking each other's grid.")?;
        self.say("5. Firing at coordinates you have already tried wastes your turn.")?;
        self.say("6. The game ends when all of one side's ships are sunk; whoever sinks the other fleet wins.")?;
        self.say("7. You can play again after the game ends.")?;
        self.prompt_until_valid("Do you agree to the game rules? (Y/N): ", parse_yes_no)
    }

    pub fn ask_play_again(&mut self) -> anyhow::Result<bool> {
        self.prompt_until_valid("Do you want to play again? (Y/N): ", parse_yes_no)
    }

    /// Ask for a row and column to fire at, 0-based.
    pub fn ask_attack(&mut self) -> anyhow::Result<(usize, usize)> {
        let row = self.prompt_until_valid("Enter row to attack (1-10): ", parse_coordinate)?;
        let col = self.prompt_until_valid("Enter column to attack (1-10): ", parse_coordinate)?;
        Ok((row, col))
    }

    pub fn show_own_board(&mut self, grid: &Grid) -> anyhow::Result<()> {
        self.say(render_grid(grid, "Your Board", true))
    }

    fn report_player_turn(&mut self, turn: &TurnReport) -> anyhow::Result<()> {
        match turn.result {
            GuessResult::Hit(_) => {
                let name = turn.result.ship().map(|s| s.name()).unwrap_or("ship");
                self.say(format_args!("HIT! You hit the enemy's {}!", name))?;
            }
            GuessResult::Miss => self.say("MISS!")?,
            GuessResult::AlreadyGuessed => {
                self.say("You have already guessed these coordinates. Skipping your turn.")?
            }
        }
        for ship in turn.newly_sunk.iter() {
            self.say(format_args!("You sunk the enemy's {}!", ship.name()))?;
        }
        Ok(())
    }

    fn report_opponent_turn(&mut self, mv: &OpponentMove) -> anyhow::Result<()> {
        let turn = match mv {
            OpponentMove::Fired(turn) => turn,
            OpponentMove::Skipped => {
                return self.say(format_args!(
                    "Enemy failed to find a valid cell after {} attempts. Skipping turn.",
                    MAX_TARGETING_ATTEMPTS
                ));
            }
        };
        let (r, c) = turn.target;
        match turn.result {
            GuessResult::Hit(_) => {
                let name = turn.result.ship().map(|s| s.name()).unwrap_or("ship");
                self.say(format_args!(
                    "Enemy HIT! They hit your {} at ({}, {})!",
                    name,
                    r + 1,
                    c + 1
                ))?;
            }
            GuessResult::Miss => self.say(format_args!("Enemy MISS at ({}, {})!", r + 1, c + 1))?,
            GuessResult::AlreadyGuessed => {}
        }
        for ship in turn.newly_sunk.iter() {
            self.say(format_args!("The enemy sunk your {}!", ship.name()))?;
        }
        Ok(())
    }

    /// Play rounds until the session reaches a terminal state.
    pub fn play_game<G: Rng + ?Sized>(
        &mut self,
        session: &mut GameSession,
        rng: &mut G,
    ) -> anyhow::Result<GameStatus> {
        while !session.status().is_over() {
            self.say("\nYour turn.")?;
            let (row, col) = self.ask_attack()?;
            let round = session.play_round(row, col, rng)?;
            self.report_player_turn(&round.player)?;
            self.say(render_view(session.player_view(), "Enemy Board"))?;
            if let Some(mv) = round.opponent {
                self.report_opponent_turn(&mv)?;
                self.show_own_board(session.player_grid())?;
            }
        }
        match session.status() {
            GameStatus::PlayerWon => self.say("\nCongratulations! You won!")?,
            GameStatus::OpponentWon => self.say("\nThe enemy has won. Better luck next time!")?,
            _ => {}
        }
        Ok(session.status())
    }
}

impl<R: BufRead, W: Write> PlacementSource for CliPlayer<R, W> {
    type Error = anyhow::Error;

    fn propose(&mut self, ship: ShipType, grid: &Grid) -> anyhow::Result<Placement> {
        self.show_own_board(grid)?;
        self.say(format_args!(
            "\nPlace your {} (length {}):",
            ship.name(),
            ship.length()
        ))?;
        let row = self.prompt_until_valid("Enter starting row (1-10): ", parse_coordinate)?;
        let col = self.prompt_until_valid("Enter starting column (1-10): ", parse_coordinate)?;
        let orientation = self.prompt_until_valid(
            "Enter orientation (H for horizontal, V for vertical): ",
            parse_orientation,
        )?;
        Ok(Placement::new(row, col, ship.length(), orientation))
    }

    fn confirm(&mut self, ship: ShipType, placement: &Placement) -> anyhow::Result<bool> {
        let prompt = format!(
            "\nDo you want to place the {} at ({}, {}) with orientation {}? (Y/N): ",
            ship.name(),
            placement.row + 1,
            placement.col + 1,
            placement.orientation
        );
        self.prompt_until_valid(&prompt, parse_yes_no)
    }

    fn rejected(
        &mut self,
        ship: ShipType,
        placement: &Placement,
        reason: Option<GameError>,
    ) -> anyhow::Result<()> {
        match reason {
            Some(e) => self.say(format_args!(
                "\nI'm sorry, but your placement at ({}, {}) is invalid: {}. Please try again.",
                placement.row + 1,
                placement.col + 1,
                e
            )),
            None => self.say(format_args!("\nRe-enter coordinates for {}...", ship.name())),
        }
    }

    fn placed(&mut self, ship: ShipType, placement: &Placement) -> anyhow::Result<()> {
        self.say(format_args!(
            "{} placed at ({}, {}) {}.",
            ship.name(),
            placement.row + 1,
            placement.col + 1,
            placement.orientation
        ))
    }
}

/// Full interactive program: greeting, rules, then games until the player
/// declines a rematch.
pub fn run<R: BufRead, W: Write, G: Rng + ?Sized>(
    player: &mut CliPlayer<R, W>,
    rng: &mut G,
    options: PlayOptions,
) -> anyhow::Result<()> {
    player.say("=================================================================")?;
    player.say("                   Welcome to Broadside!                         ")?;
    player.say("=================================================================")?;
    player.ask_name()?;
    if player.ask_agreement()? {
        loop {
            let mut session = GameSession::new();
            if options.random_placement {
                session.place_player_fleet_random(rng)?;
            } else {
                session.place_player_fleet(player)?;
            }
            session.place_opponent_fleet(rng)?;
            session.start()?;
            player.show_own_board(session.player_grid())?;
            player.play_game(&mut session, rng)?;
            player.say(render_statistics(
                &session.player_stats(),
                &session.opponent_stats(),
            ))?;
            if !player.ask_play_again()? {
                break;
            }
        }
    }
    player.say("Thank you for playing!")?;
    Ok(())
}
