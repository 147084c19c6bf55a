//! Player trait and implementations.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use strictly_connect_four::{COLUMNS, GameState, Quality, get_computer_move};
use tracing::{debug, instrument};

/// Something that can choose a column to play.
pub trait Player {
    /// Chooses a column (0-based) for the player to move in `state`.
    ///
    /// Returns `None` when the player abandons the game.
    fn choose_column(&mut self, state: &GameState) -> Result<Option<usize>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Computer opponent backed by the engine's move selector.
#[derive(Debug)]
pub struct ComputerPlayer {
    name: String,
    quality: Quality,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player; `seed` makes its random choices repeatable.
    #[instrument]
    pub fn new(quality: Quality, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: format!("Computer ({quality})"),
            quality,
            rng,
        }
    }
}

impl Player for ComputerPlayer {
    fn choose_column(&mut self, state: &GameState) -> Result<Option<usize>> {
        let column = get_computer_move(state, self.quality, &mut self.rng)
            .context("Computer could not choose a move")?;
        debug!(player = %self.name, column, "Computer move");
        Ok(Some(column))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Human player typing 1-based column numbers.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player reading from `input` and prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// What a line of human input asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    /// A 0-based column index on the board.
    Column(usize),
    /// Leave the game.
    Quit,
    /// Anything else.
    Invalid,
}

/// Interprets a line typed at the move prompt.
#[instrument]
pub fn parse_input(line: &str) -> HumanInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return HumanInput::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=COLUMNS).contains(&n) => HumanInput::Column(n - 1),
        _ => HumanInput::Invalid,
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_column(&mut self, state: &GameState) -> Result<Option<usize>> {
        loop {
            write!(
                self.output,
                "{} to move (1-{}, q to quit): ",
                state.current_player(),
                COLUMNS
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            match parse_input(&line) {
                HumanInput::Quit => return Ok(None),
                HumanInput::Column(column) if state.board().is_column_full(column) => {
                    writeln!(self.output, "Column {} is full.", column + 1)?;
                }
                HumanInput::Column(column) => return Ok(Some(column)),
                HumanInput::Invalid => {
                    writeln!(self.output, "Enter a column number from 1 to {}.", COLUMNS)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
