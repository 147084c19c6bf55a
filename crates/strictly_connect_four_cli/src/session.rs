//! Game loop driving the engine between two players.

use crate::players::{ComputerPlayer, Player};
use anyhow::{Context, Result};
use std::io::Write;
use strictly_connect_four::{Color, GameState, Outcome, Quality, create_initial_state, place_piece};
use tracing::{debug, info, instrument, warn};

/// Plays one game to completion.
///
/// The board is printed to `out` after every ply when `show_board` is set.
/// Returns the final state, or `None` if a player quit.
#[instrument(skip_all, fields(red = red.name(), yellow = yellow.name()))]
pub fn play_game(
    red: &mut dyn Player,
    yellow: &mut dyn Player,
    out: &mut dyn Write,
    show_board: bool,
) -> Result<Option<GameState>> {
    let mut state = create_initial_state();
    if show_board {
        writeln!(out, "{}\n", state.board())?;
    }

    while !state.is_game_over() {
        let player: &mut dyn Player = match state.current_player() {
            Color::Red => &mut *red,
            Color::Yellow => &mut *yellow,
        };

        let Some(column) = player.choose_column(&state)? else {
            info!(player = player.name(), "Player quit");
            return Ok(None);
        };

        let next = place_piece(&state, column)
            .with_context(|| format!("{} chose an invalid column", player.name()))?;
        if next == state {
            warn!(column, "Move had no effect");
            continue;
        }

        debug!(player = %state.current_player(), column, "Move applied");
        if show_board {
            writeln!(out, "{} plays {}\n{}\n", player.name(), column + 1, next.board())?;
        }
        state = next;
    }

    if let Some(outcome) = state.outcome() {
        info!(%outcome, "Game finished");
        if show_board {
            writeln!(out, "{outcome}")?;
        }
    }
    Ok(Some(state))
}

/// Results of a series of computer-vs-computer games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuelTally {
    /// Games won by Red.
    pub red_wins: u32,
    /// Games won by Yellow.
    pub yellow_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl DuelTally {
    /// Records one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Color::Red) => self.red_wins += 1,
            Outcome::Winner(Color::Yellow) => self.yellow_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games recorded.
    pub fn total(&self) -> u32 {
        self.red_wins + self.yellow_wins + self.draws
    }
}

impl std::fmt::Display for DuelTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Red wins: {}, Yellow wins: {}, Draws: {}",
            self.red_wins, self.yellow_wins, self.draws
        )
    }
}

/// Plays `games` computer-vs-computer games.
///
/// With a seed, each player's random stream is derived from it so the
/// whole series is repeatable.
#[instrument(skip(out))]
pub fn run_duel(
    red_quality: Quality,
    yellow_quality: Quality,
    games: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
    show_board: bool,
) -> Result<DuelTally> {
    let mut red = ComputerPlayer::new(red_quality, seed);
    let mut yellow = ComputerPlayer::new(yellow_quality, seed.map(|s| s.wrapping_add(1)));
    let mut tally = DuelTally::default();

    for game in 1..=games {
        debug!(game, "Starting duel game");
        let state = play_game(&mut red, &mut yellow, out, show_board)?
            .context("Computer player abandoned the game")?;
        if let Some(outcome) = state.outcome() {
            tally.record(outcome);
        }
    }

    info!(%tally, "Duel finished");
    Ok(tally)
}
