//! Strictly Connect Four - terminal CLI
//!
//! Play against the computer, or watch two computer players duel.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use strictly_connect_four::{Color, Quality};
use strictly_connect_four_cli::{
    ComputerPlayer, ConfigOverrides, GameConfig, HumanPlayer, play_game, run_duel,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            quality,
            human,
            seed,
        } => run_play(config.with_overrides(ConfigOverrides {
            quality,
            human,
            seed,
            games: None,
        })),
        Command::Duel {
            red,
            yellow,
            games,
            seed,
            show_board,
        } => {
            let config = config.with_overrides(ConfigOverrides {
                games,
                seed,
                ..Default::default()
            });
            let (red, yellow) = config.duel_qualities(red, yellow);
            run_duel_command(red, yellow, &config, show_board)
        }
    }
}

/// Run a human-vs-computer game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: GameConfig) -> Result<()> {
    info!(quality = %config.quality(), human = %config.human(), "Starting game");

    let stdin = io::stdin();
    let mut human = HumanPlayer::new(stdin.lock(), io::stdout());
    let mut computer = ComputerPlayer::new(*config.quality(), *config.seed());
    let mut out = io::stdout();

    let result = match config.human() {
        Color::Red => play_game(&mut human, &mut computer, &mut out, true)?,
        Color::Yellow => play_game(&mut computer, &mut human, &mut out, true)?,
    };

    if result.is_none() {
        writeln!(out, "Game abandoned.")?;
    }
    Ok(())
}

/// Run a computer-vs-computer series and print the tally
#[instrument(skip(config))]
fn run_duel_command(
    red: Quality,
    yellow: Quality,
    config: &GameConfig,
    show_board: bool,
) -> Result<()> {
    let mut out = io::stdout();
    let tally = run_duel(red, yellow, *config.games(), *config.seed(), &mut out, show_board)?;
    writeln!(out, "{tally}")?;
    Ok(())
}
