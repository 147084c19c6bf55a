//! Command-line interface for connect_four.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_connect_four::{Color, Quality};

/// Strictly Connect Four - play Connect Four against the computer
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Connect Four with an alpha-beta computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to connect_four.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the terminal
    Play {
        /// Computer strength: bad, medium or best
        #[arg(short, long)]
        quality: Option<Quality>,

        /// Color you play: red (moves first) or yellow
        #[arg(long)]
        human: Option<Color>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two computer players play each other
    Duel {
        /// Strength of the Red player (defaults to the config quality)
        #[arg(long)]
        red: Option<Quality>,

        /// Strength of the Yellow player (defaults to the config quality)
        #[arg(long)]
        yellow: Option<Quality>,

        /// Number of games to play
        #[arg(short, long)]
        games: Option<u32>,

        /// Seed for both players' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print every board position
        #[arg(long)]
        show_board: bool,
    },
}
