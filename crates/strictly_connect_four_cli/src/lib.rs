//! Terminal front end for the strictly_connect_four engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Players**: human (stdin) and computer players behind one trait
//! - **Session**: the game loop and computer-vs-computer duels

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod players;
mod session;

pub use config::{ConfigError, ConfigOverrides, DEFAULT_CONFIG_PATH, GameConfig};
pub use players::{ComputerPlayer, HumanInput, HumanPlayer, Player, parse_input};
pub use session::{DuelTally, play_game, run_duel};
