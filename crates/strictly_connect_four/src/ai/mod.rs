//! Computer opponent for Connect Four.
//!
//! Three strengths are available through [`Quality`]:
//!
//! - **Bad** plays a uniformly random legal column.
//! - **Medium** takes an immediate win, else blocks an immediate loss, else
//!   plays randomly.
//! - **Best** runs a depth-limited minimax search with alpha-beta pruning
//!   over a weighted-window heuristic.
//!
//! Randomness is always supplied by the caller so games can be replayed
//! from a seed.

pub mod evaluate;
pub mod minimax;
pub mod ordering;
pub mod random;
pub mod tactics;

pub use evaluate::evaluate;
pub use minimax::{SEARCH_DEPTH, SearchResult, search};
pub use ordering::center_ordered;

use crate::error::EngineError;
use crate::types::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Playing strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Quality {
    /// Uniformly random legal column.
    Bad,
    /// One-ply lookahead: win, else block, else random.
    Medium,
    /// Alpha-beta minimax with positional evaluation.
    #[default]
    Best,
}

impl Quality {
    /// Parses a quality label, treating anything unrecognized as [`Quality::Bad`].
    #[instrument]
    pub fn from_label_lenient(label: &str) -> Self {
        Self::from_str(label.trim()).unwrap_or_else(|_| {
            warn!(label, "Unrecognized quality, falling back to random play");
            Quality::Bad
        })
    }
}

/// Chooses a column for the player to move in `state`.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMove`] if the game is over or every
/// column is full.
#[instrument(skip(state, rng), fields(player = %state.current_player()))]
pub fn get_computer_move<R: Rng + ?Sized>(
    state: &GameState,
    quality: Quality,
    rng: &mut R,
) -> Result<usize, EngineError> {
    let legal = state.board().legal_columns();
    if state.is_game_over() || legal.is_empty() {
        return Err(EngineError::NoLegalMove);
    }

    let column = match quality {
        Quality::Bad => random::pick(&legal, rng),
        Quality::Medium => tactics::pick(state.board(), state.current_player(), &legal, rng),
        Quality::Best => search(state.board(), state.current_player()).map(|result| result.column),
    }
    .ok_or(EngineError::NoLegalMove)?;

    debug!(column, %quality, "Computer chose column");
    Ok(column)
}
