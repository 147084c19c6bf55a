//! State transitions for Connect Four.

use crate::error::EngineError;
use crate::rules::{check_winner, is_board_full};
use crate::types::{Board, COLUMNS, GameState};
use tracing::{debug, instrument};

/// Creates an empty 7x6 board.
#[instrument]
pub fn create_board() -> Board {
    Board::new()
}

/// Creates the starting state: empty board, Red to move.
#[instrument]
pub fn create_initial_state() -> GameState {
    GameState::new()
}

/// Drops the current player's piece into `column`.
///
/// Returns a new state; `state` itself is never modified. Dropping into a
/// full column, or into a game that is already over, returns the input
/// unchanged.
///
/// # Errors
///
/// Returns [`EngineError::InvalidColumn`] if `column` is not on the board.
#[instrument(skip(state), fields(player = %state.current_player))]
pub fn place_piece(state: &GameState, column: usize) -> Result<GameState, EngineError> {
    if column >= COLUMNS {
        return Err(EngineError::InvalidColumn { column });
    }

    if state.is_game_over {
        debug!("Game already over, ignoring placement");
        return Ok(*state);
    }

    let player = state.current_player;
    let Some(board) = state.board.drop_piece(column, player) else {
        debug!("Column full, ignoring placement");
        return Ok(*state);
    };

    let winner = check_winner(&board, player).then_some(player);
    let is_game_over = winner.is_some() || is_board_full(&board);
    if is_game_over {
        debug!(?winner, "Game over");
    }

    Ok(GameState {
        board,
        current_player: player.opponent(),
        winner,
        is_game_over,
    })
}

impl GameState {
    /// Method form of [`place_piece`].
    pub fn place(&self, column: usize) -> Result<GameState, EngineError> {
        place_piece(self, column)
    }
}
