//! Draw detection logic for Connect Four.

use super::win::winner;
use crate::types::{Board, COLUMNS};
use tracing::instrument;

/// Checks if the board is full (every column's top cell occupied).
#[instrument(skip(board))]
pub fn is_board_full(board: &Board) -> bool {
    (0..COLUMNS).all(|column| board.is_column_full(column))
}

/// A full board with no four in a row.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_board_full(board) && winner(board).is_none()
}
