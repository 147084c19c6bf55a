//! One-ply lookahead: take a win, else block one, else play randomly.

use super::random;
use crate::rules::check_winner;
use crate::types::{Board, Color};
use rand::Rng;
use tracing::{instrument, trace};

/// First column in `legal` (ascending) where dropping `color` connects four.
#[instrument(skip(board, legal))]
pub fn winning_column(board: &Board, color: Color, legal: &[usize]) -> Option<usize> {
    legal.iter().copied().find(|&column| {
        board
            .drop_piece(column, color)
            .is_some_and(|next| check_winner(&next, color))
    })
}

/// Medium-strength move for `player`.
pub fn pick<R: Rng + ?Sized>(
    board: &Board,
    player: Color,
    legal: &[usize],
    rng: &mut R,
) -> Option<usize> {
    if let Some(column) = winning_column(board, player, legal) {
        trace!(column, "Taking immediate win");
        return Some(column);
    }
    if let Some(column) = winning_column(board, player.opponent(), legal) {
        trace!(column, "Blocking opponent win");
        return Some(column);
    }
    random::pick(legal, rng)
}
