//! Win detection logic for Connect Four.

use crate::types::{Board, COLUMNS, Color, ROWS, WIN_LENGTH};
use tracing::instrument;

/// The four line directions as `(column step, row step)`:
/// horizontal, vertical, rising diagonal, falling diagonal.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Checks whether `player` has four in a row anywhere on the board.
///
/// Scans from every cell owned by `player` in each direction, counting
/// consecutive pieces until the edge of the grid. The scan stops as soon
/// as a run reaches four.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board, player: Color) -> bool {
    board
        .cells()
        .filter(|(_, _, cell)| cell.is(player))
        .any(|(column, row, _)| {
            DIRECTIONS
                .iter()
                .any(|&(dc, dr)| run_length(board, player, column, row, dc, dr) >= WIN_LENGTH)
        })
}

/// Returns the color that has four in a row, checking Red first.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Color> {
    [Color::Red, Color::Yellow]
        .into_iter()
        .find(|&color| check_winner(board, color))
}

/// Counts consecutive `player` pieces starting at `(column, row)`,
/// capped at [`WIN_LENGTH`].
fn run_length(
    board: &Board,
    player: Color,
    column: usize,
    row: usize,
    dc: isize,
    dr: isize,
) -> usize {
    let mut count = 0;
    let (mut c, mut r) = (column as isize, row as isize);
    while count < WIN_LENGTH
        && (0..COLUMNS as isize).contains(&c)
        && (0..ROWS as isize).contains(&r)
        && board
            .get(c as usize, r as usize)
            .is_some_and(|cell| cell.is(player))
    {
        count += 1;
        c += dc;
        r += dr;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(usize, Color)]) -> Board {
        moves.iter().fold(Board::new(), |board, &(column, color)| {
            board.drop_piece(column, color).expect("column has room")
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_winner(&board, Color::Red));
        assert!(!check_winner(&board, Color::Yellow));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_horizontal() {
        let board = board_from(&[
            (1, Color::Yellow),
            (2, Color::Yellow),
            (3, Color::Yellow),
            (4, Color::Yellow),
        ]);
        assert!(check_winner(&board, Color::Yellow));
        assert!(!check_winner(&board, Color::Red));
    }

    #[test]
    fn test_winner_vertical() {
        let board = board_from(&[
            (6, Color::Red),
            (6, Color::Red),
            (6, Color::Red),
            (6, Color::Red),
        ]);
        assert_eq!(winner(&board), Some(Color::Red));
    }

    #[test]
    fn test_winner_rising_diagonal() {
        let board = board_from(&[
            (0, Color::Red),
            (1, Color::Yellow),
            (1, Color::Red),
            (2, Color::Yellow),
            (2, Color::Yellow),
            (2, Color::Red),
            (3, Color::Yellow),
            (3, Color::Yellow),
            (3, Color::Yellow),
            (3, Color::Red),
        ]);
        assert!(check_winner(&board, Color::Red));
        assert!(!check_winner(&board, Color::Yellow));
    }

    #[test]
    fn test_winner_falling_diagonal() {
        let board = board_from(&[
            (3, Color::Red),
            (3, Color::Red),
            (3, Color::Red),
            (3, Color::Yellow),
            (4, Color::Red),
            (4, Color::Red),
            (4, Color::Yellow),
            (5, Color::Red),
            (5, Color::Yellow),
            (6, Color::Yellow),
        ]);
        assert!(check_winner(&board, Color::Yellow));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = board_from(&[
            (0, Color::Red),
            (1, Color::Red),
            (2, Color::Red),
            (4, Color::Red),
        ]);
        assert!(!check_winner(&board, Color::Red));
    }

    #[test]
    fn test_run_broken_by_opponent() {
        let board = board_from(&[
            (2, Color::Red),
            (2, Color::Red),
            (2, Color::Yellow),
            (2, Color::Red),
            (2, Color::Red),
            (2, Color::Red),
        ]);
        assert!(!check_winner(&board, Color::Red));
    }
}
