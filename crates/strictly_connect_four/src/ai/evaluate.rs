//! Static position evaluation used at the search horizon.
//!
//! The score is a center-column bonus plus the sum of every 4-cell window
//! on the board. Opponent threes weigh ten times more than own threes, so
//! the evaluator prefers blocking over building.

use crate::rules::DIRECTIONS;
use crate::types::{Board, CENTER_COLUMN, COLUMNS, Cell, Color, ROWS, WIN_LENGTH};
use tracing::instrument;

/// Bonus per own piece in the center column.
pub const CENTER_WEIGHT: i32 = 6;
/// Four own pieces in a window.
pub const FOUR_OWN: i32 = 100_000;
/// Three own pieces and one empty cell.
pub const THREE_OWN: i32 = 100;
/// Two own pieces and two empty cells.
pub const TWO_OWN: i32 = 10;
/// Four opponent pieces in a window.
pub const FOUR_OPPONENT: i32 = -100_000;
/// Three opponent pieces and one empty cell.
pub const THREE_OPPONENT: i32 = -1_000;
/// Two opponent pieces and two empty cells.
pub const TWO_OPPONENT: i32 = -10;

/// Scores `board` from `player`'s point of view. Positive favors `player`.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, player: Color) -> i32 {
    let center = board
        .column(CENTER_COLUMN)
        .map_or(0, |cells| cells.iter().filter(|c| c.is(player)).count());

    let window_total: i32 = windows(board)
        .map(|window| score_window(&window, player))
        .sum();

    center as i32 * CENTER_WEIGHT + window_total
}

/// Scores a single 4-cell window for `player`.
pub fn score_window(window: &[Cell; WIN_LENGTH], player: Color) -> i32 {
    let own = window.iter().filter(|c| c.is(player)).count();
    let opponent = window.iter().filter(|c| c.is(player.opponent())).count();
    let empty = WIN_LENGTH - own - opponent;

    match (own, opponent, empty) {
        (4, 0, 0) => FOUR_OWN,
        (3, 0, 1) => THREE_OWN,
        (2, 0, 2) => TWO_OWN,
        (0, 4, 0) => FOUR_OPPONENT,
        (0, 3, 1) => THREE_OPPONENT,
        (0, 2, 2) => TWO_OPPONENT,
        _ => 0,
    }
}

/// Every run of [`WIN_LENGTH`] cells along the four axes.
fn windows(board: &Board) -> impl Iterator<Item = [Cell; WIN_LENGTH]> + '_ {
    let span = WIN_LENGTH as isize - 1;
    (0..COLUMNS as isize).flat_map(move |column| {
        (0..ROWS as isize).flat_map(move |row| {
            DIRECTIONS.into_iter().filter_map(move |(dc, dr)| {
                let end_column = column + dc * span;
                let end_row = row + dr * span;
                if !(0..COLUMNS as isize).contains(&end_column)
                    || !(0..ROWS as isize).contains(&end_row)
                {
                    return None;
                }
                let mut window = [Cell::Empty; WIN_LENGTH];
                for (i, slot) in window.iter_mut().enumerate() {
                    let i = i as isize;
                    *slot = board.get((column + dc * i) as usize, (row + dr * i) as usize)?;
                }
                Some(window)
            })
        })
    })
}
