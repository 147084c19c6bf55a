//! Depth-limited minimax search with alpha-beta pruning.

use super::evaluate::evaluate;
use super::ordering::center_ordered;
use crate::rules::{check_winner, is_board_full};
use crate::types::{Board, Color};
use tracing::{debug, instrument};

/// Plies searched, counting the candidate move itself.
pub const SEARCH_DEPTH: usize = 5;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Column to play.
    pub column: usize,
    /// Minimax score of that column from the searching player's view.
    pub score: i32,
    /// Positions visited.
    pub nodes: u64,
}

/// Searches for the best column for `player`.
///
/// Columns are tried center-first; the first column reaching the highest
/// score wins ties. Returns `None` when no column is playable.
#[instrument(skip(board))]
pub fn search(board: &Board, player: Color) -> Option<SearchResult> {
    let mut searcher = Searcher {
        player,
        opponent: player.opponent(),
        nodes: 0,
    };

    let mut best: Option<(usize, i32)> = None;
    let mut alpha = i32::MIN;
    for column in center_ordered(board) {
        let Some(child) = board.drop_piece(column, player) else {
            continue;
        };
        let score = searcher.minimax(&child, SEARCH_DEPTH - 1, alpha, i32::MAX, false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((column, score));
            alpha = alpha.max(score);
        }
    }

    let (column, score) = best?;
    debug!(column, score, nodes = searcher.nodes, "Search complete");
    Some(SearchResult {
        column,
        score,
        nodes: searcher.nodes,
    })
}

struct Searcher {
    player: Color,
    opponent: Color,
    nodes: u64,
}

impl Searcher {
    fn is_terminal(&self, board: &Board) -> bool {
        check_winner(board, self.player)
            || check_winner(board, self.opponent)
            || is_board_full(board)
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 || self.is_terminal(board) {
            return evaluate(board, self.player);
        }

        if maximizing {
            let mut value = i32::MIN;
            for column in center_ordered(board) {
                let Some(child) = board.drop_piece(column, self.player) else {
                    continue;
                };
                value = value.max(self.minimax(&child, depth - 1, alpha, beta, false));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = i32::MAX;
            for column in center_ordered(board) {
                let Some(child) = board.drop_piece(column, self.opponent) else {
                    continue;
                };
                value = value.min(self.minimax(&child, depth - 1, alpha, beta, true));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_has_no_move() {
        let rows = [
            "RRRYRRR", "RYRYRYY", "YYRRYYR", "YYYRYYY", "YRRRYRR", "RYRYRYY",
        ];
        let mut board = Board::new();
        for row in rows {
            for (column, symbol) in row.chars().enumerate() {
                let color = if symbol == 'R' {
                    Color::Red
                } else {
                    Color::Yellow
                };
                board = board.drop_piece(column, color).expect("column has room");
            }
        }
        assert_eq!(search(&board, Color::Red), None);
    }

    #[test]
    fn test_single_open_column_is_chosen() {
        let rows = [
            "RRRYRRR", "RYRYRYY", "YYRRYYR", "YYYRYYY", "YRRRYRR", "RYRYRY.",
        ];
        let mut board = Board::new();
        for row in rows {
            for (column, symbol) in row.chars().enumerate() {
                let color = match symbol {
                    'R' => Color::Red,
                    'Y' => Color::Yellow,
                    _ => continue,
                };
                board = board.drop_piece(column, color).expect("column has room");
            }
        }
        let result = search(&board, Color::Yellow).expect("one column open");
        assert_eq!(result.column, 6);
    }

    #[test]
    fn test_empty_board_prefers_center() {
        let result = search(&Board::new(), Color::Red).expect("empty board");
        assert_eq!(result.column, 3);
        assert!(result.nodes > 0);
    }
}
