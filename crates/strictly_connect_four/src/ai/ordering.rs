//! Center-first move ordering.

use crate::types::{Board, CENTER_COLUMN, COLUMNS};

/// Every column ordered by distance from the center, left side first on ties.
pub const CENTER_ORDER: [usize; COLUMNS] = center_order();

const fn center_order() -> [usize; COLUMNS] {
    let mut order = [CENTER_COLUMN; COLUMNS];
    let mut i = 1;
    let mut offset = 1;
    while i < COLUMNS {
        if offset <= CENTER_COLUMN {
            order[i] = CENTER_COLUMN - offset;
            i += 1;
        }
        if i < COLUMNS && CENTER_COLUMN + offset < COLUMNS {
            order[i] = CENTER_COLUMN + offset;
            i += 1;
        }
        offset += 1;
    }
    order
}

/// Legal columns of `board` in center-first order.
pub fn center_ordered(board: &Board) -> impl Iterator<Item = usize> + '_ {
    CENTER_ORDER
        .into_iter()
        .filter(|&column| !board.is_column_full(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, ROWS};

    #[test]
    fn test_center_order() {
        assert_eq!(CENTER_ORDER, [3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn test_full_columns_skipped() {
        let mut board = Board::new();
        for row in 0..ROWS {
            let color = if row % 2 == 0 {
                Color::Red
            } else {
                Color::Yellow
            };
            board = board.drop_piece(3, color).expect("column has room");
            board = board.drop_piece(0, color).expect("column has room");
        }
        let order: Vec<usize> = center_ordered(&board).collect();
        assert_eq!(order, vec![2, 4, 1, 5, 6]);
    }
}
