//! Core domain types for Connect Four.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of columns on the board.
pub const COLUMNS: usize = 7;

/// Number of rows in each column.
pub const ROWS: usize = 6;

/// Consecutive pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Index of the middle column.
pub const CENTER_COLUMN: usize = COLUMNS / 2;

/// Piece color, identifying a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Color {
    /// Red (moves first).
    Red,
    /// Yellow (moves second).
    Yellow,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    Empty,
    /// Cell holds a piece of the given color.
    Filled(Color),
}

impl Cell {
    /// Returns `true` if the cell holds a piece of `color`.
    pub fn is(self, color: Color) -> bool {
        self == Cell::Filled(color)
    }
}

/// 7x6 Connect Four board.
///
/// Stored column-major: `columns[c][r]` with row 0 at the bottom, so
/// pieces fill each column from index 0 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    columns: [[Cell; ROWS]; COLUMNS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            columns: [[Cell::Empty; ROWS]; COLUMNS],
        }
    }

    /// Gets the cell at `(column, row)`, or `None` when off the grid.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.columns.get(column)?.get(row).copied()
    }

    /// Returns the cells of one column, bottom first.
    pub fn column(&self, column: usize) -> Option<&[Cell; ROWS]> {
        self.columns.get(column)
    }

    /// Number of pieces already in `column`.
    pub fn height(&self, column: usize) -> Option<usize> {
        self.columns
            .get(column)
            .map(|cells| cells.iter().take_while(|c| **c != Cell::Empty).count())
    }

    /// Checks if a column cannot take another piece.
    ///
    /// Columns off the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.height(column).is_none_or(|h| h >= ROWS)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLUMNS).filter(|&c| !self.is_column_full(c)).collect()
    }

    /// Returns a copy of the board with `color` dropped into `column`.
    ///
    /// Returns `None` if the column is full or does not exist.
    pub fn drop_piece(&self, column: usize, color: Color) -> Option<Self> {
        let row = self.height(column).filter(|&h| h < ROWS)?;
        let mut next = *self;
        next.columns[column][row] = Cell::Filled(color);
        Some(next)
    }

    /// Iterates over every cell as `(column, row, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.columns.iter().enumerate().flat_map(|(c, cells)| {
            cells.iter().enumerate().map(move |(r, cell)| (c, r, *cell))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for column in 0..COLUMNS {
                let symbol = match self.columns[column][row] {
                    Cell::Empty => '.',
                    Cell::Filled(color) => color.symbol(),
                };
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        let footer: Vec<String> = (1..=COLUMNS).map(|c| c.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player connected four.
    Winner(Color),
    /// The board filled up with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(*color),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{color} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// `GameState` is a plain value: transitions in [`crate::game`] return a
/// new state and leave their input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Color,
    pub(crate) winner: Option<Color>,
    pub(crate) is_game_over: bool,
}

impl GameState {
    /// Creates a fresh game: empty board, Red to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Color::Red,
            winner: None,
            is_game_over: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns the player who completed four in a row, if any.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns `true` once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Returns the outcome of a finished game, `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over {
            return None;
        }
        Some(match self.winner {
            Some(color) => Outcome::Winner(color),
            None => Outcome::Draw,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
