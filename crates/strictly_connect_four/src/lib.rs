//! Strictly Connect Four - pure game logic and computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`GameState`], [`Color`], [`Cell`] are plain
//!   `Copy` values; nothing is mutated in place.
//! - **Rules**: win and draw detection over a whole board.
//! - **Game**: [`place_piece`] returns the next state.
//! - **AI**: [`get_computer_move`] picks a column at a given [`Quality`].
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use strictly_connect_four::{Quality, create_initial_state, get_computer_move, place_piece};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let state = create_initial_state();
//! let state = place_piece(&state, 3).expect("column in range");
//! let reply = get_computer_move(&state, Quality::Medium, &mut rng).expect("game in progress");
//! let state = place_piece(&state, reply).expect("column in range");
//! assert!(!state.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod error;
mod game;
mod rules;
mod types;

pub use ai::{
    Quality, SEARCH_DEPTH, SearchResult, center_ordered, evaluate, get_computer_move, search,
};
pub use error::EngineError;
pub use game::{create_board, create_initial_state, place_piece};
pub use rules::{check_winner, is_board_full, is_draw, winner};
pub use types::{Board, CENTER_COLUMN, COLUMNS, Cell, Color, GameState, Outcome, ROWS, WIN_LENGTH};
