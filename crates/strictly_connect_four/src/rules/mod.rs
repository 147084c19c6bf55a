//! Game rules for Connect Four.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the transition function and the search can share them.

pub mod draw;
pub mod win;

pub use draw::{is_board_full, is_draw};
pub use win::{DIRECTIONS, check_winner, winner};
