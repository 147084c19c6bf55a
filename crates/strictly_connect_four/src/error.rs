//! Engine error types.

use crate::types::COLUMNS;

/// Error returned by engine operations.
///
/// Dropping into a full column is not an error; it leaves the state
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The column index is outside the board.
    #[display("Column {} is out of range (must be 0-{})", column, COLUMNS - 1)]
    InvalidColumn {
        /// The rejected column index.
        column: usize,
    },

    /// A computer move was requested for a finished or full game.
    #[display("No legal move available")]
    NoLegalMove,
}

impl std::error::Error for EngineError {}
