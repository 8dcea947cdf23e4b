//! Board mutation errors.

use crate::Position;
use derive_more::{Display, Error};

/// Errors that can occur when updating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinate does not reference an existing cell.
    #[display("no cell at row {row}, column {col}")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// Target cell already holds a mark.
    #[display("{position} is already occupied")]
    CellOccupied {
        /// The occupied position.
        position: Position,
    },
}
