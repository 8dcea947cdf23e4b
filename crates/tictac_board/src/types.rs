//! Core board state types.

use crate::{BoardError, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark one of the two players places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

/// 3x3 tic-tac-toe board state.
///
/// Cells are stored in row-major order. Dimensions are fixed for the
/// lifetime of an instance; a cell changes only through [`update`]
/// or [`update_at`].
///
/// [`update`]: BoardState::update
/// [`update_at`]: BoardState::update_at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl BoardState {
    /// Creates a new board with every cell empty. Cannot fail.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Sets the empty cell at `pos` to `mark`.
    ///
    /// Returns the updated state so a caller can chain straight into a
    /// presenter.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if the cell already holds a
    /// mark; the board is left unchanged.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn update(&mut self, pos: Position, mark: Mark) -> Result<&Self, BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::CellOccupied { position: pos });
        }
        self.cells[pos.to_index()] = Cell::Marked(mark);
        Ok(self)
    }

    /// Coordinate form of [`update`](BoardState::update).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `(row, col)` does not
    /// reference a cell, or [`BoardError::CellOccupied`] if the cell
    /// already holds a mark.
    pub fn update_at(&mut self, row: usize, col: usize, mark: Mark) -> Result<&Self, BoardError> {
        let pos = Position::from_row_col(row, col)?;
        self.update(pos, mark)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_empty() {
        let board = BoardState::new();
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_update_sets_only_target_cell() {
        let mut board = BoardState::new();
        board.update(Position::Center, Mark::X).unwrap();
        assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_update_occupied_fails_and_preserves_board() {
        let mut board = BoardState::new();
        board.update(Position::Center, Mark::X).unwrap();
        let before = board.clone();

        let err = board.update(Position::Center, Mark::O).unwrap_err();
        assert_eq!(
            err,
            BoardError::CellOccupied {
                position: Position::Center
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_update_at_rejects_out_of_grid() {
        let mut board = BoardState::new();
        let err = board.update_at(3, 0, Mark::X).unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { row: 3, col: 0 });
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
