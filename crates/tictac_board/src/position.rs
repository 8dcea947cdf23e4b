//! Named positions on the 3x3 board.

use crate::{BoardError, BoardState};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board.
///
/// The nine cells form a finite set, so positions are a named enum
/// rather than a free-form coordinate pair. Coordinate and index
/// conversions are provided for callers that work numerically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All nine positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to row-major board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// Creates position from grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `(row, col)` falls outside
    /// the 3x3 grid.
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= 3 || col >= 3 {
            return Err(BoardError::OutOfBounds { row, col });
        }
        // row and col are both < 3, so the index is < 9.
        Ok(Position::ALL[row * 3 + col])
    }

    /// Parse from label or 1-based cell number, as shown by the text grid.
    ///
    /// Labels match case-insensitively and partially, so "center" and
    /// "bottom" style inputs both work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        // Exact match first: "center" must not land on "Top-center".
        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
            .or_else(|| {
                <Position as strum::IntoEnumIterator>::iter().find(|pos| {
                    let label = pos.label().to_lowercase();
                    label.contains(&s_lower) || s_lower.contains(&label)
                })
            })
    }

    /// Positions whose cells are still empty on the given board.
    #[instrument(skip(board))]
    pub fn open_cells(board: &BoardState) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
