//! Plain-text presenter for terminals.

use crate::{BoardPresenter, PresentError};
use std::io::Write;
use tictac_board::{BoardState, Cell};
use tracing::debug;

/// Formats the board as a human-readable text grid.
///
/// Empty cells show their 1-based cell number so a caller can name a
/// move; marked cells show the mark symbol:
///
/// ```text
/// X|2|3
/// -+-+-
/// 4|O|6
/// -+-+-
/// 7|8|9
/// ```
pub fn render_text(state: &BoardState) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = row * 3 + col;
            let symbol = match state.cells()[pos] {
                Cell::Empty => (pos + 1).to_string(),
                Cell::Marked(mark) => mark.symbol().to_string(),
            };
            result.push_str(&symbol);
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Presenter that writes the text grid to any [`Write`] sink.
pub struct ConsolePresenter<W: Write> {
    writer: W,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the presenter, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BoardPresenter for ConsolePresenter<W> {
    fn display(&mut self, state: &BoardState) -> Result<(), PresentError> {
        debug!(occupied = state.occupied_count(), "rendering text grid");
        writeln!(self.writer, "{}", render_text(state))?;
        self.writer.flush()?;
        Ok(())
    }
}
