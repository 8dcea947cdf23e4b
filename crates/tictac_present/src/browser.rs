//! Markup presenter for browsers.

use crate::{BoardPresenter, PresentError};
use std::io::Write;
use tictac_board::{BoardState, Cell};
use tracing::debug;

/// Formats the board as an HTML table.
///
/// Produces one `<tr>` per row and one `<td>` per cell; empty cells
/// render as empty elements. The fragment carries a `board` class so a
/// page can style it, but no document wrapper is emitted.
pub fn render_html(state: &BoardState) -> String {
    let mut result = String::from("<table class=\"board\">\n");
    for row in 0..3 {
        result.push_str("  <tr>");
        for col in 0..3 {
            match state.cells()[row * 3 + col] {
                Cell::Empty => result.push_str("<td></td>"),
                Cell::Marked(mark) => {
                    result.push_str("<td>");
                    result.push(mark.symbol());
                    result.push_str("</td>");
                }
            }
        }
        result.push_str("</tr>\n");
    }
    result.push_str("</table>\n");
    result
}

/// Presenter that writes the HTML fragment to any [`Write`] sink.
pub struct BrowserPresenter<W: Write> {
    writer: W,
}

impl<W: Write> BrowserPresenter<W> {
    /// Creates a presenter over the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the presenter, returning its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BoardPresenter for BrowserPresenter<W> {
    fn display(&mut self, state: &BoardState) -> Result<(), PresentError> {
        debug!(occupied = state.occupied_count(), "rendering html table");
        self.writer.write_all(render_html(state).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
