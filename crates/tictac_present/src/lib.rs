//! Presentation layer for [`tictac_board`].
//!
//! Each presenter renders a supplied [`BoardState`](tictac_board::BoardState)
//! to one output medium and owns no board-mutation logic. Presenters are
//! interchangeable behind [`BoardPresenter`]; the board crate never learns
//! which, if any, presenter consumes it.

#![warn(missing_docs)]

mod browser;
mod console;
mod presenter;

pub use browser::{render_html, BrowserPresenter};
pub use console::{render_text, ConsolePresenter};
pub use presenter::{BoardPresenter, PresentError};
