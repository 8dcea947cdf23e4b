//! Pure tic-tac-toe board state.
//!
//! This crate owns the board's cell contents and the logic to initialize
//! and mutate them. It knows nothing about how a board is displayed;
//! presentation lives in `tictac_present`, which depends on this crate
//! and never the other way around.

#![warn(missing_docs)]

mod error;
mod position;
mod types;

pub use error::BoardError;
pub use position::Position;
pub use types::{BoardState, Cell, Mark};
