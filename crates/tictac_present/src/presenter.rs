//! The presenter contract.

use derive_more::{Display, Error, From};
use tictac_board::BoardState;

/// Errors that can occur when emitting a rendering.
#[derive(Debug, Display, Error, From)]
pub enum PresentError {
    /// The underlying writer failed.
    #[display("failed to write rendering: {_0}")]
    Io(std::io::Error),
}

/// Renders a board state to one output medium.
///
/// Implementations receive the state by shared reference and must not
/// mutate or retain it. A caller may hand the same state to any number
/// of presenters; none of them can observe the others.
pub trait BoardPresenter {
    /// Emits a representation of `state` to this presenter's medium.
    fn display(&mut self, state: &BoardState) -> Result<(), PresentError>;
}
