//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so that `status` and the move contracts can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{line_winner, winner};

use crate::board::Board;
use crate::status::Status;
use tracing::instrument;

/// Evaluates the terminal state of a board.
///
/// A complete line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Status {
    if let Some(symbol) = winner(board) {
        Status::won(symbol)
    } else if is_full(board) {
        Status::DRAWN
    } else {
        Status::IN_PROGRESS
    }
}
