//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (no EMPTY cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
