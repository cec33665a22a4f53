//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Line};
use crate::cell::Symbol;
use tracing::{debug, instrument};

/// Returns the symbol filling `line`, if all three cells hold the same mark.
pub fn line_winner(line: &Line) -> Option<Symbol> {
    let [a, b, c] = line;
    if !a.is_empty() && a == b && b == c {
        Some(a.symbol())
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned columns first, then rows, then diagonals. The first
/// complete line found decides the winner when more than one exists.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Symbol> {
    let found = board
        .columns()
        .iter()
        .chain(board.rows().iter())
        .chain(board.diagonals().iter())
        .find_map(line_winner);
    if let Some(symbol) = found {
        debug!(%symbol, "Complete line found");
    }
    found
}
