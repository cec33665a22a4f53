//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(board, move)} place {Q(before, after)}`.

use crate::action::Move;
use crate::board::Board;
use crate::cell::Symbol;
use crate::error::{MoveError, RulesError};
use crate::invariants::{BalancedMarks, Invariant, InvariantViolation};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RulesError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the addressed cell must be EMPTY.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::Occupied`] carrying the current occupant.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        let existing = board.get(mov.coord);
        if existing.is_empty() {
            Ok(())
        } else {
            Err(MoveError::Occupied(existing.symbol()))
        }
    }
}

/// Precondition: only X or O may be placed.
pub struct IsMark;

impl IsMark {
    /// Fails with [`MoveError::NotAMark`] for EMPTY.
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), MoveError> {
        if mov.symbol.is_mark() {
            Ok(())
        } else {
            Err(MoveError::NotAMark)
        }
    }
}

/// Precondition: the move respects turn alternation.
///
/// Whose turn it is comes from the marks already on the board: X may move
/// when both marks are equal in number, O when X leads by exactly one.
pub struct InSequence;

impl InSequence {
    /// Fails with [`MoveError::OutOfSequence`] carrying the rejected symbol.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        let xs = board.count(Symbol::X);
        let os = board.count(Symbol::O);
        let legal = match mov.symbol {
            Symbol::X => xs == os,
            Symbol::O => xs == os + 1,
            Symbol::Empty => false,
        };
        if legal {
            Ok(())
        } else {
            warn!(xs, os, symbol = %mov.symbol, "Move out of sequence");
            Err(MoveError::OutOfSequence(mov.symbol))
        }
    }
}

/// Composite precondition, checked in order: empty cell, real mark, in sequence.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, board)?;
        IsMark::check(mov)?;
        InSequence::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Postconditions:
/// - exactly one cell changed, from EMPTY to a mark
/// - marks stay balanced
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), RulesError> {
        LegalMove::check(action, board).map_err(RulesError::from)
    }

    fn post(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let changed: Vec<_> = before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(b, a)| b != a)
            .collect();
        let monotonic = changed.len() == 1
            && changed
                .iter()
                .all(|(b, a)| b.is_empty() && a.symbol().is_mark());
        if !monotonic {
            violations.push(InvariantViolation::new(
                "Exactly one EMPTY cell becomes a mark per move",
            ));
        }

        if let Err(violation) = BalancedMarks::check(after) {
            violations.push(violation);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}
