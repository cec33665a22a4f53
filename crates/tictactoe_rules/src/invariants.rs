//! Board invariants.
//!
//! Invariants are properties that hold for every board reachable through
//! validated writes. They are checked after each move in debug builds and can
//! be tested independently.

use crate::board::Board;
use crate::cell::Symbol;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;

    /// Like [`Invariant::holds`], but reports the violation.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation::new(Self::description()))
        }
    }
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Invariant: X leads O by zero or one mark.
///
/// This is what keeps the derived turn well defined.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let xs = board.count(Symbol::X);
        let os = board.count(Symbol::O);
        let valid = xs == os || xs == os + 1;
        if !valid {
            warn!(xs, os, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}
