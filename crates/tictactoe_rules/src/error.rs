//! Error types for the rules engine.
//!
//! Every rejection is recoverable: the board is left untouched and the
//! caller decides whether to retry.

use crate::cell::Symbol;

/// Reason a structurally valid move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// The addressed cell already holds a mark.
    #[display("cell already contains a value {}", _0)]
    Occupied(Symbol),

    /// The candidate symbol was EMPTY.
    #[display("can only choose X or O")]
    NotAMark,

    /// The symbol does not match whose turn the board says it is.
    #[display("invalid move sequence {}", _0)]
    OutOfSequence(Symbol),
}

impl std::error::Error for MoveError {}

/// Errors produced by cell construction and board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RulesError {
    /// A raw symbol outside `X`, `O` and blank.
    #[display("invalid value {symbol:?}")]
    InvalidValue {
        /// The offending symbol.
        symbol: char,
    },

    /// A coordinate pair outside the 3x3 grid.
    #[display("invalid coordinates {column}{row}")]
    InvalidCoordinates {
        /// The offending column.
        column: char,
        /// The offending row.
        row: u32,
    },

    /// The move was refused by the game rules.
    #[display("invalid move: {reason}")]
    InvalidMove {
        /// Why the move was refused.
        reason: MoveError,
    },
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RulesError::InvalidMove { reason } => Some(reason),
            _ => None,
        }
    }
}

impl From<MoveError> for RulesError {
    fn from(reason: MoveError) -> Self {
        RulesError::InvalidMove { reason }
    }
}

impl RulesError {
    /// Returns the move rejection reason, if this is an [`RulesError::InvalidMove`].
    pub fn move_error(&self) -> Option<MoveError> {
        match self {
            RulesError::InvalidMove { reason } => Some(*reason),
            _ => None,
        }
    }
}
