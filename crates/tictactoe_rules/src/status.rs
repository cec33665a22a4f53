//! Terminal-state reporting.

use crate::cell::Symbol;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// `winner` is [`Symbol::Empty`] both while the game is running and when it
/// ended in a draw; `is_over` tells the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    /// True once a line is complete or the board is full.
    pub is_over: bool,
    /// The symbol owning the first complete line found.
    pub winner: Symbol,
}

impl Status {
    /// Status of a game still being played.
    pub const IN_PROGRESS: Status = Status {
        is_over: false,
        winner: Symbol::Empty,
    };

    /// Status of a full board with no complete line.
    pub const DRAWN: Status = Status {
        is_over: true,
        winner: Symbol::Empty,
    };

    /// Status of a board where `winner` completed a line.
    pub fn won(winner: Symbol) -> Self {
        Self {
            is_over: true,
            winner,
        }
    }

    /// Maps the flat status onto the game state machine.
    pub fn outcome(&self) -> Outcome {
        match (self.is_over, self.winner) {
            (false, _) => Outcome::InProgress,
            (true, Symbol::Empty) => Outcome::Drawn,
            (true, winner) => Outcome::Won(winner),
        }
    }
}

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still possible.
    InProgress,
    /// A player completed a line.
    Won(Symbol),
    /// The board filled without a complete line.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Won(symbol) => Some(*symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(symbol) => write!(f, "Player {} wins", symbol),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}
