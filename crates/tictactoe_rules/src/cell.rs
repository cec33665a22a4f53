//! Symbols and the immutable cells that hold them.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the three tokens a cell may hold.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Player X (always moves first).
    X,
    /// Player O.
    O,
    /// Blank cell.
    #[default]
    #[serde(rename = "EMPTY")]
    #[strum(to_string = "EMPTY")]
    Empty,
}

impl Symbol {
    /// Returns the single character used on the wire and on screen.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
            Symbol::Empty => ' ',
        }
    }

    /// True for X and O.
    pub fn is_mark(self) -> bool {
        !matches!(self, Symbol::Empty)
    }

    /// Returns the other mark. EMPTY has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
            Symbol::Empty => Symbol::Empty,
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = RulesError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'X' => Ok(Symbol::X),
            'O' => Ok(Symbol::O),
            ' ' => Ok(Symbol::Empty),
            other => Err(RulesError::InvalidValue { symbol: other }),
        }
    }
}

/// An immutable token holder.
///
/// A cell never changes after construction; the board replaces the whole
/// cell when a mark is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cell {
    symbol: Symbol,
}

impl Cell {
    /// Creates a cell from a raw symbol character.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidValue`] for anything other than `'X'`,
    /// `'O'` or `' '`.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, RulesError> {
        Symbol::try_from(symbol).map(Self::from)
    }

    /// Returns the held symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// True when the cell holds no mark.
    pub fn is_empty(&self) -> bool {
        self.symbol == Symbol::Empty
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Self { symbol }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol.as_char())
    }
}
