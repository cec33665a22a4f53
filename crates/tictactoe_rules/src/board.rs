//! The 3x3 board.

use crate::action::Move;
use crate::cell::{Cell, Symbol};
use crate::contracts::{Contract, MoveContract};
use crate::coord::{Column, Coord, Row};
use crate::error::RulesError;
use crate::invariants::{BalancedMarks, Invariant, InvariantViolation};
use crate::rules;
use crate::status::Status;
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, instrument, warn};

/// Three cells checked together for a win.
pub type Line = [Cell; 3];

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major. A cell only ever goes from EMPTY to a mark;
/// whose turn it is is derived from the marks on the board rather than stored.
///
/// Deserialized boards are checked against the board invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawBoard {
            cells: [Cell; 9],
        }

        let raw = RawBoard::deserialize(deserializer)?;
        let board = Board { cells: raw.cells };
        if let Err(violation) = board.check_invariants() {
            warn!(%violation, "Rejected deserialized board");
            return Err(de::Error::custom(violation));
        }
        Ok(board)
    }
}

impl Board {
    /// Creates a board with every cell EMPTY.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board by replaying moves from an empty one.
    ///
    /// # Errors
    ///
    /// Stops at the first move the rules reject.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, RulesError> {
        let mut board = Self::new();
        for action in moves {
            board.apply(*action)?;
        }
        Ok(board)
    }

    /// Reads the cell at a raw (column, row) pair.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidCoordinates`] outside `A..=C` x `1..=3`.
    #[instrument(skip(self))]
    pub fn read(&self, column: char, row: u32) -> Result<Cell, RulesError> {
        Coord::new(column, row).map(|coord| self.get(coord))
    }

    /// Writes a raw symbol at a raw (column, row) pair.
    ///
    /// The symbol is validated first, then the coordinates, then the move
    /// itself (occupancy, EMPTY symbol, turn order). Nothing is mutated unless
    /// every check passes.
    ///
    /// # Errors
    ///
    /// - [`RulesError::InvalidValue`] for a symbol other than `'X'`, `'O'`, `' '`
    /// - [`RulesError::InvalidCoordinates`] outside the grid
    /// - [`RulesError::InvalidMove`] when the rules refuse the move
    #[instrument(skip(self))]
    pub fn write(&mut self, symbol: char, column: char, row: u32) -> Result<&mut Self, RulesError> {
        let candidate = Cell::new(symbol)?;
        let coord = Coord::new(column, row)?;
        self.place(candidate.symbol(), coord)
    }

    /// Returns the cell at a validated coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Places a symbol at a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidMove`] if the cell is occupied, the symbol
    /// is EMPTY, or it is not that symbol's turn, checked in that order.
    #[instrument(skip(self, symbol, coord), fields(coord = %coord, symbol = %symbol))]
    pub fn place(&mut self, symbol: Symbol, coord: Coord) -> Result<&mut Self, RulesError> {
        let action = Move::new(symbol, coord);
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let before = self.clone();
        self.cells[coord.index()] = Cell::from(symbol);
        debug!(%action, "Move applied");

        debug_assert!(
            MoveContract::post(&before, self).is_ok(),
            "Move postcondition violated"
        );
        Ok(self)
    }

    /// Applies a first-class move.
    pub fn apply(&mut self, action: Move) -> Result<&mut Self, RulesError> {
        self.place(action.symbol, action.coord)
    }

    /// All nine cells, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Rows 1 to 3, each ordered A, B, C.
    pub fn rows(&self) -> [Line; 3] {
        [Row::One, Row::Two, Row::Three].map(|row| {
            [Column::A, Column::B, Column::C].map(|column| self.get(Coord::at(column, row)))
        })
    }

    /// Columns A to C, each ordered 1, 2, 3.
    pub fn columns(&self) -> [Line; 3] {
        [Column::A, Column::B, Column::C].map(|column| {
            [Row::One, Row::Two, Row::Three].map(|row| self.get(Coord::at(column, row)))
        })
    }

    /// The primary diagonal A1, B2, C3 followed by the anti-diagonal C1, B2, A3.
    pub fn diagonals(&self) -> [Line; 2] {
        let at = |column, row| self.get(Coord::at(column, row));
        [
            [at(Column::A, Row::One), at(Column::B, Row::Two), at(Column::C, Row::Three)],
            [at(Column::C, Row::One), at(Column::B, Row::Two), at(Column::A, Row::Three)],
        ]
    }

    /// Evaluates whether the game is over and who won.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        rules::evaluate(self)
    }

    /// Number of cells holding `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|cell| cell.symbol() == symbol).count()
    }

    /// Symbol whose turn it is, derived from the marks on the board.
    ///
    /// `None` when the marks are unbalanced, which validated writes never
    /// produce.
    pub fn to_move(&self) -> Option<Symbol> {
        let xs = self.count(Symbol::X);
        let os = self.count(Symbol::O);
        if xs == os {
            Some(Symbol::X)
        } else if xs == os + 1 {
            Some(Symbol::O)
        } else {
            None
        }
    }

    /// True when no EMPTY cell is left.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Verifies the board invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        BalancedMarks::check(self)
    }
}
