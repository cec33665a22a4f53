//! Coordinate resolution for the 3x3 grid.

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Board column, labelled A to C from left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Column {
    /// Left column.
    A,
    /// Middle column.
    B,
    /// Right column.
    C,
}

impl Column {
    /// Zero-based offset from the left edge.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolves a column letter.
    pub fn from_char(column: char) -> Option<Self> {
        match column {
            'A' => Some(Column::A),
            'B' => Some(Column::B),
            'C' => Some(Column::C),
            _ => None,
        }
    }

    /// Returns the column letter.
    pub fn as_char(self) -> char {
        match self {
            Column::A => 'A',
            Column::B => 'B',
            Column::C => 'C',
        }
    }
}

/// Board row, numbered 1 to 3 from top to bottom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Row {
    /// Top row.
    #[strum(to_string = "1")]
    One,
    /// Middle row.
    #[strum(to_string = "2")]
    Two,
    /// Bottom row.
    #[strum(to_string = "3")]
    Three,
}

impl Row {
    /// Zero-based offset from the top edge.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolves a 1-based row number.
    pub fn from_number(row: u32) -> Option<Self> {
        match row {
            1 => Some(Row::One),
            2 => Some(Row::Two),
            3 => Some(Row::Three),
            _ => None,
        }
    }

    /// Returns the 1-based row number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

/// A validated (column, row) address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    column: Column,
    row: Row,
}

impl Coord {
    /// Resolves a raw (column, row) pair.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvalidCoordinates`] when the column is not one
    /// of `A`, `B`, `C` or the row is not one of `1`, `2`, `3`.
    #[instrument]
    pub fn new(column: char, row: u32) -> Result<Self, RulesError> {
        match (Column::from_char(column), Row::from_number(row)) {
            (Some(column), Some(row)) => Ok(Self::at(column, row)),
            _ => Err(RulesError::InvalidCoordinates { column, row }),
        }
    }

    /// Builds a coordinate from already-typed parts.
    pub const fn at(column: Column, row: Row) -> Self {
        Self { column, row }
    }

    /// Returns the column.
    pub fn column(&self) -> Column {
        self.column
    }

    /// Returns the row.
    pub fn row(&self) -> Row {
        self.row
    }

    /// Row-major index into the board storage (A1 = 0, C3 = 8).
    pub fn index(&self) -> usize {
        self.row.index() * 3 + self.column.index()
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        Row::iter().flat_map(|row| Column::iter().map(move |column| Coord::at(column, row)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}
