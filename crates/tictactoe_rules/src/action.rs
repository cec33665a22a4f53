//! First-class move type.
//!
//! A move is the intent to place a symbol at a coordinate. It can be
//! validated before it is applied, logged, or serialized for replay.

use crate::cell::Symbol;
use crate::coord::Coord;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A symbol placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol being placed.
    pub symbol: Symbol,
    /// Where it is placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, coord: Coord) -> Self {
        Self { symbol, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.coord)
    }
}
