//! Tic-tac-toe rules engine.
//!
//! A fixed 3x3 [`Board`] of immutable [`Cell`]s with validated reads and
//! writes, turn order derived from the board itself, and win/draw detection.
//! The engine performs no I/O; rendering and input handling belong to the
//! caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Board, Symbol};
//!
//! let mut board = Board::new();
//! board.write('X', 'A', 1)?;
//! board.write('O', 'B', 1)?;
//! board.write('X', 'A', 2)?;
//! board.write('O', 'B', 2)?;
//! board.write('X', 'A', 3)?;
//!
//! let status = board.status();
//! assert!(status.is_over);
//! assert_eq!(status.winner, Symbol::X);
//! # Ok::<(), tictactoe_rules::RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod cell;
mod coord;
mod error;
mod status;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use board::{Board, Line};
pub use cell::{Cell, Symbol};
pub use coord::{Column, Coord, Row};
pub use error::{MoveError, RulesError};
pub use status::{Outcome, Status};
