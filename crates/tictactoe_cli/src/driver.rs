//! Interactive game loop.
//!
//! The driver owns all console I/O: it prompts, parses coordinates, calls the
//! rules engine and reports rejections without ending the session.

use crate::config::DriverConfig;
use crate::input::parse_coordinate;
use crate::render::Renderer;
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use tictactoe_rules::{Board, Coord, Move, Status, Symbol};
use tracing::{debug, info, instrument, warn};

/// Record of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Final status.
    pub status: Status,
    /// Accepted moves in play order.
    pub moves: Vec<Move>,
}

/// Runs one game over arbitrary input and output streams.
pub struct Driver<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    board: Board,
    active: Symbol,
    moves: Vec<Move>,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver for a fresh board with X to move.
    pub fn new(input: R, output: W, config: &DriverConfig) -> Self {
        Self {
            input,
            output,
            renderer: Renderer::new(*config.separator()),
            board: Board::new(),
            active: Symbol::X,
            moves: Vec::new(),
        }
    }

    /// Plays until the board reports a terminal state.
    ///
    /// Returns `None` if the input closes before the game ends.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Option<GameSummary>> {
        loop {
            let status = self.board.status();
            if status.is_over {
                self.announce(status)?;
                info!(outcome = %status.outcome(), moves = self.moves.len(), "Game over");
                return Ok(Some(GameSummary {
                    status,
                    moves: self.moves,
                }));
            }

            write!(
                self.output,
                "{}Player {}, enter a move: ",
                self.renderer.board(&self.board),
                self.active
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                info!("Input closed before the game ended");
                return Ok(None);
            }

            let (column, row) = match parse_coordinate(&line) {
                Ok(pair) => pair,
                Err(e) => {
                    debug!(error = %e, "Unreadable coordinate");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            let action = match Coord::new(column, row) {
                Ok(coord) => Move::new(self.active, coord),
                Err(e) => {
                    warn!(error = %e, "Coordinate refused");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            match self.board.apply(action) {
                Ok(_) => {
                    self.moves.push(action);
                    self.active = self.active.opponent();
                }
                Err(e) => {
                    warn!(error = %e, "Move refused");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn announce(&mut self, status: Status) -> Result<()> {
        match status.outcome().winner() {
            Some(winner) => writeln!(self.output, "Congratulations {}", winner)?,
            None => writeln!(self.output, "Draw")?,
        }
        write!(self.output, "{}", self.renderer.board(&self.board))?;
        Ok(())
    }
}
