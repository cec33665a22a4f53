//! Console rendering of boards and cells.

use tictactoe_rules::{Board, Cell, Column};

const COLUMNS: [Column; 3] = [Column::A, Column::B, Column::C];

/// Read-only text view of a board.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    separator: bool,
}

impl Renderer {
    /// Creates a renderer; `separator` draws a rule under row 1.
    pub fn new(separator: bool) -> Self {
        Self { separator }
    }

    /// The raw symbol of a cell, undecorated.
    pub fn cell(cell: Cell) -> char {
        cell.symbol().as_char()
    }

    /// Renders the board as a labelled table.
    ///
    /// ```text
    ///   A B C
    /// 1 X| |O
    ///   -+-+-
    /// 2  |X|
    /// 3  | |
    /// ```
    pub fn board(&self, board: &Board) -> String {
        let header: Vec<String> = COLUMNS.iter().map(ToString::to_string).collect();
        let mut out = format!("  {}\n", header.join(" "));

        for (index, row) in board.rows().iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|c| Self::cell(*c).to_string()).collect();
            out.push_str(&format!("{} {}\n", index + 1, cells.join("|")));
            if index == 0 && self.separator {
                out.push_str("  -+-+-\n");
            }
        }
        out
    }
}
