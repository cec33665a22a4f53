//! Integration tests for terminal-state detection.

use tictactoe_rules::{Board, Outcome, Status, Symbol};

fn play(moves: &[(char, char, u32)]) -> Board {
    let mut board = Board::new();
    for &(symbol, column, row) in moves {
        board.write(symbol, column, row).expect("legal move");
    }
    board
}

#[test]
fn test_fresh_board_in_progress() {
    let status = Board::new().status();
    assert_eq!(
        status,
        Status {
            is_over: false,
            winner: Symbol::Empty
        }
    );
    assert_eq!(status.outcome(), Outcome::InProgress);
}

#[test]
fn test_column_a_win() {
    let board = play(&[
        ('X', 'A', 1),
        ('O', 'B', 1),
        ('X', 'A', 2),
        ('O', 'B', 2),
        ('X', 'A', 3),
    ]);
    assert_eq!(
        board.status(),
        Status {
            is_over: true,
            winner: Symbol::X
        }
    );
}

#[test]
fn test_row_win_for_o() {
    let board = play(&[
        ('X', 'A', 1),
        ('O', 'A', 2),
        ('X', 'B', 1),
        ('O', 'B', 2),
        ('X', 'C', 3),
        ('O', 'C', 2),
    ]);
    assert_eq!(board.status().outcome(), Outcome::Won(Symbol::O));
}

#[test]
fn test_diagonal_win() {
    let board = play(&[
        ('X', 'A', 1),
        ('O', 'B', 1),
        ('X', 'B', 2),
        ('O', 'C', 1),
        ('X', 'C', 3),
    ]);
    assert_eq!(board.status(), Status::won(Symbol::X));
}

#[test]
fn test_full_board_draw() {
    // X O X
    // X O O
    // O X X
    let board = play(&[
        ('X', 'A', 1),
        ('O', 'B', 1),
        ('X', 'C', 1),
        ('O', 'B', 2),
        ('X', 'A', 2),
        ('O', 'C', 2),
        ('X', 'B', 3),
        ('O', 'A', 3),
        ('X', 'C', 3),
    ]);
    assert_eq!(
        board.status(),
        Status {
            is_over: true,
            winner: Symbol::Empty
        }
    );
    assert_eq!(board.status().outcome(), Outcome::Drawn);
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    // X O X
    // O X O
    // O X X   (X completes A1-B2-C3 with the ninth mark)
    let board = play(&[
        ('X', 'A', 1),
        ('O', 'B', 1),
        ('X', 'C', 1),
        ('O', 'A', 2),
        ('X', 'B', 2),
        ('O', 'C', 2),
        ('X', 'B', 3),
        ('O', 'A', 3),
        ('X', 'C', 3),
    ]);
    assert!(board.is_full());
    assert_eq!(board.status(), Status::won(Symbol::X));
}

#[test]
fn test_status_serializes() {
    let json = serde_json::to_value(Status::won(Symbol::O)).unwrap();
    assert_eq!(json, serde_json::json!({ "is_over": true, "winner": "O" }));
}
