//! Integration tests for board access and move validation.

use tictactoe_rules::{Board, MoveError, RulesError, Symbol};

#[test]
fn test_read_outside_grid_fails() {
    let board = Board::new();
    for (column, row) in [('D', 1), ('A', 0), ('A', 4), ('@', 2), ('c', 3)] {
        assert_eq!(
            board.read(column, row),
            Err(RulesError::InvalidCoordinates { column, row })
        );
    }
}

#[test]
fn test_write_outside_grid_fails() {
    let mut board = Board::new();
    assert_eq!(
        board.write('X', 'D', 2).unwrap_err(),
        RulesError::InvalidCoordinates { column: 'D', row: 2 }
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_write_illegal_symbol_fails() {
    let mut board = Board::new();
    assert_eq!(
        board.write('Z', 'A', 1).unwrap_err(),
        RulesError::InvalidValue { symbol: 'Z' }
    );
}

#[test]
fn test_second_write_same_cell_fails() {
    let mut board = Board::new();
    board.write('X', 'B', 2).unwrap();

    let err = board.write('O', 'B', 2).unwrap_err();
    assert_eq!(err.move_error(), Some(MoveError::Occupied(Symbol::X)));
    assert_eq!(err.to_string(), "invalid move: cell already contains a value X");
}

#[test]
fn test_turn_alternation() {
    let mut board = Board::new();
    assert!(board.write('X', 'A', 1).is_ok());

    let err = board.write('X', 'A', 2).unwrap_err();
    assert_eq!(err.move_error(), Some(MoveError::OutOfSequence(Symbol::X)));

    assert!(board.write('O', 'A', 2).is_ok());
}

#[test]
fn test_o_cannot_open() {
    let mut board = Board::new();
    let err = board.write('O', 'C', 3).unwrap_err();
    assert_eq!(err.to_string(), "invalid move: invalid move sequence O");
}

#[test]
fn test_empty_symbol_never_legal() {
    let mut board = Board::new();
    assert_eq!(
        board.write(' ', 'A', 1).unwrap_err().move_error(),
        Some(MoveError::NotAMark)
    );

    board.write('X', 'A', 1).unwrap();
    assert_eq!(
        board.write(' ', 'B', 1).unwrap_err().move_error(),
        Some(MoveError::NotAMark)
    );
}

#[test]
fn test_writes_allowed_after_game_over() {
    let mut board = Board::new();
    for (symbol, column, row) in [
        ('X', 'A', 1),
        ('O', 'B', 1),
        ('X', 'A', 2),
        ('O', 'B', 2),
        ('X', 'A', 3),
    ] {
        board.write(symbol, column, row).unwrap();
    }
    assert!(board.status().is_over);

    // The engine leaves stopping to the caller.
    assert!(board.write('O', 'C', 3).is_ok());
}

#[test]
fn test_board_serializes() {
    let mut board = Board::new();
    board.write('X', 'B', 2).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn test_unbalanced_board_does_not_deserialize() {
    let json = r#"{"cells":["O","O","O","EMPTY","EMPTY","EMPTY","EMPTY","EMPTY","EMPTY"]}"#;
    let err = serde_json::from_str::<Board>(json).unwrap_err();
    assert!(err.to_string().contains("X leads O by zero or one mark"));
}

#[test]
fn test_deserialized_board_keeps_playing() {
    let json = r#"{"cells":["X","EMPTY","EMPTY","EMPTY","EMPTY","EMPTY","EMPTY","EMPTY","EMPTY"]}"#;
    let mut board: Board = serde_json::from_str(json).unwrap();
    assert_eq!(board.to_move(), Some(Symbol::O));
    assert!(board.write('O', 'B', 2).is_ok());
}
