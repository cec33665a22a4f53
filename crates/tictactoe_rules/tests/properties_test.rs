//! Property tests over coordinates, symbols and legal play.

use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tictactoe_rules::{Board, Cell, Coord, MoveError, RulesError, Symbol};

fn off_grid() -> impl Strategy<Value = (char, u32)> {
    (any::<char>(), any::<u32>()).prop_filter("must lie outside A1..C3", |(column, row)| {
        !matches!(*column, 'A' | 'B' | 'C') || !(1..=3).contains(row)
    })
}

fn illegal_symbol() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must not be a symbol", |c| !matches!(*c, 'X' | 'O' | ' '))
}

fn hash_of(cell: &Cell) -> u64 {
    let mut hasher = DefaultHasher::new();
    cell.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn read_rejects_off_grid((column, row) in off_grid()) {
        let board = Board::new();
        prop_assert_eq!(
            board.read(column, row),
            Err(RulesError::InvalidCoordinates { column, row })
        );
    }

    #[test]
    fn write_rejects_off_grid((column, row) in off_grid()) {
        let mut board = Board::new();
        prop_assert_eq!(
            board.write('X', column, row).unwrap_err(),
            RulesError::InvalidCoordinates { column, row }
        );
    }

    #[test]
    fn illegal_symbols_rejected(symbol in illegal_symbol()) {
        prop_assert_eq!(Cell::new(symbol), Err(RulesError::InvalidValue { symbol }));
        let mut board = Board::new();
        prop_assert_eq!(
            board.write(symbol, 'A', 1).unwrap_err(),
            RulesError::InvalidValue { symbol }
        );
    }

    #[test]
    fn equal_symbols_hash_alike(symbol in prop::sample::select(vec!['X', 'O', ' '])) {
        let a = Cell::new(symbol).unwrap();
        let b = Cell::new(symbol).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    /// Plays a random legal game: every write lands, reads back, and any
    /// second write to the same cell is refused.
    #[test]
    fn legal_play_round_trips(order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle()) {
        let coords: Vec<Coord> = Coord::all().collect();
        let mut board = Board::new();
        let mut symbol = Symbol::X;

        for index in order {
            let coord = coords[index];
            let column = coord.column().as_char();
            let row = coord.row().number();

            board.write(symbol.as_char(), column, row).unwrap();
            prop_assert_eq!(board.read(column, row).unwrap().symbol(), symbol);
            prop_assert!(board.check_invariants().is_ok());

            let again = board.write(symbol.opponent().as_char(), column, row).unwrap_err();
            prop_assert_eq!(again.move_error(), Some(MoveError::Occupied(symbol)));

            symbol = symbol.opponent();
        }

        prop_assert!(board.is_full());
        prop_assert!(board.status().is_over);
    }
}
