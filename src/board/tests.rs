use super::*;
use crate::error::BoardError;

#[test]
fn test_symbol_opponent() {
    assert_eq!(Symbol::X.opponent(), Symbol::O);
    assert_eq!(Symbol::O.opponent(), Symbol::X);
}

#[test]
fn test_variant_win_length() {
    assert_eq!(Variant::General.win_length(3, 3), 3);
    assert_eq!(Variant::General.win_length(4, 4), 4);
    assert_eq!(Variant::General.win_length(6, 7), 4);
    assert_eq!(Variant::General.win_length(2, 5), 2);
    assert_eq!(Variant::Classic.win_length(5, 5), 3);
    assert_eq!(Variant::Classic.win_length(1, 9), 1);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(4, 5).unwrap();
    assert_eq!(board.rows(), 4);
    assert_eq!(board.cols(), 5);
    assert_eq!(board.win_length(), 4);
    assert_eq!(board.empty_count(), 20);
    assert_eq!(board.occupied_count(), 0);
    assert!(!board.is_full());
}

#[test]
fn test_classic_board() {
    let board = Board::classic();
    assert_eq!((board.rows(), board.cols(), board.win_length()), (3, 3, 3));
    assert_eq!(board, Board::for_variant(Variant::Classic, 3, 3).unwrap());
    assert_eq!(board, Board::default());
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        Board::new(0, 3),
        Err(BoardError::InvalidDimensions { rows: 0, cols: 3 })
    );
    assert_eq!(
        Board::new(3, 0),
        Err(BoardError::InvalidDimensions { rows: 3, cols: 0 })
    );
}

#[test]
fn test_invalid_win_length() {
    assert!(matches!(
        Board::with_win_length(3, 3, 4),
        Err(BoardError::InvalidWinLength { win_length: 4, .. })
    ));
    assert!(Board::with_win_length(3, 3, 0).is_err());
    assert!(Board::with_win_length(1, 1, 1).is_ok());
}

#[test]
fn test_place_valid_move() {
    let mut board = Board::classic();
    assert!(board.place(Pos::new(1, 2), Symbol::X));
    assert_eq!(board.get(Pos::new(1, 2)), Some(Cell::Taken(Symbol::X)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_place_rejects_occupied() {
    let mut board = Board::classic();
    assert!(board.place(Pos::new(0, 0), Symbol::X));
    let before = board.clone();
    assert!(!board.place(Pos::new(0, 0), Symbol::O));
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(0, 0)), Some(Cell::Taken(Symbol::X)));
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut board = Board::new(3, 4).unwrap();
    let before = board.clone();
    assert!(!board.place(Pos::new(3, 0), Symbol::X));
    assert!(!board.place(Pos::new(0, 4), Symbol::X));
    assert!(!board.place(Pos::new(usize::MAX, usize::MAX), Symbol::O));
    assert_eq!(board, before);
    assert_eq!(board.get(Pos::new(3, 0)), None);
}

#[test]
fn test_is_valid() {
    let mut board = Board::classic();
    assert!(board.is_valid(Pos::new(2, 2)));
    board.place(Pos::new(2, 2), Symbol::O);
    assert!(!board.is_valid(Pos::new(2, 2)));
    assert!(!board.is_valid(Pos::new(0, 3)));
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(2, 3).unwrap();
    board.place(Pos::new(0, 1), Symbol::X);
    board.place(Pos::new(1, 0), Symbol::O);
    assert_eq!(
        board.empty_cells(),
        vec![Pos::new(0, 0), Pos::new(0, 2), Pos::new(1, 1), Pos::new(1, 2)]
    );
}

#[test]
fn test_empty_plus_occupied_is_size() {
    let mut board = Board::new(4, 6).unwrap();
    let moves = [(0, 0), (3, 5), (2, 2), (1, 4), (2, 2), (9, 9)];
    for (i, &(r, c)) in moves.iter().enumerate() {
        let symbol = if i % 2 == 0 { Symbol::X } else { Symbol::O };
        board.place(Pos::new(r, c), symbol);
        assert_eq!(board.empty_cells().len() + board.occupied_count(), 24);
    }
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_trial_restores_cell() {
    let mut board = Board::classic();
    board.place(Pos::new(1, 1), Symbol::X);
    let before = board.empty_cells();
    {
        let trial = board.trial(Pos::new(0, 2), Symbol::O).unwrap();
        assert_eq!(trial.get(Pos::new(0, 2)), Some(Cell::Taken(Symbol::O)));
        assert_eq!(trial.pos(), Pos::new(0, 2));
    }
    assert_eq!(board.empty_cells(), before);
}

#[test]
fn test_nested_trials_restore() {
    let mut board = Board::classic();
    let before = board.clone();
    {
        let mut outer = board.trial(Pos::new(0, 0), Symbol::X).unwrap();
        let inner = outer.trial(Pos::new(2, 2), Symbol::O).unwrap();
        assert_eq!(inner.occupied_count(), 2);
    }
    assert_eq!(board, before);
}

#[test]
fn test_trial_rejects_invalid() {
    let mut board = Board::classic();
    board.place(Pos::new(0, 0), Symbol::X);
    assert!(board.trial(Pos::new(0, 0), Symbol::O).is_none());
    assert!(board.trial(Pos::new(5, 0), Symbol::O).is_none());
    assert_eq!(board.get(Pos::new(0, 0)), Some(Cell::Taken(Symbol::X)));
}

#[test]
fn test_trial_restores_on_unwind() {
    let mut board = Board::classic();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _trial = board.trial(Pos::new(1, 1), Symbol::X).unwrap();
        panic!("abort exploration");
    }));
    assert!(result.is_err());
    assert!(board.is_valid(Pos::new(1, 1)));
}

#[test]
fn test_place_then_clear_keeps_order() {
    let mut board = Board::new(3, 4).unwrap();
    board.place(Pos::new(1, 1), Symbol::O);
    let before = board.empty_cells();
    for pos in before.clone() {
        drop(board.trial(pos, Symbol::X));
        assert_eq!(board.empty_cells(), before);
    }
}

#[test]
fn test_full_and_reset() {
    let mut board = Board::new(2, 2).unwrap();
    for (i, pos) in board.empty_cells().into_iter().enumerate() {
        let symbol = if i % 2 == 0 { Symbol::X } else { Symbol::O };
        assert!(board.place(pos, symbol));
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());

    board.reset();
    assert_eq!(board.empty_count(), 4);
    assert_eq!(board.win_length(), 2);
}

#[test]
fn test_display_layout() {
    let mut board = Board::new(2, 3).unwrap();
    board.place(Pos::new(0, 0), Symbol::X);
    board.place(Pos::new(1, 2), Symbol::O);
    let expected = "    0   1   2\n\
                    \x20 +---+---+---+\n\
                    0 | X |   |   |\n\
                    \x20 +---+---+---+\n\
                    1 |   |   | O |\n\
                    \x20 +---+---+---+\n";
    assert_eq!(board.to_string(), expected);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 9) < Pos::new(1, 0));
}

#[test]
fn test_cells_rows() {
    let mut board = Board::new(2, 3).unwrap();
    board.place(Pos::new(1, 2), Symbol::O);
    let rows: Vec<&[Cell]> = board.cells().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].iter().all(|c| c.is_empty()));
    assert_eq!(rows[1][2], Cell::Taken(Symbol::O));
    assert_eq!(rows[1], board.row(1));
}
