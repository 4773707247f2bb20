//! Board tests - grid access, row scan, line clear and gravity

use bric_tetris::core::{Board, BoardError, ConfigError};
use bric_tetris::types::{LineState, PieceKind, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};

fn fill_row(board: &mut Board, y: u8, except: &[u8]) {
    for x in 0..board.width() {
        if !except.contains(&x) {
            board
                .set_cell(Position::new(x, y), Some(PieceKind::J))
                .unwrap();
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
    assert_eq!(board.width(), DEFAULT_WIDTH);
    assert_eq!(board.height(), DEFAULT_HEIGHT);

    for y in 0..DEFAULT_HEIGHT {
        for x in 0..DEFAULT_WIDTH {
            let pos = Position::new(x, y);
            assert!(board.contains(pos), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(pos), Some(None));
        }
    }
}

#[test]
fn test_board_size_bounds() {
    assert!(Board::new(5, 10).is_ok());
    assert!(Board::new(30, 40).is_ok());
    assert!(matches!(
        Board::new(4, 20),
        Err(ConfigError::OutOfRange { field: "width", .. })
    ));
    assert!(matches!(
        Board::new(10, 41),
        Err(ConfigError::OutOfRange { field: "height", .. })
    ));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(Position::new(DEFAULT_WIDTH, 0)), None);
    assert_eq!(board.get(Position::new(0, DEFAULT_HEIGHT)), None);
    // Left of column 0 wraps to a huge column.
    assert_eq!(board.get(Position::new(u8::MAX, 0)), None);
    assert!(!board.is_free(Position::new(u8::MAX, 3)));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();
    board
        .set_cell(Position::new(5, 10), Some(PieceKind::T))
        .unwrap();
    assert_eq!(board.get(Position::new(5, 10)), Some(Some(PieceKind::T)));
    assert_eq!(board.is_occupied(Position::new(5, 10)), Ok(true));

    board.set_cell(Position::new(5, 10), None).unwrap();
    assert_eq!(board.is_occupied(Position::new(5, 10)), Ok(false));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::default();
    let err = board
        .set_cell(Position::new(0, DEFAULT_HEIGHT), Some(PieceKind::T))
        .unwrap_err();
    assert_eq!(
        err,
        BoardError::OutOfBounds {
            x: 0,
            y: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT
        }
    );
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_scan_row_states() {
    let mut board = Board::default();
    fill_row(&mut board, 19, &[]);
    fill_row(&mut board, 18, &[4]);
    board
        .set_cell(Position::new(9, 17), Some(PieceKind::O))
        .unwrap();

    assert_eq!(board.scan_row(19), Ok(LineState::Full));
    assert_eq!(board.scan_row(18), Ok(LineState::Mixed));
    assert_eq!(board.scan_row(17), Ok(LineState::Mixed));
    assert_eq!(board.scan_row(16), Ok(LineState::Empty));
    assert_eq!(
        board.scan_row(20),
        Err(BoardError::RowOutOfBounds { y: 20, height: 20 })
    );
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::default();
    for y in 16..20 {
        fill_row(&mut board, y, &[]);
    }
    board
        .set_cell(Position::new(2, 15), Some(PieceKind::S))
        .unwrap();

    assert_eq!(board.clear_and_compact(16), Ok(4));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(Position::new(2, 19)), Some(Some(PieceKind::S)));
}

#[test]
fn test_clear_keeps_kinds_of_falling_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 19, &[]);
    board
        .set_cell(Position::new(0, 18), Some(PieceKind::Z))
        .unwrap();
    board
        .set_cell(Position::new(7, 17), Some(PieceKind::L))
        .unwrap();

    assert_eq!(board.clear_and_compact(18), Ok(1));
    assert_eq!(board.get(Position::new(0, 19)), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(Position::new(7, 18)), Some(Some(PieceKind::L)));
    assert_eq!(board.scan_row(0), Ok(LineState::Empty));
}

#[test]
fn test_clear_nothing_without_full_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 19, &[0]);
    let before = board.clone();
    assert_eq!(board.clear_and_compact(19), Ok(0));
    assert_eq!(board, before);
}

#[test]
fn test_paint_and_erase() {
    let mut board = Board::default();
    let cells = [Position::new(1, 1), Position::new(2, 1)];
    board.paint(&cells, Some(PieceKind::I)).unwrap();
    assert_eq!(board.filled_count(), 2);
    board.paint(&cells, None).unwrap();
    assert_eq!(board.filled_count(), 0);
}
