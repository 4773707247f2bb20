//! Piece and shape tests - orientation tables, spawn position, translation

use bric_tetris::core::{Piece, Shape};
use bric_tetris::types::{Direction, PieceKind, Position};

#[test]
fn test_every_canonical_kind_has_four_cells() {
    for kind in PieceKind::CANONICAL {
        let shape = Shape::canonical(kind).unwrap();
        for r in 0..shape.rotation_count() {
            assert_eq!(shape.cells(r).len(), 4, "{:?} rotation {}", kind, r);
        }
    }
}

#[test]
fn test_spawn_is_on_top_row_and_centered() {
    for width in [5u8, 10, 11, 30] {
        for shape in Shape::canonical_set() {
            let piece = Piece::spawn(shape.clone(), width);
            assert_eq!(piece.origin().y, 0);
            let cells = piece.occupied_cells();
            let min_x = cells.iter().map(|p| p.x).min().unwrap();
            let max_x = cells.iter().map(|p| p.x).max().unwrap();
            assert!(max_x < width, "{:?} overflows width {}", shape.kind(), width);
            // Centered within one column of slack.
            let left = min_x as i32;
            let right = width as i32 - 1 - max_x as i32;
            assert!((left - right).abs() <= 2, "{:?} on width {}", shape.kind(), width);
        }
    }
}

#[test]
fn test_translate_each_direction() {
    let mut piece = Piece::at(Shape::canonical(PieceKind::T).unwrap(), Position::new(4, 4));
    piece.translate(Direction::Left);
    assert_eq!(piece.origin(), Position::new(3, 4));
    piece.translate(Direction::Right);
    piece.translate(Direction::Right);
    assert_eq!(piece.origin(), Position::new(5, 4));
    piece.translate(Direction::Down);
    assert_eq!(piece.origin(), Position::new(5, 5));
}

#[test]
fn test_left_right_round_trip() {
    for shape in Shape::canonical_set() {
        let mut piece = Piece::new(shape);
        let start = piece.occupied_cells();
        piece.translate(Direction::Left);
        piece.translate(Direction::Right);
        assert_eq!(piece.occupied_cells(), start);
        piece.translate(Direction::Right);
        piece.translate(Direction::Left);
        assert_eq!(piece.occupied_cells(), start);
    }
}

#[test]
fn test_rotation_returns_to_start_after_full_cycle() {
    for shape in Shape::canonical_set() {
        let mut piece = Piece::new(shape.clone());
        let start = piece.occupied_cells();
        for _ in 0..shape.rotation_count() {
            piece.rotate();
        }
        assert_eq!(piece.occupied_cells(), start, "{:?}", shape.kind());
    }
}

#[test]
fn test_candidates_leave_source_piece_untouched() {
    let piece = Piece::at(Shape::canonical(PieceKind::L).unwrap(), Position::new(2, 2));
    let moved = piece.translated(Direction::Down);
    let turned = piece.rotated();
    assert_eq!(piece.origin(), Position::new(2, 2));
    assert_eq!(piece.rotation(), 0);
    assert_eq!(moved.origin(), Position::new(2, 3));
    assert_eq!(turned.rotation(), 1);
}

#[test]
fn test_custom_shape_piece() {
    let cells = [Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)];
    let shape = Shape::custom(4, 2, &cells).unwrap();
    let piece = Piece::spawn(shape, 10);
    assert_eq!(piece.kind(), PieceKind::Custom(4));
    assert_eq!(piece.origin(), Position::new(4, 0));
    assert_eq!(piece.occupied_cells().len(), 3);
    assert_eq!(piece.topmost_row(), 0);
}
