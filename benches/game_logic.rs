use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bric_tetris::core::{Board, GameConfig};
use bric_tetris::engine::Tetris;
use bric_tetris::types::{Direction, PieceKind, Position};

fn started() -> Tetris {
    let mut game = Tetris::new(12345);
    game.start_game(GameConfig::new("bench")).unwrap();
    game
}

fn bench_scan_row(c: &mut Criterion) {
    let mut board = Board::default();
    for x in 0..10 {
        board
            .set_cell(Position::new(x, 19), Some(PieceKind::I))
            .unwrap();
    }

    c.bench_function("scan_full_row", |b| {
        b.iter(|| board.scan_row(black_box(19)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board
                        .set_cell(Position::new(x, y), Some(PieceKind::I))
                        .unwrap();
                }
            }
            board.clear_and_compact(black_box(16)).unwrap()
        })
    });
}

fn bench_check_move(c: &mut Criterion) {
    let mut game = started();

    c.bench_function("check_move_left_right", |b| {
        b.iter(|| {
            game.check_move(Direction::Left, 0);
            game.check_move(Direction::Right, 0);
        })
    });
}

fn bench_check_rotate(c: &mut Criterion) {
    let mut game = started();
    game.check_move(Direction::Down, 0);
    game.check_move(Direction::Down, 0);

    c.bench_function("check_rotate", |b| {
        b.iter(|| {
            game.check_rotate();
        })
    });
}

fn bench_generate_bric(c: &mut Criterion) {
    c.bench_function("start_and_generate", |b| {
        b.iter(|| {
            let mut game = started();
            game.generate_bric(false);
            black_box(game.status())
        })
    });
}

fn bench_hard_drop_session(c: &mut Criterion) {
    c.bench_function("hard_drop_until_over", |b| {
        b.iter(|| {
            let mut game = started();
            while game.status() == bric_tetris::types::GameStatus::On {
                game.hard_drop();
            }
            black_box(game.player().score())
        })
    });
}

criterion_group!(
    benches,
    bench_scan_row,
    bench_line_clear,
    bench_check_move,
    bench_check_rotate,
    bench_generate_bric,
    bench_hard_drop_session
);
criterion_main!(benches);
