//! Property tests - random input sequences against the engine invariants
//!
//! Invariants covered:
//! - The game is `On` exactly when there is a current piece.
//! - The current piece is painted on the board with its own kind.
//! - Score and cleared lines never decrease; the timer stays in its bounds.
//! - A hard drop removes `width` cells per cleared line and adds a new piece
//!   only when play continues.
//! - Outside `On`, nothing changes the board.
//! - Row classification agrees with a plain count of filled cells.
//! - Clearing rows out of a stack leaves no empty row under a filled one.

use proptest::prelude::*;

use bric_tetris::core::{Board, GameConfig};
use bric_tetris::engine::Tetris;
use bric_tetris::types::{
    Direction, GameStatus, LineState, PieceKind, Position, MAXIMUM_TIMER, MINIMUM_TIMER,
};

#[derive(Debug, Clone, Copy)]
enum Input {
    Left,
    Right,
    Down,
    Rotate,
    Drop,
    Tick,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Left),
        Just(Input::Right),
        Just(Input::Down),
        Just(Input::Rotate),
        Just(Input::Drop),
        Just(Input::Tick),
    ]
}

fn assert_consistent(game: &Tetris) {
    assert_eq!(
        game.status() == GameStatus::On,
        game.current_bric().is_some(),
        "status {:?}",
        game.status()
    );
    assert!((MINIMUM_TIMER..=MAXIMUM_TIMER).contains(&game.timer()));
    if let Some(piece) = game.current_bric() {
        for pos in piece.occupied_cells() {
            assert_eq!(game.board().get(pos), Some(Some(piece.kind())));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        width in 5u8..=14,
        height in 10u8..=24,
        inputs in prop::collection::vec(input(), 1..300),
    ) {
        let mut game = Tetris::new(seed);
        game.start_game(GameConfig {
            width,
            height,
            win_score: 1_000_000,
            win_lines: 999,
            ..GameConfig::new("prop")
        })
        .unwrap();
        assert_consistent(&game);

        for (step, input) in inputs.into_iter().enumerate() {
            let score = game.player().score();
            let lines = game.player().lines_cleared();
            let filled = game.board().filled_count();
            let was_on = game.status() == GameStatus::On;
            let board_before = game.board().clone();

            match input {
                Input::Left => { game.check_move(Direction::Left, 0); }
                Input::Right => { game.check_move(Direction::Right, 0); }
                Input::Down => { game.check_move(Direction::Down, 0); }
                Input::Rotate => { game.check_rotate(); }
                Input::Drop => {
                    game.hard_drop();
                    if was_on {
                        let cleared = (game.player().lines_cleared() - lines) as usize;
                        let spawned = if game.status() == GameStatus::On { 4 } else { 0 };
                        prop_assert_eq!(
                            game.board().filled_count(),
                            filled - cleared * width as usize + spawned
                        );
                    }
                }
                Input::Tick => game.tick(step as u64 * 10),
            }

            assert_consistent(&game);
            prop_assert!(game.player().score() >= score);
            prop_assert!(game.player().lines_cleared() >= lines);
            if !was_on {
                prop_assert_eq!(game.board(), &board_before);
            }
        }
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input(), 1..150),
    ) {
        let mut a = Tetris::new(seed);
        let mut b = Tetris::new(seed);
        a.start_game(GameConfig::new("a")).unwrap();
        b.start_game(GameConfig::new("a")).unwrap();

        for input in inputs {
            for game in [&mut a, &mut b] {
                match input {
                    Input::Left => { game.check_move(Direction::Left, 0); }
                    Input::Right => { game.check_move(Direction::Right, 0); }
                    Input::Down => { game.check_move(Direction::Down, 0); }
                    Input::Rotate => { game.check_rotate(); }
                    Input::Drop => { game.hard_drop(); }
                    Input::Tick => game.tick(0),
                }
            }
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn scan_row_agrees_with_cell_count(
        width in 5u8..=30,
        mask in prop::collection::vec(any::<bool>(), 30),
    ) {
        let mut board = Board::new(width, 10).unwrap();
        for x in 0..width {
            if mask[x as usize] {
                board.set_cell(Position::new(x, 4), Some(PieceKind::T)).unwrap();
            }
        }
        let filled = mask[..width as usize].iter().filter(|&&f| f).count();
        let expected = if filled == 0 {
            LineState::Empty
        } else if filled == width as usize {
            LineState::Full
        } else {
            LineState::Mixed
        };
        prop_assert_eq!(board.scan_row(4), Ok(expected));
    }

    #[test]
    fn clearing_a_stack_leaves_no_gaps(
        width in 5u8..=12,
        height in 10u8..=24,
        rows in prop::collection::vec((any::<bool>(), any::<u16>()), 1..10),
        top_offset in 0usize..10,
    ) {
        // Bottom-up stack of full or mixed rows, empty above.
        let mut board = Board::new(width, height).unwrap();
        for (i, &(full, bits)) in rows.iter().enumerate() {
            let y = height - 1 - i as u8;
            for x in 0..width {
                let filled = full || x == 0 || (x < width - 1 && (bits >> (x % 16)) & 1 == 1);
                if filled {
                    board.set_cell(Position::new(x, y), Some(PieceKind::J)).unwrap();
                }
            }
        }
        let stack = rows.len();
        let top = height - 1 - (top_offset % stack) as u8;
        let before = board.filled_count();

        let cleared = board.clear_and_compact(top).unwrap();
        prop_assert_eq!(
            board.filled_count(),
            before - cleared as usize * width as usize
        );

        let states: Vec<LineState> = (0..height).map(|y| board.scan_row(y).unwrap()).collect();
        let first_filled = states
            .iter()
            .position(|&s| s != LineState::Empty)
            .unwrap_or(states.len());
        prop_assert!(states[first_filled..].iter().all(|&s| s != LineState::Empty));
        prop_assert_eq!(states.len() - first_filled, stack - cleared as usize);
        prop_assert!(states[top as usize..].iter().all(|&s| s != LineState::Full));
    }

    #[test]
    fn first_piece_fits_on_every_board(
        seed in any::<u64>(),
        width in 5u8..=30,
        height in 10u8..=40,
    ) {
        let mut game = Tetris::new(seed);
        game.start_game(GameConfig { width, height, ..GameConfig::new("prop") }).unwrap();
        prop_assert_eq!(game.status(), GameStatus::On);
        let piece = game.current_bric().unwrap();
        let cells = piece.occupied_cells();
        prop_assert!(cells.iter().all(|&p| game.board().contains(p)));
        prop_assert_eq!(game.board().filled_count(), cells.len());
    }
}
