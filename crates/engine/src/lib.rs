//! Game engine - the single writer of all game state
//!
//! [`Tetris`] owns the board, the bag, the player and the active piece, and is
//! the only code allowed to change them. Hosts feed it moves, rotations, drops
//! and ticks; it validates each request against the board, commits it, and
//! tells its observers that the state changed.
//!
//! # State machine
//!
//! ```text
//!              start_game
//! NotStarted ─────────────▶ On ──┬──▶ Lost        (spawn blocked)
//!                           ▲  │ ├──▶ WonByScore  (score ≥ win score)
//!                           └──┘ ├──▶ WonByLines  (lines ≥ win lines)
//!                    moves/ticks └──▶ TimeUp      (elapsed ≥ win time)
//! ```
//!
//! Outcomes are terminal: motion requests become no-ops until the next
//! `start_game`.
//!
//! # Threading
//!
//! The engine is synchronous and does no locking. A host driving it from
//! several sources must serialize the calls itself.
//!
//! # Example
//!
//! ```
//! use bric_tetris_core::GameConfig;
//! use bric_tetris_engine::Tetris;
//! use bric_tetris_types::{Direction, GameStatus};
//!
//! let mut game = Tetris::new(12345);
//! game.start_game(GameConfig::new("ada")).unwrap();
//! assert_eq!(game.status(), GameStatus::On);
//!
//! game.check_move(Direction::Left, 0);
//! game.check_rotate();
//! game.hard_drop();
//! assert!(game.player().score() > 0);
//! ```

pub mod observer;
pub mod tetris;

pub use bric_tetris_core as core;
pub use bric_tetris_types as types;

pub use observer::{Observer, ObserverId, Observers};
pub use tetris::Tetris;
