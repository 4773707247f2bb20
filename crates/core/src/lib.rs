//! Core rule primitives - pure, deterministic, and testable
//!
//! This crate holds the pieces the engine orchestrates. It has **no
//! dependencies** on UI, networking, or I/O:
//!
//! - **Deterministic**: the same seed produces the same piece supply
//! - **Testable**: each primitive carries its own unit tests
//! - **Portable**: usable from a terminal, a GUI, or a headless host
//!
//! # Module Structure
//!
//! - [`board`]: width×height grid, containment, row scan, line clear and gravity
//! - [`shapes`]: rotation tables for the seven canonical kinds and custom shapes
//! - [`piece`]: a shape placed on the board (kind, orientation, origin)
//! - [`bag`]: bag randomizer with a seeded shuffle
//! - [`player`]: name, score and cleared-line counters
//! - [`scoring`]: points per landing
//! - [`config`]: bounded session parameters and their validation
//! - [`snapshot`]: owned copies of the observable state
//!
//! # Example
//!
//! ```
//! use bric_tetris_core::{Board, Piece, Shape};
//! use bric_tetris_types::{Direction, PieceKind};
//!
//! let board = Board::new(10, 20).unwrap();
//! let mut piece = Piece::spawn(Shape::canonical(PieceKind::T).unwrap(), board.width());
//! piece.translate(Direction::Down);
//!
//! assert!(piece.occupied_cells().iter().all(|&p| board.is_free(p)));
//! ```

pub mod bag;
pub mod board;
pub mod config;
pub mod error;
pub mod piece;
pub mod player;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use bric_tetris_types as types;

// Re-export commonly used types for convenience
pub use bag::{Bag, SimpleRng};
pub use board::Board;
pub use config::GameConfig;
pub use error::{BoardError, ConfigError};
pub use piece::Piece;
pub use player::Player;
pub use scoring::{calculate_drop_score, calculate_line_score, score_for_landing};
pub use shapes::{CellSet, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot, PlayerSnapshot};
