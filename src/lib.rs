//! Bric Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so hosts and integration
//! tests can write `bric_tetris::{core,engine,adapter,types}`.

pub use bric_tetris_adapter as adapter;
pub use bric_tetris_core as core;
pub use bric_tetris_engine as engine;
pub use bric_tetris_types as types;
