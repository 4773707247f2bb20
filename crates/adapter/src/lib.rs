//! Adapter module - headless sessions over line-delimited JSON
//!
//! This crate hosts a [`Tetris`](bric_tetris_engine::Tetris) engine outside any
//! UI. A host feeds it decoded command lines; the session applies them, runs
//! the descent timer, and answers with a state line after every change.
//!
//! # Protocol Overview
//!
//! ```text
//! Host -> Session: {"type":"start","name":"ada"}
//! Session -> Host: {"type":"state","seq":1,"status":"on","board":{...},"active":{...},...}
//! Host -> Session: {"type":"move","direction":"left"}
//! Session -> Host: {"type":"state","seq":2,...}
//! Host -> Session: {"type":"move","direction":"up"}
//! Session -> Host: {"type":"error","seq":3,"code":"invalid_command","message":"unknown direction 'up'"}
//! ```
//!
//! - See [`protocol`] for the message structures
//! - See [`runtime`] for the session loop
//! - See [`config`] for the `BRIC_TETRIS_*` environment variables
//!
//! # Logging
//!
//! Session events (start, game over, rejected input) go to stderr with a
//! `[session]` prefix. The output channel carries JSON lines only.

pub mod config;
pub mod protocol;
pub mod runtime;

pub use bric_tetris_core as core;
pub use bric_tetris_engine as engine;
pub use bric_tetris_types as types;

pub use config::SessionConfig;
pub use protocol::*;
pub use runtime::{run_session, Command, Inbound};
