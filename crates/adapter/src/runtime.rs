//! Session runtime - drives one engine from a command channel and a timer
//!
//! The engine itself is synchronous. This loop serializes everything that
//! touches it: inbound commands and the descent timer are raced with
//! `tokio::select!`, and each event is applied to completion before the next
//! one is looked at. After an event that notified observers, one state line is
//! pushed to the output channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::core::{ConfigError, GameConfig, GameSnapshot, Shape};
use crate::engine::Tetris;
use crate::protocol::{create_error, ErrorCode, StateMessage};
use crate::types::{Direction, GameStatus};

/// Engine request
#[derive(Debug, Clone)]
pub enum Command {
    Start(GameConfig),
    Move(Direction),
    Rotate,
    Drop,
    SetBag {
        shapes: Vec<Shape>,
        keep_default: bool,
    },
}

/// One decoded inbound line
#[derive(Debug, Clone)]
pub enum Inbound {
    Command(Command),
    /// A line that could not be turned into a command; reported back in order
    Invalid { code: ErrorCode, message: String },
}

impl From<Command> for Inbound {
    fn from(value: Command) -> Self {
        Inbound::Command(value)
    }
}

enum Event {
    Input(Option<Inbound>),
    Tick,
}

/// Sequenced writer for outbound lines
struct Outbox {
    seq: u64,
    tx: mpsc::UnboundedSender<String>,
}

impl Outbox {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn state(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let msg = StateMessage::from_snapshot(self.next_seq(), snapshot);
        let line = serde_json::to_string(&msg)?;
        self.tx.send(line).context("output channel closed")
    }

    fn error(&mut self, code: ErrorCode, message: &str) -> Result<()> {
        let msg = create_error(self.next_seq(), code, message);
        let line = serde_json::to_string(&msg)?;
        self.tx.send(line).context("output channel closed")
    }
}

/// Run a session until the input channel closes, then hand the engine back
///
/// While the game is `On` the engine is ticked every `timer()` ms with the time
/// elapsed since the last successful start. Rejected input produces an error
/// line; the session keeps going.
pub async fn run_session(
    mut engine: Tetris,
    mut input: mpsc::Receiver<Inbound>,
    out: mpsc::UnboundedSender<String>,
) -> Result<Tetris> {
    let changed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&changed);
    let observer = engine.subscribe(move || flag.store(true, Ordering::Release));

    let mut outbox = Outbox { seq: 0, tx: out };
    let mut snapshot = GameSnapshot::default();
    let mut started_at = Instant::now();
    let mut next_tick: Option<Instant> = None;
    let mut last_status = engine.status();

    loop {
        let deadline = next_tick;
        let event = tokio::select! {
            inbound = input.recv() => Event::Input(inbound),
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => Event::Tick,
        };

        let mut reschedule = false;
        match event {
            Event::Input(None) => break,
            Event::Input(Some(Inbound::Command(command))) => match apply(&mut engine, command) {
                Ok(true) => {
                    started_at = Instant::now();
                    reschedule = true;
                    let config = engine.config();
                    eprintln!(
                        "[session] game started for {} ({}x{}, level {})",
                        config.name, config.width, config.height, config.level
                    );
                }
                Ok(false) => {}
                Err(err) => {
                    eprintln!("[session] command rejected: {}", err);
                    outbox.error(ErrorCode::InvalidConfig, &err.to_string())?;
                }
            },
            Event::Input(Some(Inbound::Invalid { code, message })) => {
                eprintln!("[session] invalid input: {}", message);
                outbox.error(code, &message)?;
            }
            Event::Tick => {
                let elapsed = u64::try_from(started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
                engine.tick(elapsed);
                reschedule = true;
            }
        }

        if engine.status() != GameStatus::On {
            next_tick = None;
        } else if reschedule || next_tick.is_none() {
            next_tick = Some(Instant::now() + Duration::from_millis(engine.timer().into()));
        }

        if changed.swap(false, Ordering::AcqRel) {
            engine.snapshot_into(&mut snapshot);
            outbox.state(&snapshot)?;
        }

        let status = engine.status();
        if status != last_status && status.is_over() {
            let player = engine.player();
            eprintln!(
                "[session] game over: {} (score {}, lines {})",
                status.as_str(),
                player.score(),
                player.lines_cleared()
            );
        }
        last_status = status;
    }

    engine.unsubscribe(observer);
    Ok(engine)
}

/// Apply one command; `Ok(true)` means a new game started
fn apply(engine: &mut Tetris, command: Command) -> Result<bool, ConfigError> {
    match command {
        Command::Start(config) => {
            engine.start_game(config)?;
            return Ok(true);
        }
        Command::Move(dir) => {
            engine.check_move(dir, 0);
        }
        Command::Rotate => {
            engine.check_rotate();
        }
        Command::Drop => {
            engine.hard_drop();
        }
        Command::SetBag {
            shapes,
            keep_default,
        } => engine.set_bag(shapes, keep_default)?,
    }
    Ok(false)
}
