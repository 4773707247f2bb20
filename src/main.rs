//! Headless Tetris runner (default binary).
//!
//! Reads command lines (JSON) on stdin, runs one session, and prints state
//! lines (JSON) on stdout. Diagnostics go to stderr.
//!
//! Flags override the `BRIC_TETRIS_*` environment variables.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use bric_tetris::adapter::{decode_line, run_session, SessionConfig};

const MAX_PENDING_COMMANDS: usize = 64;

#[derive(Parser, Debug)]
#[command(name = "bric-tetris", about = "Headless Tetris over JSON lines")]
struct Args {
    /// Seed for the piece bag.
    #[arg(long)]
    seed: Option<u64>,

    /// Player name used when a start command does not give one.
    #[arg(long)]
    name: Option<String>,
}

impl Args {
    fn apply(self, config: &mut SessionConfig) -> Result<()> {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                bail!("--name must not be empty");
            }
            config.game.name = name.to_string();
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = SessionConfig::from_env();
    Args::parse().apply(&mut config)?;

    let (cmd_tx, cmd_rx) = mpsc::channel(MAX_PENDING_COMMANDS);
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();

    let writer = tokio::spawn(async move {
        while let Some(line) = out_rx.recv().await {
            println!("{}", line);
        }
    });

    let defaults = config.game.clone();
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if cmd_tx.send(decode_line(&line, &defaults)).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    eprintln!("[main] stdin error: {}", e);
                    break;
                }
            }
        }
    });

    eprintln!("[main] session ready (seed {})", config.seed);
    let engine = run_session(config.engine(), cmd_rx, out_tx).await?;

    reader.await.context("stdin reader panicked")?;
    writer.await.context("stdout writer panicked")?;

    let player = engine.player();
    eprintln!(
        "[main] session closed: {} (score {}, lines {})",
        engine.status().as_str(),
        player.score(),
        player.lines_cleared()
    );
    Ok(())
}
