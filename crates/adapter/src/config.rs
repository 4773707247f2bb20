//! Session configuration from environment variables

use std::env;
use std::str::FromStr;

use crate::core::GameConfig;
use crate::engine::Tetris;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 1;

/// Everything a headless session needs before the first command arrives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Defaults applied to `start` commands that leave a field out
    pub game: GameConfig,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl SessionConfig {
    /// Create from `BRIC_TETRIS_*` environment variables
    ///
    /// Missing or unparsable values keep their defaults. Ranges are not
    /// checked here; `start_game` validates the game parameters.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let game = defaults.game;

        let name = lookup("BRIC_TETRIS_NAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(game.name);

        Self {
            game: GameConfig {
                name,
                width: parse_or(&lookup, "BRIC_TETRIS_WIDTH", game.width),
                height: parse_or(&lookup, "BRIC_TETRIS_HEIGHT", game.height),
                win_score: parse_or(&lookup, "BRIC_TETRIS_WIN_SCORE", game.win_score),
                win_lines: parse_or(&lookup, "BRIC_TETRIS_WIN_LINES", game.win_lines),
                win_time_ms: parse_or(&lookup, "BRIC_TETRIS_WIN_TIME_MS", game.win_time_ms),
                level: parse_or(&lookup, "BRIC_TETRIS_LEVEL", game.level),
            },
            seed: parse_or(&lookup, "BRIC_TETRIS_SEED", defaults.seed),
        }
    }

    /// A fresh engine seeded from this configuration
    pub fn engine(&self) -> Tetris {
        Tetris::new(self.seed)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
