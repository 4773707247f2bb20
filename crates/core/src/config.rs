//! Game configuration - the bounded parameters of a session
//!
//! Every numeric field has a closed range (see the table in
//! [`bric_tetris_types`]); [`GameConfig::validate`] checks all of them before
//! anything is applied so a rejected configuration never half-applies.

use crate::error::ConfigError;
use crate::types::*;

/// Parameters accepted by `start_game`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub name: String,
    pub width: u8,
    pub height: u8,
    pub win_score: u32,
    pub win_lines: u32,
    /// Session length in milliseconds
    pub win_time_ms: u64,
    /// Starting level; each unit shortens the timer by one step
    pub level: u32,
}

impl GameConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check every bounded field, reporting the first offender
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        ConfigError::check_range("width", self.width, MINIMUM_WIDTH, MAXIMUM_WIDTH)?;
        ConfigError::check_range("height", self.height, MINIMUM_HEIGHT, MAXIMUM_HEIGHT)?;
        ConfigError::check_range(
            "win score",
            self.win_score,
            MINIMUM_WIN_SCORE,
            MAXIMUM_WIN_SCORE,
        )?;
        ConfigError::check_range(
            "win lines",
            self.win_lines,
            MINIMUM_WIN_LINES,
            MAXIMUM_WIN_LINES,
        )?;
        ConfigError::check_range(
            "win time",
            self.win_time_ms,
            MINIMUM_WIN_TIME_MS,
            MAXIMUM_WIN_TIME_MS,
        )?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            win_score: DEFAULT_WIN_SCORE,
            win_lines: DEFAULT_WIN_LINES,
            win_time_ms: DEFAULT_WIN_TIME_MS,
            level: 0,
        }
    }
}
