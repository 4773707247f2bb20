//! Error types for the rule primitives
//!
//! Two families:
//! - [`ConfigError`]: a caller handed in something outside its accepted range.
//!   Reported synchronously; nothing is applied.
//! - [`BoardError`]: a coordinate outside the grid reached the board. This is a
//!   geometry bug, not user error, and the engine treats it as fatal.

use thiserror::Error;

/// Rejected configuration or piece-supply argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {value} is not between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("invalid player name: must not be empty")]
    EmptyName,

    #[error("invalid bag: at least one shape is required")]
    EmptyBag,

    #[error("invalid shape: {reason}")]
    InvalidShape { reason: String },
}

impl ConfigError {
    /// Check `value` against the closed range `[min, max]`
    pub fn check_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<T, ConfigError>
    where
        T: Into<u64> + PartialOrd + Copy,
    {
        if value < min || value > max {
            return Err(ConfigError::OutOfRange {
                field,
                value: value.into(),
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(value)
    }
}

/// Out-of-grid access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds { x: u8, y: u8, width: u8, height: u8 },

    #[error("row {y} is outside the {height}-row board")]
    RowOutOfBounds { y: u8, height: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_error_names_field_value_and_bounds() {
        let err = ConfigError::check_range("width", 3u8, 5, 30).unwrap_err();
        assert_eq!(err.to_string(), "invalid width: 3 is not between 5 and 30");
    }

    #[test]
    fn range_accepts_both_ends() {
        assert_eq!(ConfigError::check_range("lines", 1u32, 1, 9), Ok(1));
        assert_eq!(ConfigError::check_range("lines", 9u32, 1, 9), Ok(9));
    }

    #[test]
    fn board_error_message() {
        let err = BoardError::OutOfBounds {
            x: 10,
            y: 2,
            width: 10,
            height: 20,
        };
        assert_eq!(err.to_string(), "cell (10, 2) is outside the 10x20 board");
    }
}
