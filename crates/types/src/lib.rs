//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no external dependencies, so they can be
//! shared by the rule primitives, the engine and any host driving it.
//!
//! # Coordinates
//!
//! Cells are addressed by [`Position`] with `x` growing to the right and `y`
//! growing downward: row 0 is the spawn row, row `height - 1` is the floor.
//! Coordinates are unsigned; translations wrap, so a cell pushed left of
//! column 0 lands far outside any legal board instead of going negative.
//!
//! # Bounds
//!
//! | Parameter | Min | Max | Default |
//! |-----------|-----|-----|---------|
//! | width | 5 | 30 | 10 |
//! | height | 10 | 40 | 20 |
//! | win score | 100 | 1 000 000 | 1 000 |
//! | win lines | 1 | 999 | 10 |
//! | win time (ms) | 10 000 | 3 600 000 | 300 000 |
//!
//! # Timer
//!
//! The timer is the delay between two automatic descents. It starts at
//! [`MAXIMUM_TIMER`] and every level step removes [`TIMER_STEP`] until
//! [`MINIMUM_TIMER`] is reached.
//!
//! # Examples
//!
//! ```
//! use bric_tetris_types::{Direction, PieceKind, Position};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let pos = Position::new(3, 0).moved(Direction::Down);
//! assert_eq!(pos, Position::new(3, 1));
//! ```

/// Smallest accepted board width
pub const MINIMUM_WIDTH: u8 = 5;
/// Largest accepted board width
pub const MAXIMUM_WIDTH: u8 = 30;
/// Default board width (10 columns)
pub const DEFAULT_WIDTH: u8 = 10;

/// Smallest accepted board height
pub const MINIMUM_HEIGHT: u8 = 10;
/// Largest accepted board height
pub const MAXIMUM_HEIGHT: u8 = 40;
/// Default board height (20 rows)
pub const DEFAULT_HEIGHT: u8 = 20;

pub const MINIMUM_WIN_SCORE: u32 = 100;
pub const MAXIMUM_WIN_SCORE: u32 = 1_000_000;
pub const DEFAULT_WIN_SCORE: u32 = 1_000;

pub const MINIMUM_WIN_LINES: u32 = 1;
pub const MAXIMUM_WIN_LINES: u32 = 999;
pub const DEFAULT_WIN_LINES: u32 = 10;

/// Win-time bounds in milliseconds
pub const MINIMUM_WIN_TIME_MS: u64 = 10_000;
pub const MAXIMUM_WIN_TIME_MS: u64 = 3_600_000;
pub const DEFAULT_WIN_TIME_MS: u64 = 300_000;

/// Fastest automatic descent interval (500ms)
pub const MINIMUM_TIMER: u32 = 500;

/// Starting automatic descent interval (2000ms)
pub const MAXIMUM_TIMER: u32 = 2_000;

/// Amount removed from the timer by one level step
pub const TIMER_STEP: u32 = 200;

/// Largest bounding-square side a shape may declare
pub const MAX_SIDE: u8 = 4;

/// Largest number of cells a shape may occupy (a full 4x4 square)
pub const MAX_SHAPE_CELLS: usize = (MAX_SIDE as usize) * (MAX_SIDE as usize);

/// Line clear scoring table
///
/// Base points for clearing N lines in one landing:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per cell travelled during a hard drop
pub const DROP_CELL_SCORE: u32 = 2;

/// A cell coordinate on the board, or an offset inside a shape's bounding square
///
/// Ordered by `x` then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Translate by another position (component-wise, wrapping)
    pub fn offset(self, by: Position) -> Self {
        Self {
            x: self.x.wrapping_add(by.x),
            y: self.y.wrapping_add(by.y),
        }
    }

    /// Translate one cell in the given direction (wrapping)
    ///
    /// # Examples
    ///
    /// ```
    /// use bric_tetris_types::{Direction, Position};
    ///
    /// let left = Position::new(0, 4).moved(Direction::Left);
    /// assert_eq!(left.x, u8::MAX);
    /// assert_eq!(left.moved(Direction::Right), Position::new(0, 4));
    /// ```
    pub fn moved(self, dir: Direction) -> Self {
        match dir {
            Direction::Left => Self::new(self.x.wrapping_sub(1), self.y),
            Direction::Right => Self::new(self.x.wrapping_add(1), self.y),
            Direction::Down => Self::new(self.x, self.y.wrapping_add(1)),
        }
    }
}

/// Directions a piece can be translated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Piece kinds
///
/// The seven canonical kinds each have a fixed bounding square:
/// - **I**: 4x4, four orientations
/// - **O**: 2x2, a single orientation
/// - **T**, **S**, **Z**, **J**, **L**: 3x3, four orientations
///
/// `Custom(id)` tags a caller-supplied shape; the id doubles as its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Custom(u8),
}

impl PieceKind {
    /// The canonical kinds in declaration order
    pub const CANONICAL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse a canonical piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bric_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Custom(_) => "custom",
        }
    }

    /// Small integer color code (0 is reserved for empty cells)
    ///
    /// Canonical kinds map to 1..=7, custom kinds to 8 + id (saturating).
    pub fn color_code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
            PieceKind::Custom(id) => 8u8.saturating_add(*id),
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Classification of a single board row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// No filled cell
    Empty,
    /// Every cell filled
    Full,
    /// Anything else
    Mixed,
}

/// Game state machine
///
/// `NotStarted` → `On` on start; `On` → `On` on every move that does not end
/// the game; the four remaining states are terminal outcomes and only a new
/// start leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Pre-game
    #[default]
    NotStarted,
    /// Active play
    On,
    /// A new piece could not be placed
    Lost,
    /// Score threshold reached
    WonByScore,
    /// Cleared-line threshold reached
    WonByLines,
    /// Elapsed time reached the limit
    TimeUp,
}

impl GameStatus {
    /// Terminal outcomes refuse further piece motion
    pub fn is_over(&self) -> bool {
        matches!(
            self,
            GameStatus::Lost | GameStatus::WonByScore | GameStatus::WonByLines | GameStatus::TimeUp
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "none",
            GameStatus::On => "on",
            GameStatus::Lost => "lost",
            GameStatus::WonByScore => "score",
            GameStatus::WonByLines => "line",
            GameStatus::TimeUp => "time",
        }
    }
}
