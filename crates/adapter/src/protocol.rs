//! Protocol module - JSON line messages for the headless session
//!
//! Inbound lines are [`CommandMessage`]s, tagged by `type`. Outbound lines are
//! [`StateMessage`]s (a full copy of the observable state after every change)
//! and [`ErrorMessage`]s for commands that could not be applied. Every
//! outbound message carries a `seq` that grows by one per line.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig, GameSnapshot, Shape};
use crate::runtime::{Command, Inbound};
use crate::types::{Direction, PieceKind, Position};

// ============== Client -> Session Messages ==============

/// One inbound line
///
/// ```text
/// {"type":"start","name":"ada","level":2}
/// {"type":"move","direction":"left"}
/// {"type":"rotate"}
/// {"type":"drop"}
/// {"type":"set_bag","shapes":["i","o",{"id":0,"side":1,"cells":[[0,0]]}],"keep_default":false}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandMessage {
    Start(StartParams),
    Move {
        direction: String,
    },
    Rotate,
    Drop,
    SetBag {
        shapes: Vec<ShapeSpec>,
        #[serde(default)]
        keep_default: bool,
    },
}

/// Overrides for the session's default game parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

impl StartParams {
    pub fn apply_to(self, defaults: &GameConfig) -> GameConfig {
        GameConfig {
            name: self.name.unwrap_or_else(|| defaults.name.clone()),
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            win_score: self.win_score.unwrap_or(defaults.win_score),
            win_lines: self.win_lines.unwrap_or(defaults.win_lines),
            win_time_ms: self.win_time_ms.unwrap_or(defaults.win_time_ms),
            level: self.level.unwrap_or(defaults.level),
        }
    }
}

/// A canonical kind by name (`"t"`), or a custom shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeSpec {
    Canonical(String),
    Custom {
        id: u8,
        side: u8,
        /// `[x, y]` offsets inside the `side`x`side` square
        cells: Vec<[u8; 2]>,
    },
}

impl ShapeSpec {
    pub fn to_shape(&self) -> Result<Shape, ConfigError> {
        match self {
            ShapeSpec::Canonical(name) => PieceKind::from_str(name)
                .and_then(Shape::canonical)
                .ok_or_else(|| ConfigError::InvalidShape {
                    reason: format!("unknown piece kind '{}'", name),
                }),
            ShapeSpec::Custom { id, side, cells } => {
                let cells: Vec<Position> =
                    cells.iter().map(|&[x, y]| Position::new(x, y)).collect();
                Shape::custom(*id, *side, &cells)
            }
        }
    }
}

impl CommandMessage {
    /// Turn a parsed line into an engine command
    ///
    /// `defaults` fills the fields a `start` message leaves out.
    pub fn into_command(self, defaults: &GameConfig) -> Result<Command, (ErrorCode, String)> {
        match self {
            CommandMessage::Start(params) => Ok(Command::Start(params.apply_to(defaults))),
            CommandMessage::Move { direction } => Direction::from_str(&direction)
                .map(Command::Move)
                .ok_or_else(|| {
                    (
                        ErrorCode::InvalidCommand,
                        format!("unknown direction '{}'", direction),
                    )
                }),
            CommandMessage::Rotate => Ok(Command::Rotate),
            CommandMessage::Drop => Ok(Command::Drop),
            CommandMessage::SetBag {
                shapes,
                keep_default,
            } => {
                let shapes = shapes
                    .iter()
                    .map(ShapeSpec::to_shape)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| (ErrorCode::InvalidShape, e.to_string()))?;
                Ok(Command::SetBag {
                    shapes,
                    keep_default,
                })
            }
        }
    }
}

/// Parse one inbound line
pub fn parse_command(line: &str) -> Result<CommandMessage, serde_json::Error> {
    serde_json::from_str(line.trim())
}

/// Parse and convert one inbound line, turning failures into a rejection
pub fn decode_line(line: &str, defaults: &GameConfig) -> Inbound {
    match parse_command(line) {
        Ok(msg) => match msg.into_command(defaults) {
            Ok(command) => Inbound::Command(command),
            Err((code, message)) => Inbound::Invalid { code, message },
        },
        Err(e) => Inbound::Invalid {
            code: ErrorCode::InvalidJson,
            message: e.to_string(),
        },
    }
}

// ============== Session -> Client Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateType {
    #[serde(rename = "state")]
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "invalid_json")]
    InvalidJson,
    #[serde(rename = "invalid_command")]
    InvalidCommand,
    #[serde(rename = "invalid_shape")]
    InvalidShape,
    #[serde(rename = "invalid_config")]
    InvalidConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub code: ErrorCode,
    pub message: String,
}

pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        code,
        message: message.to_string(),
    }
}

/// Full observable state, sent after every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMessage {
    #[serde(rename = "type")]
    pub msg_type: StateType,
    pub seq: u64,
    /// "none", "on", "lost", "score", "line" or "time"
    pub status: String,
    pub playable: bool,
    pub board: BoardMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActiveMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub player: PlayerMessage,
    pub timer_ms: u32,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMessage {
    pub width: u8,
    pub height: u8,
    /// Top row first; 0 = empty, otherwise the kind's color code
    pub rows: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMessage {
    pub kind: String,
    pub rotation: usize,
    pub x: u8,
    pub y: u8,
    pub cells: Vec<[u8; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMessage {
    pub name: String,
    pub score: u32,
    pub lines: u32,
}

/// Wire name of a kind; custom kinds carry their id (`"custom3"`)
pub fn kind_name(kind: PieceKind) -> String {
    match kind {
        PieceKind::Custom(id) => format!("custom{}", id),
        other => other.as_str().to_string(),
    }
}

impl StateMessage {
    pub fn from_snapshot(seq: u64, snap: &GameSnapshot) -> Self {
        Self {
            msg_type: StateType::State,
            seq,
            status: snap.status.as_str().to_string(),
            playable: snap.playable(),
            board: BoardMessage {
                width: snap.width,
                height: snap.height,
                rows: snap.color_rows(),
            },
            active: snap.active.as_ref().map(|a| ActiveMessage {
                kind: kind_name(a.kind),
                rotation: a.rotation,
                x: a.origin.x,
                y: a.origin.y,
                cells: a.cells.iter().map(|p| [p.x, p.y]).collect(),
            }),
            next: snap.next.map(kind_name),
            player: PlayerMessage {
                name: snap.player.name.clone(),
                score: snap.player.score,
                lines: snap.player.lines_cleared,
            },
            timer_ms: snap.timer_ms,
            level: snap.level,
        }
    }
}
