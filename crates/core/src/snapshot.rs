//! Read-only copies of the observable game state
//!
//! Observers are told *that* something changed, never *what*. They re-read the
//! whole state through a [`GameSnapshot`], which owns its data and can be
//! refilled in place to reuse its allocations.

use crate::board::Board;
use crate::piece::Piece;
use crate::player::Player;
use crate::types::{Cell, GameStatus, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub origin: Position,
    pub cells: Vec<Position>,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            origin: value.origin(),
            cells: value.occupied_cells().into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerSnapshot {
    pub name: String,
    pub score: u32,
    pub lines_cleared: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(value: &Player) -> Self {
        Self {
            name: value.name().to_string(),
            score: value.score(),
            lines_cleared: value.lines_cleared(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major board cells, the active piece included
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub player: PlayerSnapshot,
    pub status: GameStatus,
    pub timer_ms: u32,
    pub level: u32,
}

impl GameSnapshot {
    /// Copy a board into this snapshot, reusing the cell buffer
    pub fn write_board(&mut self, board: &Board) {
        self.width = board.width();
        self.height = board.height();
        self.cells.clear();
        self.cells.extend_from_slice(board.cells());
    }

    /// Cell at `(x, y)`, `None` outside the snapshot
    pub fn cell(&self, x: u8, y: u8) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Rows of color codes (0 = empty), top row first
    pub fn color_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| {
                row.iter()
                    .map(|c| c.map(|k| k.color_code()).unwrap_or(0))
                    .collect()
            })
            .collect()
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_board_copies_cells() {
        let mut board = Board::default();
        board
            .set_cell(Position::new(2, 19), Some(PieceKind::S))
            .unwrap();

        let mut snap = GameSnapshot::default();
        snap.write_board(&board);
        assert_eq!(snap.cell(2, 19), Some(Some(PieceKind::S)));
        assert_eq!(snap.cell(3, 19), Some(None));
        assert_eq!(snap.cell(10, 0), None);

        let rows = snap.color_rows();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[19][2], PieceKind::S.color_code());
    }

    #[test]
    fn test_default_snapshot_is_not_playable() {
        assert!(!GameSnapshot::default().playable());
    }
}
