//! Piece module - the active (or candidate) falling piece
//!
//! A piece is a shape, an index into its orientation table and a board-relative
//! origin (the top-left corner of its bounding square). Its occupied cells are
//! derived on demand and never stored; the board stays the only record of
//! occupancy.
//!
//! Moving and rotating a piece never consults a board. Whether the result is a
//! legal board state is decided by the engine on a candidate copy.

use crate::shapes::{CellSet, Shape};
use crate::types::{Direction, PieceKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    rotation: usize,
    origin: Position,
}

impl Piece {
    /// A piece in its first orientation with its square at the board origin
    pub fn new(shape: Shape) -> Self {
        Self::at(shape, Position::default())
    }

    pub fn at(shape: Shape, origin: Position) -> Self {
        Self {
            shape,
            rotation: 0,
            origin,
        }
    }

    /// A fresh piece on row 0, horizontally centered on a board of `width` columns
    pub fn spawn(shape: Shape, width: u8) -> Self {
        let x = width.saturating_sub(shape.side()) / 2;
        Self::at(shape, Position::new(x, 0))
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn side(&self) -> u8 {
        self.shape.side()
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Absolute board cells covered in the current orientation
    pub fn occupied_cells(&self) -> CellSet {
        self.shape
            .cells(self.rotation)
            .iter()
            .map(|&offset| self.origin.offset(offset))
            .collect()
    }

    /// Translate one cell; no legality check
    pub fn translate(&mut self, dir: Direction) {
        self.origin = self.origin.moved(dir);
    }

    /// Advance to the next orientation (no-op for one-entry tables)
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.shape.rotation_count();
    }

    /// Copy of this piece translated one cell
    pub fn translated(&self, dir: Direction) -> Self {
        let mut candidate = self.clone();
        candidate.translate(dir);
        candidate
    }

    /// Copy of this piece in its next orientation
    pub fn rotated(&self) -> Self {
        let mut candidate = self.clone();
        candidate.rotate();
        candidate
    }

    /// Whether `pos` is one of this piece's own cells
    pub fn contains(&self, pos: Position) -> bool {
        self.shape
            .cells(self.rotation)
            .iter()
            .any(|&offset| self.origin.offset(offset) == pos)
    }

    /// Smallest row index among the occupied cells
    pub fn topmost_row(&self) -> u8 {
        self.occupied_cells()
            .iter()
            .map(|p| p.y)
            .min()
            .unwrap_or(self.origin.y)
    }
}
