//! Board module - manages the game grid
//!
//! The board is a `width`×`height` grid where each cell is empty or filled with
//! a piece kind. Storage is a flat row-major array (`y * width + x`), sized once
//! at construction and never resized: a different size means a new board.
//!
//! Coordinates: `x` ranges `0..width` (left to right), `y` ranges `0..height`
//! (top to bottom). Any access outside that rectangle is reported as a
//! [`BoardError`]; callers are expected to check [`Board::contains`] first.

use crate::error::{BoardError, ConfigError};
use crate::types::*;

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board; both dimensions must be within their bounds
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        ConfigError::check_range("width", width, MINIMUM_WIDTH, MAXIMUM_WIDTH)?;
        ConfigError::check_range("height", height, MINIMUM_HEIGHT, MAXIMUM_HEIGHT)?;
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Flat index of an in-bounds position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    fn out_of_bounds(&self, pos: Position) -> BoardError {
        BoardError::OutOfBounds {
            x: pos.x,
            y: pos.y,
            width: self.width,
            height: self.height,
        }
    }

    fn row_range(&self, y: u8) -> Result<std::ops::Range<usize>, BoardError> {
        if y >= self.height {
            return Err(BoardError::RowOutOfBounds {
                y,
                height: self.height,
            });
        }
        let start = y as usize * self.width as usize;
        Ok(start..start + self.width as usize)
    }

    /// Whether the position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Cell at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Whether the cell at `pos` is filled
    pub fn is_occupied(&self, pos: Position) -> Result<bool, BoardError> {
        match self.index(pos) {
            Some(idx) => Ok(self.cells[idx].is_some()),
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Whether `pos` is on the board and empty
    pub fn is_free(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Write one cell
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> Result<(), BoardError> {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                Ok(())
            }
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Write the same value to several cells
    ///
    /// All positions are checked before anything is written, so an error leaves
    /// the board untouched.
    pub fn paint(&mut self, positions: &[Position], cell: Cell) -> Result<(), BoardError> {
        if let Some(&bad) = positions.iter().find(|&&p| !self.contains(p)) {
            return Err(self.out_of_bounds(bad));
        }
        for &pos in positions {
            self.set_cell(pos, cell)?;
        }
        Ok(())
    }

    /// Classify row `y`
    ///
    /// The first cell sets a tentative Empty/Full verdict; the scan stops at the
    /// first cell that disagrees, since the row is Mixed from then on.
    pub fn scan_row(&self, y: u8) -> Result<LineState, BoardError> {
        let range = self.row_range(y)?;
        let mut row = self.cells[range].iter();

        let filled = match row.next() {
            Some(cell) => cell.is_some(),
            None => return Ok(LineState::Empty),
        };
        if row.any(|cell| cell.is_some() != filled) {
            return Ok(LineState::Mixed);
        }

        Ok(if filled {
            LineState::Full
        } else {
            LineState::Empty
        })
    }

    /// Remove full rows around a landing and let the rows above fall
    ///
    /// `top` is the landed piece's topmost row. Rows below the piece cannot have
    /// been full before it landed, so the lowest full row is searched for from the
    /// floor up to `top`. From there the scan climbs: full rows are cleared and
    /// counted, and the scan ends at the first empty row or the top of the
    /// board. Every surviving row above the lowest cleared row then moves down by
    /// the number of cleared rows beneath it, keeping its order, and the vacated
    /// top rows are emptied.
    ///
    /// Returns the number of cleared rows.
    pub fn clear_and_compact(&mut self, top: u8) -> Result<u32, BoardError> {
        self.row_range(top)?;

        let mut lowest_full = None;
        for y in (top..self.height).rev() {
            if self.scan_row(y)? == LineState::Full {
                lowest_full = Some(y);
                break;
            }
        }
        let Some(start) = lowest_full else {
            return Ok(0);
        };

        let width = self.width as usize;
        let mut cleared: u32 = 0;
        let mut scanning = true;
        // Destination of the next surviving row; always `cleared` rows below `read`.
        let mut write = start as usize;

        for read in (0..=start as usize).rev() {
            if scanning {
                match self.scan_row(read as u8)? {
                    LineState::Full => {
                        cleared += 1;
                        continue;
                    }
                    LineState::Empty => scanning = false,
                    LineState::Mixed => {}
                }
            }
            if write != read {
                // copy_within handles the overlap of adjacent rows.
                self.cells
                    .copy_within(read * width..(read + 1) * width, write * width);
            }
            write -= 1;
        }

        self.cells[..cleared as usize * width].fill(None);
        Ok(cleared)
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, y: u8) -> Result<&[Cell], BoardError> {
        let range = self.row_range(y)?;
        Ok(&self.cells[range])
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty the whole board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Board from ASCII rows: `.` is empty, anything else is filled (as `I`)
    #[cfg(test)]
    pub fn from_ascii(rows: &[&str]) -> Self {
        let width = rows[0].len() as u8;
        let mut board = Self::new(width, rows.len() as u8).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    board
                        .set_cell(Position::new(x as u8, y as u8), Some(PieceKind::I))
                        .unwrap();
                }
            }
        }
        board
    }

    /// Inverse of `from_ascii` (kinds collapse to `#`)
    #[cfg(test)]
    pub fn to_ascii(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                self.row(y)
                    .unwrap()
                    .iter()
                    .map(|c| if c.is_some() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![None; DEFAULT_WIDTH as usize * DEFAULT_HEIGHT as usize],
        }
    }
}
