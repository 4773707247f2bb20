//! Shape geometry - rotation tables for every piece kind
//!
//! Each shape lives inside an N×N bounding square (N ∈ {2, 3, 4} for the
//! canonical kinds) and carries a table of orientations. Rotation simply walks
//! that table; there are no wall kicks, a rotation either fits in place or it
//! does not.
//!
//! Offsets are `(x, y)` inside the square, `y` growing downward.

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::types::{PieceKind, Position, MAX_SIDE, MAX_SHAPE_CELLS};

/// The cells covered by one orientation
pub type CellSet = ArrayVec<Position, MAX_SHAPE_CELLS>;

type Orientation = [(u8, u8); 4];

/// I piece: horizontal on row 1, vertical on column 2, horizontal on row 2, vertical on column 1
const I_TABLE: [Orientation; 4] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

/// O piece fills its whole 2x2 square, so one orientation is enough
const O_TABLE: [Orientation; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_TABLE: [Orientation; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_TABLE: [Orientation; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_TABLE: [Orientation; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_TABLE: [Orientation; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_TABLE: [Orientation; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// A piece kind together with its bounding square and orientation table
///
/// Cloning is cheap: the table is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    side: u8,
    rotations: Arc<[CellSet]>,
}

impl Shape {
    /// Shape of a canonical kind; `None` for `PieceKind::Custom`
    pub fn canonical(kind: PieceKind) -> Option<Self> {
        let (side, table): (u8, &[Orientation]) = match kind {
            PieceKind::I => (4, &I_TABLE),
            PieceKind::O => (2, &O_TABLE),
            PieceKind::T => (3, &T_TABLE),
            PieceKind::S => (3, &S_TABLE),
            PieceKind::Z => (3, &Z_TABLE),
            PieceKind::J => (3, &J_TABLE),
            PieceKind::L => (3, &L_TABLE),
            PieceKind::Custom(_) => return None,
        };

        let rotations = table
            .iter()
            .map(|orientation| {
                orientation
                    .iter()
                    .map(|&(x, y)| Position::new(x, y))
                    .collect::<CellSet>()
            })
            .collect();

        Some(Self {
            kind,
            side,
            rotations,
        })
    }

    /// All seven canonical shapes, in `PieceKind::CANONICAL` order
    pub fn canonical_set() -> Vec<Self> {
        PieceKind::CANONICAL
            .iter()
            .filter_map(|&kind| Self::canonical(kind))
            .collect()
    }

    /// Build a caller-supplied shape
    ///
    /// `cells` are offsets inside a `side`×`side` square. The orientation table
    /// is derived by rotating the cells 90° clockwise inside the square until
    /// the first orientation comes back, so symmetric shapes get shorter tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use bric_tetris_core::Shape;
    /// use bric_tetris_types::Position;
    ///
    /// // A domino along the top edge of a 2x2 square visits all four edges.
    /// let domino = Shape::custom(0, 2, &[Position::new(0, 0), Position::new(1, 0)]).unwrap();
    /// assert_eq!(domino.rotation_count(), 4);
    ///
    /// // A single centered cell in a 1x1 square never changes.
    /// let dot = Shape::custom(1, 1, &[Position::new(0, 0)]).unwrap();
    /// assert_eq!(dot.rotation_count(), 1);
    /// ```
    pub fn custom(id: u8, side: u8, cells: &[Position]) -> Result<Self, ConfigError> {
        if side == 0 || side > MAX_SIDE {
            return Err(ConfigError::InvalidShape {
                reason: format!("side {} is not between 1 and {}", side, MAX_SIDE),
            });
        }
        if cells.is_empty() {
            return Err(ConfigError::InvalidShape {
                reason: "a shape needs at least one cell".to_string(),
            });
        }

        let mut first = CellSet::new();
        for &cell in cells {
            if cell.x >= side || cell.y >= side {
                return Err(ConfigError::InvalidShape {
                    reason: format!(
                        "cell ({}, {}) lies outside its {}x{} square",
                        cell.x, cell.y, side, side
                    ),
                });
            }
            if first.contains(&cell) {
                return Err(ConfigError::InvalidShape {
                    reason: format!("cell ({}, {}) is listed twice", cell.x, cell.y),
                });
            }
            // In-square and distinct, so at most side² cells ever get here.
            first.push(cell);
        }
        first.sort();

        let mut rotations = vec![first.clone()];
        let mut current = rotate_cw(&first, side);
        while current != first && rotations.len() < 4 {
            rotations.push(current.clone());
            current = rotate_cw(&current, side);
        }

        Ok(Self {
            kind: PieceKind::Custom(id),
            side,
            rotations: rotations.into(),
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side of the bounding square
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Length of the orientation table (1 for shapes that never change)
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Offsets of one orientation; the index wraps around the table
    pub fn cells(&self, rotation: usize) -> &CellSet {
        &self.rotations[rotation % self.rotations.len()]
    }
}

/// Rotate a cell set 90° clockwise inside a `side`×`side` square (sorted output)
fn rotate_cw(cells: &CellSet, side: u8) -> CellSet {
    let mut out: CellSet = cells
        .iter()
        .map(|p| Position::new(side - 1 - p.y, p.x))
        .collect();
    out.sort();
    out
}
