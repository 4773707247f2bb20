//! Scoring module - points awarded per landing
//!
//! A landing earns line-clear points plus a hard-drop bonus:
//!
//! ```text
//! score_for_landing(drops, lines) = line_score(lines) + 2 * drops
//! ```
//!
//! `line_score` follows the classic table (40 / 100 / 300 / 1200), so clearing
//! several lines at once is worth more than clearing them one by one. Custom
//! shapes are at most 4 cells tall and cannot clear more than four lines.

use crate::types::{DROP_CELL_SCORE, LINE_SCORES};

/// Points for clearing `lines` rows in one landing
pub fn calculate_line_score(lines: u32) -> u32 {
    let capped = lines.min(4) as usize;
    LINE_SCORES[capped].saturating_mul((lines / 4).max(1))
}

/// Points for a hard drop that travelled `cells` rows
pub fn calculate_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(DROP_CELL_SCORE)
}

/// Total points for one landing
pub fn score_for_landing(drops: u32, lines: u32) -> u32 {
    calculate_line_score(lines).saturating_add(calculate_drop_score(drops))
}
