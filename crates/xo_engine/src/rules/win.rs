//! Win detection via precomputed line masks.

use crate::cell::Cell;
use tracing::instrument;

/// The eight lines of the grid: rows, columns, diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

const fn line_mask(line: [Cell; 3]) -> u32 {
    line[0].mask() | line[1].mask() | line[2].mask()
}

/// [`LINES`] as masks over the canonical view.
pub const LINE_MASKS: [u32; 8] = {
    let mut masks = [0u32; 8];
    let mut i = 0;
    while i < LINES.len() {
        masks[i] = line_mask(LINES[i]);
        i += 1;
    }
    masks
};

/// Returns the first line fully contained in `occupancy`, if any.
#[instrument]
pub fn completed_line(occupancy: u32) -> Option<[Cell; 3]> {
    LINE_MASKS
        .iter()
        .position(|&mask| occupancy & mask == mask)
        .map(|i| LINES[i])
}
