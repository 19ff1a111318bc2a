//! Full-board detection.

use crate::state::CELLS_MASK;
use tracing::instrument;

/// Checks if the board occupancy covers all nine cells.
///
/// A full board with no completed line indicates a draw.
#[instrument]
pub fn is_full(board: u32) -> bool {
    board & CELLS_MASK == CELLS_MASK
}

#[cfg(test)]
mod tests {
    use super::super::win::completed_line;
    use super::*;
    use crate::Cell;

    fn is_draw(x: u32, o: u32) -> bool {
        is_full(x | o) && completed_line(x).is_none() && completed_line(o).is_none()
    }

    fn mask(cells: &[Cell]) -> u32 {
        cells.iter().fold(0u32, |acc, c| acc | c.mask())
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(0));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(CELLS_MASK & !Cell::Center.mask()));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(CELLS_MASK));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let x = mask(&[
            Cell::TopLeft,
            Cell::TopRight,
            Cell::Center,
            Cell::MiddleRight,
            Cell::BottomCenter,
        ]);
        let o = mask(&[
            Cell::TopCenter,
            Cell::MiddleLeft,
            Cell::BottomLeft,
            Cell::BottomRight,
        ]);
        assert!(is_draw(x, o));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let x = mask(&[Cell::TopLeft, Cell::TopCenter, Cell::TopRight, Cell::BottomLeft, Cell::Center]);
        let o = CELLS_MASK & !x;
        assert!(!is_draw(x, o));
    }
}
