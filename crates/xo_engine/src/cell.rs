//! Cell enum for the 3x3 grid, indexed 1-9 in row-major order.

use crate::error::CellError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A playable cell on the board.
///
/// ```text
///   1 | 2 | 3
///   4 | 5 | 6
///   7 | 8 | 9
/// ```
///
/// The discriminant is the cell index, which is also the bit offset of the
/// cell inside every occupancy field of the state word.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft = 1,
    /// Top-center (cell 2)
    TopCenter = 2,
    /// Top-right (cell 3)
    TopRight = 3,
    /// Middle-left (cell 4)
    MiddleLeft = 4,
    /// Center (cell 5)
    Center = 5,
    /// Middle-right (cell 6)
    MiddleRight = 6,
    /// Bottom-left (cell 7)
    BottomLeft = 7,
    /// Bottom-center (cell 8)
    BottomCenter = 8,
    /// Bottom-right (cell 9)
    BottomRight = 9,
}

impl Cell {
    /// All 9 cells in ascending index order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Cell index (1-9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Single-bit mask of this cell in a canonical 9-bit occupancy view
    /// (bit `i` for cell `i`).
    pub const fn mask(self) -> u32 {
        1u32 << self.index()
    }

    /// Creates a cell from its index (1-9).
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Cell::TopLeft),
            2 => Some(Cell::TopCenter),
            3 => Some(Cell::TopRight),
            4 => Some(Cell::MiddleLeft),
            5 => Some(Cell::Center),
            6 => Some(Cell::MiddleRight),
            7 => Some(Cell::BottomLeft),
            8 => Some(Cell::BottomCenter),
            9 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Row of the cell (0-2).
    pub const fn row(self) -> u8 {
        (self.index() - 1) / 3
    }

    /// Column of the cell (0-2).
    pub const fn col(self) -> u8 {
        (self.index() - 1) % 3
    }

    /// Get label for this cell (for display).
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Parse from label or number (1-9).
    ///
    /// Labels match case-insensitively on the full label only, so
    /// "center" is never mistaken for "top-center".
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Result<Cell, CellError> {
        let trimmed = s.trim();
        if let Ok(num) = trimmed.parse::<i64>() {
            return Cell::try_from(num);
        }

        Cell::iter()
            .find(|cell| cell.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CellError::Unrecognized(trimmed.to_string()))
    }
}

impl TryFrom<i64> for Cell {
    type Error = CellError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .ok()
            .and_then(Cell::from_index)
            .ok_or(CellError::OutOfRange(index))
    }
}

impl TryFrom<u8> for Cell {
    type Error = CellError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Cell::from_index(index).ok_or(CellError::OutOfRange(i64::from(index)))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.index(), self.label())
    }
}
