//! Error types for the engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// A cell index or label that does not name one of the nine cells.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CellError {
    /// Numeric index outside 1-9.
    #[display("Cell index {_0} is out of range (must be 1-9)")]
    OutOfRange(#[error(not(source))] i64),

    /// Input that is neither a number nor a cell label.
    #[display("Unrecognized cell: {_0:?}")]
    Unrecognized(#[error(not(source))] String),
}

/// An externally supplied state word that breaks the layout invariants.
#[derive(Debug, Clone, Display, Error)]
#[display(
    "Malformed state word {word:#010x}: {} at {}:{}",
    violations.join("; "),
    file,
    line
)]
pub struct MalformedStateError {
    /// The rejected raw word.
    pub word: u32,
    /// Descriptions of every violated invariant.
    pub violations: Vec<String>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MalformedStateError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(violations))]
    pub fn new(word: u32, violations: Vec<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            word,
            violations,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
