//! Raw state word parsing and state files.
//!
//! A state file holds one word as text, decimal or `0x` hex, optionally
//! followed by whitespace. The engine validates the word when it is loaded.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::{debug, info, instrument};

/// State word text or file that could not be used.
#[derive(Debug, Clone, Display, Error)]
#[display("State persistence error: {} at {}:{}", message, file, line)]
pub struct PersistenceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PersistenceError {
    /// Creates a new persistence error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a state word written in decimal or `0x`/`0b` notation.
#[instrument]
pub fn parse_state_word(text: &str) -> Result<u32, PersistenceError> {
    let text = text.trim().replace('_', "");
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b") {
        u32::from_str_radix(bin, 2)
    } else {
        text.parse::<u32>()
    };
    parsed.map_err(|e| PersistenceError::new(format!("Invalid state word {:?}: {}", text, e)))
}

/// Reads a state word from a file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_state_file(path: impl AsRef<Path>) -> Result<u32, PersistenceError> {
    debug!("Reading state file");
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| PersistenceError::new(format!("Failed to read state file: {}", e)))?;
    parse_state_word(&content)
}

/// Writes a state word to a file as `0x`-prefixed hex.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn write_state_file(path: impl AsRef<Path>, word: u32) -> Result<(), PersistenceError> {
    std::fs::write(path.as_ref(), format!("{:#010x}\n", word))
        .map_err(|e| PersistenceError::new(format!("Failed to write state file: {}", e)))?;
    info!(word, "State saved");
    Ok(())
}
