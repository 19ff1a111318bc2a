//! Board and notification formatting.

use std::sync::{Arc, Mutex, PoisonError};
use xo_engine::{Cell, EngineObserver, Outcome, Player, XoEngine};

/// Lines reported by observers and commands, drained by the caller.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push(&self, line: impl Into<String>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.into());
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Engine observer writing each notification into a [`Transcript`].
#[derive(Debug, Clone)]
pub struct TranscriptObserver {
    transcript: Transcript,
}

impl TranscriptObserver {
    /// Creates an observer writing to `transcript`.
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }
}

impl EngineObserver for TranscriptObserver {
    fn on_valid_move(&mut self, cell: Cell) {
        self.transcript.push(format!("Valid move: {}", cell.index()));
    }

    fn on_invalid_move(&mut self, cell: Cell) {
        self.transcript.push(format!("Invalid move: {}", cell.index()));
    }

    fn on_session_inactive(&mut self) {
        self.transcript.push("Game stopped!");
    }

    fn on_victory(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(player) => self.transcript.push(format!("The winner is: {}!", player)),
            Outcome::Draw => self.transcript.push("The game is a draw!"),
        }
    }
}

/// Formats the board, empty cells showing their number.
pub fn render_board(engine: &XoEngine) -> String {
    let mut result = String::new();
    for (i, cell) in Cell::ALL.iter().enumerate() {
        let symbol = match engine.occupant(*cell) {
            Some(Player::X) => "X".to_string(),
            Some(Player::O) => "O".to_string(),
            None => cell.index().to_string(),
        };
        result.push_str(&symbol);
        if cell.col() < 2 {
            result.push('|');
        } else if i < 8 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}
