//! Core domain types for the engine.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Which of the two moves first is decided by the turn-parity bit, not by
/// the player itself: a cleared parity bit means O is next.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player (moves on even parity).
    O,
    /// Second player (moves on odd parity).
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Maps a turn-parity bit to the player it designates.
    pub fn from_parity(parity: bool) -> Self {
        if parity { Player::X } else { Player::O }
    }

    /// The parity bit value under which this player moves.
    pub fn parity(self) -> bool {
        matches!(self, Player::X)
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{_0} wins")]
    Winner(Player),
    /// The board filled up without a completed line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}
