//! Undecided invariant: a stored word never describes a finished game.

use super::Invariant;
use crate::rules::{completed_line, is_full};
use crate::state::GameState;
use crate::types::Player;

/// Invariant: no player holds a completed line and the board is not full.
///
/// A winning or filling move stops the session and resets the occupancy,
/// so a word still holding a decided board can only come from outside.
pub struct UndecidedInvariant;

impl Invariant<GameState> for UndecidedInvariant {
    fn holds(state: &GameState) -> bool {
        completed_line(state.occupancy(Player::O)).is_none()
            && completed_line(state.occupancy(Player::X)).is_none()
            && !is_full(state.board())
    }

    fn description() -> &'static str {
        "No player holds a completed line and the board is not full"
    }
}
