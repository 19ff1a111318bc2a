//! Turn consistency invariant: the player ahead on cells is never the one to move.

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;
use std::cmp::Ordering;

/// Invariant: parity agrees with the piece counts.
///
/// When one player holds more cells it is the other player's turn. Equal
/// counts allow either parity, since order swap lets X open a session.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let o = state.occupancy(Player::O).count_ones();
        let x = state.occupancy(Player::X).count_ones();
        match o.cmp(&x) {
            Ordering::Greater => state.to_move() == Player::X,
            Ordering::Less => state.to_move() == Player::O,
            Ordering::Equal => true,
        }
    }

    fn description() -> &'static str {
        "The player holding more cells is not the one to move"
    }
}
