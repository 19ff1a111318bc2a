//! Balanced occupancy invariant: players alternate, so counts differ by at most one.

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: the two players' cell counts differ by at most one.
///
/// Either player may start a session once order swap is on, so the
/// difference can go either way.
pub struct BalancedOccupancyInvariant;

impl Invariant<GameState> for BalancedOccupancyInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.occupancy(Player::X).count_ones();
        let o = state.occupancy(Player::O).count_ones();
        x.abs_diff(o) <= 1
    }

    fn description() -> &'static str {
        "Players' cell counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_alternating_moves_hold() {
        let mut state = GameState::EMPTY;
        for (i, cell) in Cell::ALL.iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            state.place(*cell, player);
            assert!(BalancedOccupancyInvariant::holds(&state));
        }
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::EMPTY;
        state.place(Cell::TopLeft, Player::O);
        state.place(Cell::TopCenter, Player::O);
        assert!(!BalancedOccupancyInvariant::holds(&state));
    }
}
