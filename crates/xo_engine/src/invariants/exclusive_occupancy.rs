//! Exclusive occupancy invariant: no cell belongs to both players.

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: the X and O occupancy fields never share a cell.
pub struct ExclusiveOccupancyInvariant;

impl Invariant<GameState> for ExclusiveOccupancyInvariant {
    fn holds(state: &GameState) -> bool {
        state.occupancy(Player::X) & state.occupancy(Player::O) == 0
    }

    fn description() -> &'static str {
        "No cell is occupied by both players"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_empty_state_holds() {
        assert!(ExclusiveOccupancyInvariant::holds(&GameState::EMPTY));
    }

    #[test]
    fn test_disjoint_players_hold() {
        let mut state = GameState::EMPTY;
        state.place(Cell::TopLeft, Player::O);
        state.place(Cell::TopCenter, Player::X);
        assert!(ExclusiveOccupancyInvariant::holds(&state));
    }

    #[test]
    fn test_shared_cell_violates() {
        let mut state = GameState::EMPTY;
        state.place(Cell::Center, Player::O);
        state.place(Cell::Center, Player::X);
        assert!(!ExclusiveOccupancyInvariant::holds(&state));
    }
}
