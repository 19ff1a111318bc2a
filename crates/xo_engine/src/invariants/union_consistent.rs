//! Union consistency invariant: the board field mirrors both player fields.

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: board occupancy equals X occupancy OR O occupancy.
pub struct UnionConsistentInvariant;

impl Invariant<GameState> for UnionConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.board() == state.occupancy(Player::X) | state.occupancy(Player::O)
    }

    fn description() -> &'static str {
        "Board occupancy equals the union of both players' cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::X_SHIFT;
    use crate::Cell;

    #[test]
    fn test_placed_cells_hold() {
        let mut state = GameState::EMPTY;
        state.place(Cell::BottomLeft, Player::O);
        state.place(Cell::TopRight, Player::X);
        assert!(UnionConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_board_bit_without_owner_violates() {
        let state = GameState::from_raw_unchecked(Cell::Center.mask());
        assert!(!UnionConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_owner_without_board_bit_violates() {
        let state = GameState::from_raw_unchecked(Cell::Center.mask() << X_SHIFT);
        assert!(!UnionConsistentInvariant::holds(&state));
    }
}
