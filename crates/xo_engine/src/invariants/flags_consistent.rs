//! Flag consistency invariant: reserved bit clear, starting side only with order swap.

use super::Invariant;
use crate::state::GameState;

/// Invariant: bit 28 is zero and the starting-side flag only appears
/// together with the order-swap flag.
///
/// Stopping a session is the only transition that sets the starting side,
/// and it only does so while order swap is on; order swap is never cleared
/// except by a full reset that also clears the starting side.
pub struct FlagsConsistentInvariant;

impl Invariant<GameState> for FlagsConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        !state.reserved() && (!state.starting_side() || state.is_order_swap())
    }

    fn description() -> &'static str {
        "Reserved bit is clear and starting side is only set with order swap"
    }
}
