//! The packed 32-bit state word.
//!
//! # Layout
//!
//! ```text
//! Bit  31:     Session active
//! Bit  30:     Order swap (sticky across sessions)
//! Bit  29:     Starting side of the next session (only meaningful with order swap)
//! Bit  28:     Reserved, always zero
//! Bits 19-27:  O occupancy, bit 18+i for cell i
//! Bits 10-18:  X occupancy, bit 9+i for cell i
//! Bits 1-9:    Board occupancy (either player), bit i for cell i
//! Bit  0:      Turn parity (0 = O to move, 1 = X to move)
//! ```
//!
//! Every occupancy field can be shifted down into a canonical 9-bit view in
//! which cell `i` sits at bit `i`; line masks and [`Cell::mask`] are defined
//! over that view.

use crate::cell::Cell;
use crate::error::MalformedStateError;
use crate::invariants::{InvariantSet, StateInvariants};
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Canonical 9-bit view covering cells 1-9.
pub const CELLS_MASK: u32 = 0x3FE;

/// Bit 0: turn parity.
pub const PARITY_BIT: u32 = 1;
/// Shift of the board occupancy field.
pub const BOARD_SHIFT: u32 = 0;
/// Shift of the X occupancy field.
pub const X_SHIFT: u32 = 9;
/// Shift of the O occupancy field.
pub const O_SHIFT: u32 = 18;
/// Bits 1-9.
pub const BOARD_MASK: u32 = CELLS_MASK << BOARD_SHIFT;
/// Bits 10-18.
pub const X_MASK: u32 = CELLS_MASK << X_SHIFT;
/// Bits 19-27.
pub const O_MASK: u32 = CELLS_MASK << O_SHIFT;
/// Bit 28.
pub const RESERVED_BIT: u32 = 1 << 28;
/// Bit 29.
pub const STARTING_SIDE_BIT: u32 = 1 << 29;
/// Bit 30.
pub const ORDER_SWAP_BIT: u32 = 1 << 30;
/// Bit 31.
pub const SESSION_ACTIVE_BIT: u32 = 1 << 31;

/// Complete game state packed into one word.
///
/// Construction from an arbitrary `u32` goes through [`GameState::validate`]
/// (or `TryFrom`/serde, which call it); the raw constructor is crate-private
/// so every public path either validates or derives from a valid word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GameState(u32);

impl GameState {
    /// The zeroed word: no session, nothing played, O to move.
    pub const EMPTY: GameState = GameState(0);

    pub(crate) const fn from_raw_unchecked(word: u32) -> Self {
        Self(word)
    }

    /// Validates an externally supplied word.
    #[instrument]
    pub fn validate(word: u32) -> Result<Self, MalformedStateError> {
        let candidate = Self(word);
        StateInvariants::check_all(&candidate).map_err(|violations| {
            MalformedStateError::new(
                word,
                violations.into_iter().map(|v| v.description).collect(),
            )
        })?;
        Ok(candidate)
    }

    /// The raw word.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Turn parity (bit 0).
    pub const fn parity(self) -> bool {
        self.0 & PARITY_BIT != 0
    }

    /// The player whose turn it is.
    pub fn to_move(self) -> Player {
        Player::from_parity(self.parity())
    }

    /// Canonical view of the board occupancy field (bits 1-9).
    pub const fn board(self) -> u32 {
        (self.0 & BOARD_MASK) >> BOARD_SHIFT
    }

    /// Canonical view of a player's occupancy field.
    pub const fn occupancy(self, player: Player) -> u32 {
        match player {
            Player::X => (self.0 & X_MASK) >> X_SHIFT,
            Player::O => (self.0 & O_MASK) >> O_SHIFT,
        }
    }

    /// Whether any player has played the cell.
    pub const fn is_occupied(self, cell: Cell) -> bool {
        self.board() & cell.mask() != 0
    }

    /// The player occupying a cell, if any.
    pub fn occupant(self, cell: Cell) -> Option<Player> {
        if self.occupancy(Player::O) & cell.mask() != 0 {
            Some(Player::O)
        } else if self.occupancy(Player::X) & cell.mask() != 0 {
            Some(Player::X)
        } else {
            None
        }
    }

    /// Number of occupied cells.
    pub const fn move_count(self) -> u32 {
        self.board().count_ones()
    }

    /// Whether all nine cells are occupied.
    pub const fn is_full(self) -> bool {
        self.board() == CELLS_MASK
    }

    /// Session-active flag (bit 31).
    pub const fn is_session_active(self) -> bool {
        self.0 & SESSION_ACTIVE_BIT != 0
    }

    /// Order-swap flag (bit 30).
    pub const fn is_order_swap(self) -> bool {
        self.0 & ORDER_SWAP_BIT != 0
    }

    /// Starting-side flag (bit 29).
    pub const fn starting_side(self) -> bool {
        self.0 & STARTING_SIDE_BIT != 0
    }

    /// Reserved bit 28.
    pub const fn reserved(self) -> bool {
        self.0 & RESERVED_BIT != 0
    }

    pub(crate) fn set_session_active(&mut self, active: bool) {
        self.set_bit(SESSION_ACTIVE_BIT, active);
    }

    pub(crate) fn set_order_swap(&mut self) {
        self.0 |= ORDER_SWAP_BIT;
    }

    /// Records `cell` for `player` in both the board and player fields and
    /// flips the parity.
    pub(crate) fn place(&mut self, cell: Cell, player: Player) {
        let shift = match player {
            Player::X => X_SHIFT,
            Player::O => O_SHIFT,
        };
        self.0 |= cell.mask() << BOARD_SHIFT;
        self.0 ^= PARITY_BIT;
        self.0 |= cell.mask() << shift;
    }

    fn set_bit(&mut self, bit: u32, on: bool) {
        if on {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

impl TryFrom<u32> for GameState {
    type Error = MalformedStateError;

    #[track_caller]
    fn try_from(word: u32) -> Result<Self, Self::Error> {
        GameState::validate(word)
    }
}

impl From<GameState> for u32 {
    fn from(state: GameState) -> Self {
        state.0
    }
}

/// Binary dump grouped as `flags O X board parity`.
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits = format!("{:032b}", self.0);
        write!(
            f,
            "{} {} {} {} {}",
            &bits[0..4],
            &bits[4..13],
            &bits[13..22],
            &bits[22..31],
            &bits[31..32]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_masks_are_disjoint() {
        let fields = [
            PARITY_BIT,
            BOARD_MASK,
            X_MASK,
            O_MASK,
            RESERVED_BIT,
            STARTING_SIDE_BIT,
            ORDER_SWAP_BIT,
            SESSION_ACTIVE_BIT,
        ];
        let mut seen = 0u32;
        for field in fields {
            assert_eq!(seen & field, 0);
            seen |= field;
        }
        assert_eq!(seen, u32::MAX);
    }

    #[test]
    fn test_place_records_board_player_and_parity() {
        let mut state = GameState::EMPTY;
        state.place(Cell::Center, Player::O);
        assert_eq!(state.bits(), (1 << 5) | 1 | (1 << 23));
        assert_eq!(state.occupant(Cell::Center), Some(Player::O));
        assert_eq!(state.to_move(), Player::X);

        state.place(Cell::TopLeft, Player::X);
        assert_eq!(state.occupancy(Player::X), Cell::TopLeft.mask());
        assert_eq!(state.occupant(Cell::TopLeft), Some(Player::X));
        assert_eq!(state.to_move(), Player::O);
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_display_groups_fields() {
        let word = SESSION_ACTIVE_BIT | (Cell::TopLeft.mask() << O_SHIFT) | Cell::TopLeft.mask() | 1;
        let state = GameState::from_raw_unchecked(word);
        assert_eq!(
            state.to_string(),
            "1000 000000001 000000000 000000001 1"
        );
    }

    #[test]
    fn test_validate_accepts_empty_and_rejects_reserved() {
        assert_eq!(GameState::validate(0).map(GameState::bits).ok(), Some(0));
        let err = GameState::validate(RESERVED_BIT).unwrap_err();
        assert_eq!(err.word, RESERVED_BIT);
        assert!(!err.violations.is_empty());
    }

    #[test]
    fn test_serde_validates() {
        let state = GameState::from_raw_unchecked(SESSION_ACTIVE_BIT | ORDER_SWAP_BIT);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, (SESSION_ACTIVE_BIT | ORDER_SWAP_BIT).to_string());
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);

        let bad = (Cell::Center.mask() << X_SHIFT).to_string();
        assert!(serde_json::from_str::<GameState>(&bad).is_err());
    }
}
