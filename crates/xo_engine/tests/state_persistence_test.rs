//! Export, load and validation of the raw state word.

use xo_engine::state::{
    O_SHIFT, PARITY_BIT, RESERVED_BIT, SESSION_ACTIVE_BIT, STARTING_SIDE_BIT, X_SHIFT,
};
use xo_engine::{Cell, GameState, Player, XoEngine};

#[test]
fn test_export_load_round_trip_mid_game() {
    let mut engine = XoEngine::new();
    engine.start_session(true);
    for cell in [Cell::TopLeft, Cell::BottomRight, Cell::BottomLeft] {
        engine.play(cell);
    }
    let word = engine.export_state();

    let mut other = XoEngine::new();
    other.load_state(word).unwrap();
    assert_eq!(other.export_state(), word);
    assert_eq!(other.to_move(), Player::X);
    assert!(other.is_order_swap());

    // Both continue identically.
    engine.play(Cell::MiddleLeft);
    other.play(Cell::MiddleLeft);
    assert_eq!(engine.export_state(), other.export_state());
}

#[test]
fn test_load_rejects_overlapping_players() {
    let word = Cell::Center.mask()
        | (Cell::Center.mask() << X_SHIFT)
        | (Cell::Center.mask() << O_SHIFT);
    let mut engine = XoEngine::new();
    let err = engine.load_state(word).unwrap_err();
    assert_eq!(err.word, word);
    assert!(
        err.violations
            .iter()
            .any(|v| v.contains("both players"))
    );
    assert_eq!(engine.export_state(), 0);
}

#[test]
fn test_load_rejects_reserved_and_orphan_starting_side() {
    assert!(XoEngine::from_state(RESERVED_BIT).is_err());
    assert!(XoEngine::from_state(STARTING_SIDE_BIT).is_err());
}

#[test]
fn test_load_rejects_unbalanced_counts() {
    let o = Cell::TopLeft.mask() | Cell::TopCenter.mask();
    let word = o | (o << O_SHIFT);
    assert!(GameState::validate(word).is_err());
}

fn mask_of(cells: &[Cell]) -> u32 {
    cells.iter().fold(0, |mask, cell| mask | cell.mask())
}

fn word_with(o: &[Cell], x: &[Cell], flags: u32) -> u32 {
    let (o, x) = (mask_of(o), mask_of(x));
    (o | x) | (x << X_SHIFT) | (o << O_SHIFT) | flags
}

#[test]
fn test_load_rejects_parity_favouring_the_leader() {
    // O holds one more cell but parity still says O moves.
    let word = word_with(&[Cell::TopLeft], &[], SESSION_ACTIVE_BIT);
    let mut engine = XoEngine::new();
    let err = engine.load_state(word).unwrap_err();
    assert!(err.violations.iter().any(|v| v.contains("not the one to move")));
    assert_eq!(engine.export_state(), 0);

    // X ahead with X to move is rejected the same way.
    let word = word_with(&[], &[Cell::Center], SESSION_ACTIVE_BIT | PARITY_BIT);
    assert!(XoEngine::from_state(word).is_err());
}

#[test]
fn test_load_accepts_and_continues_consistent_parity() {
    let word = word_with(&[Cell::TopLeft], &[], SESSION_ACTIVE_BIT | PARITY_BIT);
    let mut engine = XoEngine::from_state(word).unwrap();
    assert_eq!(engine.to_move(), Player::X);
    engine.play(Cell::TopCenter);
    assert_eq!(engine.occupant(Cell::TopCenter), Some(Player::X));
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_load_rejects_already_won_game() {
    let top_row = [Cell::TopLeft, Cell::TopCenter, Cell::TopRight];
    let word = word_with(
        &top_row,
        &[Cell::MiddleLeft, Cell::Center],
        SESSION_ACTIVE_BIT | PARITY_BIT,
    );
    let err = XoEngine::from_state(word).unwrap_err();
    assert!(err.violations.iter().any(|v| v.contains("completed line")));

    // Stopped or not, a decided board is never a stored word.
    assert!(GameState::validate(word & !SESSION_ACTIVE_BIT).is_err());
}

#[test]
fn test_load_rejects_full_board() {
    let o = [
        Cell::TopLeft,
        Cell::TopRight,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomCenter,
    ];
    let x = [
        Cell::TopCenter,
        Cell::MiddleLeft,
        Cell::BottomLeft,
        Cell::BottomRight,
    ];
    let word = word_with(&o, &x, SESSION_ACTIVE_BIT | PARITY_BIT);
    assert!(GameState::validate(word).is_err());
}

#[test]
fn test_error_message_names_word() {
    let err = GameState::validate(RESERVED_BIT).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Malformed state word 0x10000000"));
    assert!(message.contains("Reserved bit"));
}

#[test]
fn test_try_from_and_into() {
    let state = GameState::try_from(1u32 << 31).unwrap();
    assert!(state.is_session_active());
    assert_eq!(u32::from(state), 1 << 31);
}

#[test]
fn test_json_round_trip_of_live_state() {
    let mut engine = XoEngine::new();
    engine.start_session(false);
    engine.play(Cell::Center);
    let json = serde_json::to_string(&engine.state()).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, engine.state());
}
