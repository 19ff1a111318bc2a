//! Session lifecycle and order-swap bookkeeping.

use xo_engine::state::{ORDER_SWAP_BIT, PARITY_BIT, SESSION_ACTIVE_BIT, STARTING_SIDE_BIT};
use xo_engine::{Cell, Outcome, Player, Transition, XoEngine};

#[test]
fn test_stop_without_swap_clears_everything() {
    let mut engine = XoEngine::new();
    engine.start_session(false);
    engine.play(Cell::Center);
    engine.play(Cell::TopLeft);
    engine.stop_session();

    assert_eq!(engine.export_state(), 0);
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_start_does_not_clear_occupancy() {
    let mut engine = XoEngine::new();
    engine.start_session(false);
    engine.play(Cell::Center);
    let saved = engine.export_state() & !SESSION_ACTIVE_BIT;

    let mut resumed = XoEngine::from_state(saved).unwrap();
    assert!(!resumed.is_session_active());
    resumed.start_session(false);
    assert_eq!(resumed.occupant(Cell::Center), Some(Player::O));
    assert_eq!(resumed.to_move(), Player::X);
}

#[test]
fn test_order_swap_alternates_starting_player() {
    let mut engine = XoEngine::new();
    engine.start_session(true);

    let mut starters = vec![engine.to_move()];
    for _ in 0..3 {
        engine.stop_session();
        engine.start_session(false);
        starters.push(engine.to_move());
    }

    assert_eq!(starters, vec![Player::O, Player::X, Player::O, Player::X]);
    assert!(engine.is_order_swap());
}

#[test]
fn test_stop_with_swap_sets_expected_words() {
    let mut engine = XoEngine::new();
    engine.start_session(true);

    engine.stop_session();
    assert_eq!(
        engine.export_state(),
        PARITY_BIT | STARTING_SIDE_BIT | ORDER_SWAP_BIT
    );

    engine.stop_session();
    assert_eq!(engine.export_state(), ORDER_SWAP_BIT);
}

#[test]
fn test_swap_is_sticky_across_sessions() {
    let mut engine = XoEngine::new();
    engine.start_session(true);
    for _ in 0..4 {
        engine.stop_session();
        engine.start_session(false);
        assert!(engine.is_order_swap());
    }
}

#[test]
fn test_win_alternates_next_starter() {
    let mut engine = XoEngine::new();
    engine.start_session(true);
    for cell in [Cell::TopLeft, Cell::Center, Cell::TopCenter, Cell::BottomLeft] {
        engine.play(cell);
    }
    let transition = engine.play(Cell::TopRight);
    assert_eq!(
        transition,
        Transition::Finished {
            mover: Player::O,
            outcome: Outcome::Winner(Player::O)
        }
    );

    assert!(!engine.is_session_active());
    assert_eq!(engine.available_moves().count(), 9);
    engine.start_session(false);
    assert_eq!(engine.to_move(), Player::X);
}

#[test]
fn test_start_is_idempotent() {
    let mut engine = XoEngine::new();
    engine.start_session(false);
    engine.play(Cell::Center);
    let before = engine.export_state();
    engine.start_session(false);
    assert_eq!(engine.export_state(), before);
}
