//! Tic-tac-toe rules packed into a single 32-bit state word.
//!
//! The whole game (board, per-player cells, turn parity, session flags) lives
//! in one [`GameState`] word. [`XoEngine`] mutates that word and tells
//! subscribed [`EngineObserver`]s what happened.
//!
//! # Example
//!
//! ```
//! use xo_engine::{Cell, EngineEvent, Outcome, Player, XoEngine};
//! use std::sync::{Arc, Mutex};
//!
//! let mut engine = XoEngine::new();
//! let victories = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&victories);
//! engine.subscribe(move |event: &EngineEvent| {
//!     if let EngineEvent::Victory(outcome) = event {
//!         sink.lock().unwrap().push(*outcome);
//!     }
//! });
//!
//! engine.start_session(false);
//! for cell in [Cell::TopLeft, Cell::Center, Cell::TopCenter, Cell::BottomRight, Cell::TopRight] {
//!     engine.play(cell);
//! }
//!
//! assert_eq!(*victories.lock().unwrap(), vec![Outcome::Winner(Player::O)]);
//! assert!(!engine.is_session_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod engine;
mod error;
mod events;
pub mod invariants;
pub mod rules;
pub mod state;
mod types;

pub use cell::Cell;
pub use engine::{Transition, XoEngine};
pub use error::{CellError, MalformedStateError};
pub use events::{EngineEvent, EngineObserver, ObserverId, Observers};
pub use state::GameState;
pub use types::{Outcome, Player};
