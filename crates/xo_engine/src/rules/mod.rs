//! Game rules over the canonical 9-bit occupancy view.
//!
//! Rules are pure functions of masks, separated from the engine so they can
//! be tested without sessions or observers.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, LINE_MASKS, completed_line};
