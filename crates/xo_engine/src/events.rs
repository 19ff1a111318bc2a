//! Notifications raised by the engine and the observers that receive them.
//!
//! Delivery is synchronous: every observer runs inside the engine call that
//! raised the event, in registration order.

use crate::cell::Cell;
use crate::types::Outcome;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Something observable happened during an engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum EngineEvent {
    /// A move was applied to the cell.
    #[display("Valid move: {_0}")]
    ValidMove(Cell),
    /// A move was rejected because the cell is taken.
    #[display("Invalid move: {_0}")]
    InvalidMove(Cell),
    /// A move was attempted while no session was running.
    #[display("Game stopped")]
    SessionInactiveAttempt,
    /// The session ended.
    #[display("Victory: {_0}")]
    Victory(Outcome),
}

/// Receives engine notifications.
///
/// Implementors override the per-channel hooks they care about; closures
/// taking `&EngineEvent` implement this trait directly.
pub trait EngineObserver: Send {
    /// Dispatches an event to the matching hook.
    fn notify(&mut self, event: &EngineEvent) {
        match *event {
            EngineEvent::ValidMove(cell) => self.on_valid_move(cell),
            EngineEvent::InvalidMove(cell) => self.on_invalid_move(cell),
            EngineEvent::SessionInactiveAttempt => self.on_session_inactive(),
            EngineEvent::Victory(outcome) => self.on_victory(outcome),
        }
    }

    /// A move was applied.
    fn on_valid_move(&mut self, _cell: Cell) {}

    /// A move hit an occupied cell.
    fn on_invalid_move(&mut self, _cell: Cell) {}

    /// A move was attempted on a stopped game.
    fn on_session_inactive(&mut self) {}

    /// A session finished with a winner or a draw.
    fn on_victory(&mut self, _outcome: Outcome) {}
}

impl<F> EngineObserver for F
where
    F: FnMut(&EngineEvent) + Send,
{
    fn notify(&mut self, event: &EngineEvent) {
        self(event)
    }
}

/// Handle returned by subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Ordered list of subscribed observers.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn EngineObserver>)>,
}

impl Observers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer; it will be notified after all earlier ones.
    #[instrument(skip(self, observer))]
    pub fn subscribe(&mut self, observer: impl EngineObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        debug!(?id, count = self.entries.len(), "Observer subscribed");
        id
    }

    /// Removes an observer. Returns whether it was registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        let removed = self.entries.len() != before;
        debug!(?id, removed, "Observer unsubscribed");
        removed
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Delivers an event to every observer in registration order.
    pub fn emit(&mut self, event: EngineEvent) {
        trace!(%event, observers = self.entries.len(), "Emitting event");
        for (_, observer) in &mut self.entries {
            observer.notify(&event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
