//! The session and move engine over a packed [`GameState`].

use crate::cell::Cell;
use crate::error::MalformedStateError;
use crate::events::{EngineEvent, EngineObserver, ObserverId, Observers};
use crate::invariants::{InvariantSet, StateInvariants};
use crate::rules::{completed_line, is_full};
use crate::state::{GameState, ORDER_SWAP_BIT, PARITY_BIT, STARTING_SIDE_BIT};
use crate::types::{Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// What a call to [`XoEngine::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No session was running; nothing changed.
    Ignored,
    /// The cell was already taken; nothing changed.
    Rejected(Cell),
    /// The move was applied and the session goes on.
    Continued {
        /// Who played the move.
        mover: Player,
    },
    /// The move was applied and ended the session.
    Finished {
        /// Who played the move.
        mover: Player,
        /// How the session ended.
        outcome: Outcome,
    },
}

/// Tic-tac-toe rule engine.
///
/// Holds one state word plus the observers that are told about every
/// transition. All operations complete synchronously; observers and move
/// handlers run inside the call that triggered them.
#[derive(Debug, Default)]
pub struct XoEngine {
    state: GameState,
    observers: Observers,
}

impl XoEngine {
    /// Creates an engine with the zeroed state: stopped, O to move first.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine resuming from a previously exported word.
    #[instrument]
    pub fn from_state(word: u32) -> Result<Self, MalformedStateError> {
        let state = GameState::validate(word)?;
        Ok(Self {
            state,
            observers: Observers::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────────

    /// Registers an observer behind all existing ones.
    pub fn subscribe(&mut self, observer: impl EngineObserver + 'static) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ─────────────────────────────────────────────────────────────
    //  Session control
    // ─────────────────────────────────────────────────────────────

    /// Starts a session if none is running.
    ///
    /// `switch_order` turns on order swap for this and every later session;
    /// it is applied even when a session is already running.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn start_session(&mut self, switch_order: bool) {
        if switch_order {
            self.state.set_order_swap();
        }
        if self.state.is_session_active() {
            debug!("Session already running");
            return;
        }
        self.state.set_session_active(true);
        info!(to_move = %self.state.to_move(), order_swap = self.state.is_order_swap(), "Session started");
    }

    /// Stops the session and prepares the word for the next one.
    ///
    /// Without order swap the word is zeroed. With order swap the starting
    /// side alternates: the flag is read, toggled, and the parity set so the
    /// other player opens the next session.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn stop_session(&mut self) {
        let next = if !self.state.is_order_swap() {
            0
        } else if !self.state.starting_side() {
            PARITY_BIT | STARTING_SIDE_BIT | ORDER_SWAP_BIT
        } else {
            ORDER_SWAP_BIT
        };
        self.state = GameState::from_raw_unchecked(next);
        info!(next_starter = %self.state.to_move(), "Session stopped");
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Plays `cell` for the player whose turn it is.
    ///
    /// Order of effects on success: board bit, parity flip, mover's bit,
    /// [`EngineEvent::ValidMove`], `on_move(mover)`, then outcome evaluation
    /// which may raise [`EngineEvent::Victory`] and stop the session.
    #[instrument(skip(self, on_move), fields(state = %self.state))]
    pub fn apply_move<F>(&mut self, cell: Cell, on_move: F) -> Transition
    where
        F: FnOnce(Player),
    {
        if !self.state.is_session_active() {
            debug!("Move attempted on stopped game");
            self.observers.emit(EngineEvent::SessionInactiveAttempt);
            return Transition::Ignored;
        }

        if self.state.is_occupied(cell) {
            debug!("Cell already occupied");
            self.observers.emit(EngineEvent::InvalidMove(cell));
            return Transition::Rejected(cell);
        }

        let mover = self.state.to_move();
        self.state.place(cell, mover);
        debug!(%mover, state = %self.state, "Move applied");

        self.observers.emit(EngineEvent::ValidMove(cell));
        on_move(mover);

        let transition = match self.evaluate_outcome(mover) {
            Some(outcome) => Transition::Finished { mover, outcome },
            None => Transition::Continued { mover },
        };
        debug_assert!(
            StateInvariants::check_all(&self.state).is_ok(),
            "state invariants broken after move: {}",
            self.state
        );
        transition
    }

    /// [`apply_move`](Self::apply_move) with an explicit caller context
    /// handed to the move handler.
    pub fn apply_move_with<C, F>(&mut self, cell: Cell, context: &mut C, on_move: F) -> Transition
    where
        F: FnOnce(&mut C, Player),
    {
        self.apply_move(cell, |mover| on_move(context, mover))
    }

    /// [`apply_move`](Self::apply_move) without a move handler.
    pub fn play(&mut self, cell: Cell) -> Transition {
        self.apply_move(cell, |_| {})
    }

    /// Checks the mover's cells for a line, then the board for a draw.
    ///
    /// The draw check only runs when the mover has no line, so a winning
    /// ninth move reports one victory.
    fn evaluate_outcome(&mut self, mover: Player) -> Option<Outcome> {
        let outcome = if let Some(line) = completed_line(self.state.occupancy(mover)) {
            info!(%mover, ?line, "Line completed");
            Outcome::Winner(mover)
        } else if is_full(self.state.board()) {
            info!("Board full");
            Outcome::Draw
        } else {
            return None;
        };

        self.observers.emit(EngineEvent::Victory(outcome));
        self.stop_session();
        Some(outcome)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Whether a session is running.
    pub fn is_session_active(&self) -> bool {
        self.state.is_session_active()
    }

    /// Whether order swap has been switched on.
    pub fn is_order_swap(&self) -> bool {
        self.state.is_order_swap()
    }

    /// The player who moves next.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// The player occupying a cell, if any.
    pub fn occupant(&self, cell: Cell) -> Option<Player> {
        self.state.occupant(cell)
    }

    /// Number of cells played in the current session.
    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    /// Cells held by `player`, ascending.
    ///
    /// Computed fresh from the live word on every call.
    pub fn occupied_cells_of(&self, player: Player) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL
            .into_iter()
            .filter(move |cell| self.state.occupancy(player) & cell.mask() != 0)
    }

    /// Empty cells, ascending.
    pub fn available_moves(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::ALL
            .into_iter()
            .filter(move |cell| !self.state.is_occupied(*cell))
    }

    /// The current state word.
    pub fn state(&self) -> GameState {
        self.state
    }

    // ─────────────────────────────────────────────────────────────
    //  Persistence
    // ─────────────────────────────────────────────────────────────

    /// The raw word, for saving.
    pub fn export_state(&self) -> u32 {
        self.state.bits()
    }

    /// Replaces the whole word with a saved one.
    ///
    /// The word is validated first; on error the current state is kept.
    #[instrument(skip(self))]
    pub fn load_state(&mut self, word: u32) -> Result<(), MalformedStateError> {
        match GameState::validate(word) {
            Ok(state) => {
                self.state = state;
                info!(state = %self.state, "State loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Rejected state word");
                Err(e)
            }
        }
    }
}
