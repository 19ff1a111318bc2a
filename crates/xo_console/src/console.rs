//! Drives one engine from parsed commands.

use crate::command::{Command, HELP};
use crate::config::ConsoleConfig;
use crate::persistence::{parse_state_word, read_state_file, write_state_file};
use crate::render::{Transcript, TranscriptObserver, render_board};
use tracing::{debug, info, instrument, warn};
use xo_engine::{Cell, Transition, XoEngine};

/// Whether the interactive loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading.
    Quit,
}

/// One engine plus the transcript its notifications are written to.
#[derive(Debug)]
pub struct Console {
    engine: XoEngine,
    transcript: Transcript,
    config: ConsoleConfig,
}

impl Console {
    /// Creates a console, resuming from the configured initial state if any.
    #[instrument(skip(config))]
    pub fn new(config: ConsoleConfig) -> anyhow::Result<Self> {
        let mut engine = match config.initial_state() {
            Some(text) => {
                let word = parse_state_word(text)?;
                info!(word, "Resuming from initial state");
                XoEngine::from_state(word)?
            }
            None => XoEngine::new(),
        };
        let transcript = Transcript::new();
        engine.subscribe(TranscriptObserver::new(transcript.clone()));
        Ok(Self {
            engine,
            transcript,
            config,
        })
    }

    /// The engine being driven.
    pub fn engine(&self) -> &XoEngine {
        &self.engine
    }

    /// Removes and returns everything reported since the last drain.
    pub fn drain(&self) -> Vec<String> {
        self.transcript.drain()
    }

    /// Plays a cell, reporting the mover the way the move handler sees it.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: Cell) -> Transition {
        let transcript = self.transcript.clone();
        let transition = self
            .engine
            .apply_move(cell, |mover| transcript.push(format!("{} played {}", mover, cell.index())));
        if *self.config.show_state_dump() && !matches!(transition, Transition::Ignored) {
            self.transcript.push(self.engine.state().to_string());
        }
        transition
    }

    /// Runs one command.
    ///
    /// Rule violations are reported in the transcript; only persistence
    /// problems come back as errors.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Play(cell) => {
                self.play(cell);
            }
            Command::New { switch_order } => {
                self.engine
                    .start_session(switch_order || *self.config.switch_order());
                self.transcript
                    .push(format!("New game, {} to move", self.engine.to_move()));
            }
            Command::Stop => {
                self.engine.stop_session();
                self.transcript.push("Game stopped");
            }
            Command::Moves => {
                let moves: Vec<String> = self
                    .engine
                    .available_moves()
                    .map(|cell| cell.index().to_string())
                    .collect();
                self.transcript.push(format!("Available: {}", moves.join(" ")));
            }
            Command::Board => self.transcript.push(render_board(&self.engine)),
            Command::Dump => self.transcript.push(self.engine.state().to_string()),
            Command::Save => {
                write_state_file(self.config.state_file(), self.engine.export_state())?;
                self.transcript
                    .push(format!("Saved to {}", self.config.state_file().display()));
            }
            Command::Load(word) => {
                let word = match word {
                    Some(word) => word,
                    None => read_state_file(self.config.state_file())?,
                };
                match self.engine.load_state(word) {
                    Ok(()) => self.transcript.push(format!("Loaded {:#010x}", word)),
                    Err(e) => {
                        warn!(error = %e, "Load rejected");
                        self.transcript
                            .push(format!("Rejected: {}", e.violations.join("; ")));
                    }
                }
            }
            Command::Help => self.transcript.push(HELP),
            Command::Quit => {
                debug!("Quit requested");
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Parses and runs one input line; unparsable input is reported.
    #[instrument(skip(self))]
    pub fn execute_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => {
                self.transcript.push(e.to_string());
                Ok(Flow::Continue)
            }
        }
    }

    /// Replays the scripted reference session.
    ///
    /// Starts with order swap, restarts, plays 1 9 7 3, stops, attempts a
    /// move on the stopped game, then starts again and plays 1 9 7 3 3 4.
    #[instrument(skip(self))]
    pub fn run_demo(&mut self) -> anyhow::Result<()> {
        let script = [
            "new swap", "stop", "new swap", "1", "9", "7", "3", "stop", "3", "new swap", "1", "9",
            "7", "3", "3", "4", "board",
        ];
        for line in script {
            self.transcript.push(format!("> {}", line));
            self.execute_line(line)?;
        }
        Ok(())
    }
}
