//! Terminal front end for the `xo_engine` rule engine.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file plus `.env`/environment overrides
//! - **Command**: parsing of interactive input lines
//! - **Console**: drives one engine and collects everything it reports
//! - **Render**: board and notification formatting
//! - **Persistence**: state word parsing and state files

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod console;
mod persistence;
mod render;

pub use cli::{Cli, Mode};
pub use command::{Command, CommandError};
pub use config::{ConfigError, ConsoleConfig};
pub use console::{Console, Flow};
pub use persistence::{PersistenceError, parse_state_word, read_state_file, write_state_file};
pub use render::{Transcript, TranscriptObserver, render_board};
