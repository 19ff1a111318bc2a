//! Interactive command parsing.

use crate::persistence::parse_state_word;
use derive_more::{Display, Error};
use tracing::instrument;
use xo_engine::{Cell, CellError};

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a cell (number 1-9 or label).
    Play(Cell),
    /// Start a session, optionally switching on order swap.
    New {
        /// Turn on order swap.
        switch_order: bool,
    },
    /// Stop the current session.
    Stop,
    /// List the empty cells.
    Moves,
    /// Show the board.
    Board,
    /// Show the binary dump of the state word.
    Dump,
    /// Write the state word to the configured state file.
    Save,
    /// Replace the state with a raw word, or the state file when omitted.
    Load(Option<u32>),
    /// Show the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Empty line.
    #[display("Empty command")]
    Empty,
    /// Not a known command and not a cell.
    #[display("{_0}")]
    Cell(CellError),
    /// `load` with an argument that is not a number.
    #[display("Cannot parse state word {_0:?}")]
    BadWord(#[error(not(source))] String),
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9 | <label>    play a cell (e.g. 5, center, top-left)
  new [swap]       start a session (swap: alternate the opener)
  stop             stop the session
  moves            list empty cells
  board            show the board
  dump             show the state word in binary
  save             write the state word to the state file
  load [word]      load a word, or the state file
  help             this text
  quit             exit";

impl std::str::FromStr for Command {
    type Err = CommandError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let arg = parts.next();

        let command = match head.to_lowercase().as_str() {
            "new" | "start" => Command::New {
                switch_order: matches!(arg, Some("swap")),
            },
            "stop" => Command::Stop,
            "moves" => Command::Moves,
            "board" => Command::Board,
            "dump" => Command::Dump,
            "save" => Command::Save,
            "load" => match arg {
                Some(word) => Command::Load(Some(
                    parse_state_word(word).map_err(|_| CommandError::BadWord(word.to_string()))?,
                )),
                None => Command::Load(None),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Play(Cell::from_label_or_number(line).map_err(CommandError::Cell)?),
        };
        Ok(command)
    }
}
