//! Command-line interface for the `xo` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xo - tic-tac-toe on a single 32-bit state word
#[derive(Parser, Debug)]
#[command(name = "xo")]
#[command(about = "Play tic-tac-toe against the packed-word rule engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Mode to run
    #[command(subcommand)]
    pub mode: Mode,
}

/// Available modes
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Replay the scripted reference session and print every notification
    Demo,

    /// Play interactively, one command per line on stdin
    Play {
        /// Alternate the opening player between sessions
        #[arg(long)]
        switch_order: bool,

        /// Initial state word (decimal or 0x-prefixed hex)
        #[arg(long)]
        state: Option<String>,
    },

    /// Validate a raw state word and show its fields
    Inspect {
        /// State word (decimal or 0x-prefixed hex)
        word: String,
    },
}
