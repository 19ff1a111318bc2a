//! xo - terminal front end for the packed-word tic-tac-toe engine.

use anyhow::Result;
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use xo_console::{Cli, Console, ConsoleConfig, Flow, Mode, parse_state_word, render_board};
use xo_engine::GameState;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The log filter lives in the config, so loading it is traced under
    // RUST_LOG alone before the real subscriber is installed.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        ConsoleConfig::load(cli.config.as_deref()).map(ConsoleConfig::with_env)
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.mode {
        Mode::Demo => run_demo(config),
        Mode::Play {
            switch_order,
            state,
        } => run_play(config.with_overrides(switch_order, state)),
        Mode::Inspect { word } => run_inspect(&word),
    }
}

/// Replay the scripted session from an empty word
#[instrument(skip(config))]
fn run_demo(config: ConsoleConfig) -> Result<()> {
    info!("Running demo");
    let mut console = Console::new(config.without_initial_state())?;
    console.run_demo()?;
    for line in console.drain() {
        println!("{}", line);
    }
    Ok(())
}

/// Interactive loop over stdin
#[instrument(skip(config))]
fn run_play(config: ConsoleConfig) -> Result<()> {
    let mut console = Console::new(config)?;
    info!(state = %console.engine().state(), "Console ready");

    println!("{}", render_board(console.engine()));
    println!("Type 'new' to start, 'help' for commands.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let flow = console.execute_line(&line?);
        for out in console.drain() {
            println!("{}", out);
        }
        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => println!("Error: {}", e),
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}

/// Validate and describe one state word
#[instrument]
fn run_inspect(word: &str) -> Result<()> {
    let raw = parse_state_word(word)?;
    let state = GameState::validate(raw)?;
    let engine = xo_engine::XoEngine::from_state(state.bits())?;

    println!("{}", state);
    println!("session active: {}", state.is_session_active());
    println!("order swap:     {}", state.is_order_swap());
    println!("to move:        {}", state.to_move());
    println!("{}", render_board(&engine));
    Ok(())
}
