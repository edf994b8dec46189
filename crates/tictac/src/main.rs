//! Tictac - Unified CLI
//!
//! Interactive play plus engine analysis commands.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac::cli::{Cli, Command};
use tictac::report::{self, format_best_move, format_self_play, parse_board};
use tictac::{Session, Settings};
use tictac_core::Board;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let source = Settings::source(cli.config.as_deref());
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match &source {
        Some(file) => info!(file = %file.display(), ?settings, "Settings loaded"),
        None => info!(?settings, "No settings file, using defaults"),
    }

    match cli.command {
        Command::Play { mode } => run_play(settings, mode),
        Command::BestMove { board, json } => run_best_move(&board, json),
        Command::SelfPlay { board, json } => run_self_play(board.as_deref(), json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(settings))]
fn run_play(settings: Settings, mode: Option<tictac_core::GameMode>) -> Result<()> {
    let settings = match mode {
        Some(mode) => settings.with_mode(mode),
        None => settings,
    };
    info!(mode = %settings.mode(), "Starting terminal session");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    Session::new(&settings)
        .run(stdin.lock(), &mut stdout)
        .context("Terminal session failed")
}

/// Print the engine's choice for a position
#[instrument]
fn run_best_move(board: &str, json: bool) -> Result<()> {
    let report = report::best_move_report(parse_board(board)?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_best_move(&report));
    }
    Ok(())
}

/// Play the engine against itself
#[instrument]
fn run_self_play(board: Option<&str>, json: bool) -> Result<()> {
    let start = match board {
        Some(text) => parse_board(text)?,
        None => Board::new(),
    };
    let game = report::self_play_report(start);
    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    } else {
        println!("{}", format_self_play(&game));
    }
    Ok(())
}
