//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::GameMode;

/// Tictac - tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a settings file (defaults to tictac.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode, overriding the settings file
        #[arg(short, long)]
        mode: Option<GameMode>,
    },

    /// Print the engine's choice for a position (Cross to move)
    BestMove {
        /// Nine cells in row-major order, e.g. "XO./.X./..O"
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides until the game ends
    SelfPlay {
        /// Starting position (defaults to the empty board)
        board: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
