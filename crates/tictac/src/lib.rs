//! Tictac - terminal front-end for [`tictac_core`]
//!
//! # Architecture
//!
//! - **Config**: optional `tictac.toml` with the start mode, log filter and hints
//! - **Terminal**: line-based session that renders notifications and the board
//! - **Report**: one-shot engine analysis for `best-move` and `self-play`
//! - **CLI**: clap command definitions shared by the binary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod report;
pub mod terminal;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use terminal::{Input, InputError, Session, TerminalView, parse_input, render_board};
