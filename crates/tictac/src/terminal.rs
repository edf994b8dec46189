//! Line-oriented terminal front-end.
//!
//! [`TerminalView`] is the notification sink handed to the game. It turns
//! each notification into a line of text and keeps an [`EventLog`] for the
//! move history. [`Session`] owns the game and drives it from any
//! `BufRead`, writing to any `Write`, so it runs the same against stdin
//! and against a test buffer.

use derive_more::Display;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tictac_core::contracts::LegalMove;
use tictac_core::{Board, Cell, EventLog, Game, GameMode, GameObserver, Mark, MoveError, Outcome, Position, find_best_move_for};
use tracing::{debug, info, instrument};

use crate::config::Settings;

/// Observer that queues a line of text per notification.
#[derive(Debug, Default)]
pub struct TerminalView {
    pending: Vec<String>,
    history: EventLog,
}

impl TerminalView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the lines queued since the last call.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    /// Every notification received, oldest first.
    pub fn history(&self) -> &EventLog {
        &self.history
    }
}

impl GameObserver for TerminalView {
    fn on_mark_placed(&mut self, cell: usize, mark: Mark) {
        let label = Position::from_index(cell).map_or("?", Position::label);
        self.pending.push(format!("{} plays {} ({})", mark, cell + 1, label));
        self.history.on_mark_placed(cell, mark);
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.pending.push(format!("*** {} ***", outcome));
        self.history.on_game_ended(outcome);
    }

    fn on_board_reset(&mut self) {
        self.pending.push("New game".to_string());
        self.history.on_board_reset();
    }
}

/// Renders the board with empty cells numbered 1-9.
pub fn render_board(board: &Board) -> String {
    let mut grid: [[String; 3]; 3] = Default::default();
    for pos in Position::ALL {
        grid[pos.row()][pos.col()] = match board.get(pos) {
            Cell::Empty => (pos.to_index() + 1).to_string(),
            cell => cell.symbol().to_string(),
        };
    }
    grid.iter()
        .map(|row| format!(" {} ", row.join(" | ")))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play at a board index (0-8).
    Cell(usize),
    /// Start over in the current mode.
    NewGame,
    /// Start over in another mode.
    Mode(GameMode),
    /// Print the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Enter a cell (1-9), or 'help'")]
    Empty,

    /// `mode` without a recognised mode name.
    #[display("Unknown mode {:?} (expected one of: {})", _0, mode_names())]
    UnknownMode(String),

    /// Neither a cell nor a command.
    #[display("Not a cell or command: {:?}", _0)]
    Unrecognized(String),
}

impl std::error::Error for InputError {}

fn mode_names() -> String {
    GameMode::iter()
        .map(|mode| mode.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses a line of input.
///
/// Cells are `1`-`9` or a position label such as `center` or `top left`.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    let lower = line.to_lowercase();
    let mut words = lower.split_whitespace();
    match words.next() {
        Some("quit" | "q" | "exit") => return Ok(Input::Quit),
        Some("new" | "n") => return Ok(Input::NewGame),
        Some("help" | "h" | "?") => return Ok(Input::Help),
        Some("mode") => {
            let name = words.collect::<Vec<_>>().join(" ");
            return name
                .parse::<GameMode>()
                .map(Input::Mode)
                .map_err(|_| InputError::UnknownMode(name));
        }
        _ => {}
    }

    if let Ok(number) = line.parse::<usize>() {
        return match number {
            1..=9 => Ok(Input::Cell(number - 1)),
            _ => Err(InputError::Unrecognized(line.to_string())),
        };
    }

    Position::from_label(line)
        .map(|pos| Input::Cell(pos.to_index()))
        .ok_or_else(|| InputError::Unrecognized(line.to_string()))
}

const HELP: &str = "\
Commands:
  1-9 or a label   play a cell (e.g. 5, center, top left)
  new              start a new game
  mode <m>         start a new game in mode computer or duo
  help             show this text
  quit             leave";

/// An interactive game bound to the terminal view.
#[derive(Debug)]
pub struct Session {
    game: Game<TerminalView>,
    show_hints: bool,
}

impl Session {
    /// Starts a session from settings.
    #[instrument(skip(settings), fields(mode = %settings.mode()))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: Game::new(*settings.mode(), TerminalView::new()),
            show_hints: *settings.show_hints(),
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game<TerminalView> {
        &self.game
    }

    /// Applies one input. Returns `false` when the player quits.
    #[instrument(skip(self, out))]
    pub fn handle<W: Write>(&mut self, input: Input, out: &mut W) -> std::io::Result<bool> {
        match input {
            Input::Quit => return Ok(false),
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::NewGame => self.game.new_game(),
            Input::Mode(mode) => {
                info!(%mode, "Switching mode");
                self.game.change_game_mode(mode);
            }
            Input::Cell(cell) => match LegalMove::check(self.game.state(), cell) {
                Ok(()) => self.game.apply_move(cell),
                Err(reason) => {
                    debug!(%reason, "Refused input");
                    match reason {
                        MoveError::Occupied(cell) => writeln!(out, "Cell {} is taken", cell + 1)?,
                        MoveError::GameOver => writeln!(out, "The game is over, type 'new'")?,
                        other => writeln!(out, "{}", other)?,
                    }
                }
            },
        }
        Ok(true)
    }

    /// Prints queued notifications, the board and the prompt.
    pub fn show<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        for message in self.game.observer_mut().drain_messages() {
            writeln!(out, "{}", message)?;
        }

        let state = self.game.state();
        writeln!(out)?;
        writeln!(out, "{}", render_board(state.board()))?;
        writeln!(out)?;

        let outcome = state.outcome();
        if outcome.is_terminal() {
            writeln!(out, "{} - type 'new' to play again", outcome)?;
        } else {
            if self.show_hints {
                let hint = find_best_move_for(state.board(), state.turn());
                writeln!(out, "Hint: {}", hint + 1)?;
            }
            write!(out, "{} to move ({})> ", state.turn(), state.mode())?;
        }
        out.flush()
    }

    /// Reads lines from `input` until it ends or the player quits.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Tic-tac-toe. Type 'help' for commands.")?;
        self.show(out)?;

        for line in input.lines() {
            let line = line?;
            match parse_input(&line) {
                Ok(parsed) => {
                    if !self.handle(parsed, out)? {
                        break;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
            self.show(out)?;
        }

        writeln!(out)?;
        info!(events = self.game.observer().history().events().len(), "Session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits_are_one_based() {
        assert_eq!(parse_input("1"), Ok(Input::Cell(0)));
        assert_eq!(parse_input(" 9 "), Ok(Input::Cell(8)));
        assert!(matches!(parse_input("0"), Err(InputError::Unrecognized(_))));
        assert!(matches!(parse_input("10"), Err(InputError::Unrecognized(_))));
    }

    #[test]
    fn test_parse_labels_and_commands() {
        assert_eq!(parse_input("center"), Ok(Input::Cell(4)));
        assert_eq!(parse_input("Top Left"), Ok(Input::Cell(0)));
        assert_eq!(parse_input("bottom-right"), Ok(Input::Cell(8)));
        assert_eq!(parse_input("NEW"), Ok(Input::NewGame));
        assert_eq!(parse_input("quit"), Ok(Input::Quit));
        assert_eq!(parse_input("mode duo"), Ok(Input::Mode(GameMode::Duo)));
        assert_eq!(
            parse_input("mode online"),
            Err(InputError::UnknownMode("online".to_string()))
        );
        assert_eq!(parse_input("   "), Err(InputError::Empty));
        assert_eq!(
            InputError::UnknownMode("chess".to_string()).to_string(),
            "Unknown mode \"chess\" (expected one of: computer, duo)"
        );
    }

    #[test]
    fn test_render_numbers_empty_cells() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(
            render_board(&board),
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );

        let board: Board = "... ... .XO".parse().unwrap();
        assert!(render_board(&board).ends_with("\n 7 | X | O "));
    }

    #[test]
    fn test_view_queues_lines_and_history() {
        let mut view = TerminalView::new();
        view.on_board_reset();
        view.on_mark_placed(4, Mark::Cross);
        view.on_game_ended(Outcome::Draw);

        assert_eq!(
            view.drain_messages(),
            vec!["New game", "X plays 5 (Center)", "*** Draw ***"]
        );
        assert!(view.drain_messages().is_empty());
        assert_eq!(view.history().events().len(), 3);
    }
}
