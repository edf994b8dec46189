//! Complete game state.

use super::{Board, GameMode, Mark, Outcome, Turn, rules};
use serde::{Deserialize, Serialize};

/// Board, side to move and mode.
///
/// Replaced wholesale on reset; otherwise only changed by the game
/// controller's move path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Side to move next.
    turn: Turn,
    /// Who plays against whom.
    mode: GameMode,
}

impl GameState {
    /// Creates a fresh state: empty board, Cross to move.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Cross,
            mode,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Number of empty cells.
    pub fn free_cells(&self) -> usize {
        self.board.free_cells()
    }

    /// Outcome derived from the current board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
    }

    pub(crate) fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
