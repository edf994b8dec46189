//! Moves and the reasons a move can be refused.

use super::Mark;
use super::Position;
use serde::{Deserialize, Serialize};

/// A mark placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side placing the mark.
    pub mark: Mark,
    /// Board index (0-8).
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, cell: usize) -> Self {
        Self { mark, cell }
    }

    /// Named position of the cell, if in range.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.mark, pos),
            None => write!(f, "{} -> #{}", self.mark, self.cell),
        }
    }
}

/// Why a move cannot be applied.
///
/// The game controller never surfaces these to the player; illegal taps
/// are dropped quietly. They exist for logging and for callers that want
/// to ask before they act.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
