//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A mark placed by one side. Also names whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Cross (moves first).
    Cross,
    /// Nought (moves second).
    Nought,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Single-character symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whose turn it is. Cross always moves first after a reset.
pub type Turn = Mark;

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Occupied by Cross.
    Cross,
    /// Occupied by Nought.
    Nought,
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Mark::Cross),
            Cell::Nought => Some(Mark::Nought),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Same cell with Cross and Nought exchanged.
    pub fn swapped(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Cross => Cell::Nought,
            Cell::Nought => Cell::Cross,
        }
    }

    /// Single-character symbol (`.` for empty).
    pub fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Cross => Cell::Cross,
            Mark::Nought => Cell::Nought,
        }
    }
}

/// Who plays against whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Human plays Cross, the engine answers as Nought.
    #[default]
    Computer,
    /// Two humans alternate on the same board.
    Duo,
}
