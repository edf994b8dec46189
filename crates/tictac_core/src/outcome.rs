//! Game outcome, derived from the board on demand.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and cells remain.
    Ongoing,
    /// A side completed a line.
    Win(Mark),
    /// Board full, no line completed.
    Draw,
}

impl Outcome {
    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Result text shown when a game ends: names the winner or says draw.
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Victory {}", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
