//! Named positions on the 3×3 board.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions are laid out row-major: index = row * 3 + col.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses a label, ignoring case, spaces, dashes and underscores.
    ///
    /// `"top left"`, `"TopLeft"` and `"top-left"` all name [`Position::TopLeft`].
    #[instrument]
    pub fn from_label(s: &str) -> Option<Self> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        Position::iter().find(|pos| normalize(pos.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
