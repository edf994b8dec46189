//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first completed line in [`LINES`] order.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        if cell == board.get(b) && cell == board.get(c) {
            cell.mark()
        } else {
            None
        }
    })
}

/// Checks if `mark` holds all three cells of some line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let wanted = Cell::from(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == wanted))
}
