//! Full-board detection for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.free_cells() == 0
}
