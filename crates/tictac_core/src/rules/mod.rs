//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here is cached: outcomes are
//! recomputed from the cells every time they are asked for.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, has_line};

use super::{Board, Mark, Outcome};
use tracing::instrument;

/// Outcome of a board regardless of who moved last.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Outcome right after `mover` placed a mark.
///
/// Only the mover's lines are scanned, since the mover is the only side
/// whose move could have completed one. A win is reported before a draw.
#[instrument]
pub fn outcome_after(board: &Board, mover: Mark) -> Outcome {
    if has_line(board, mover) {
        Outcome::Win(mover)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
