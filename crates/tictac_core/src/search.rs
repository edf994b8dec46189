//! Exhaustive minimax search.
//!
//! The engine always frames Cross as the maximiser and Nought as the
//! minimiser. Every branch works on its own copy of the board, there is no
//! pruning and no memoisation: a 3x3 board is small enough that plain
//! minimax finishes immediately, and its exact move choices are part of
//! the observable behaviour.

use super::rules::{self, LINES};
use super::{Board, Cell, Mark, Move, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a board where Cross has completed a line.
pub const WIN_SCORE: i32 = 10;

/// A candidate cell together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Board index (0-8).
    pub cell: usize,
    /// Minimax value from Cross's point of view.
    pub score: i32,
}

/// Static evaluation: +10 for a Cross line, -10 for a Nought line, else 0.
///
/// Draws are not detected here; a full board without a line scores 0 like
/// any other undecided board.
pub fn evaluate(board: &Board) -> i32 {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell == board.get(b) && cell == board.get(c) {
            match cell {
                Cell::Cross => return WIN_SCORE,
                Cell::Nought => return -WIN_SCORE,
                Cell::Empty => {}
            }
        }
    }
    0
}

/// Minimax value of `board` with `depth` plies already played below the
/// candidate move.
///
/// Wins are worth `10 - depth` (sooner is better) and losses `-10 + depth`
/// (later is better).
pub fn minimax(board: &Board, depth: i32, maximizing: bool) -> i32 {
    let score = evaluate(board);
    if score == WIN_SCORE {
        return score - depth;
    }
    if score == -WIN_SCORE {
        return score + depth;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { Mark::Cross } else { Mark::Nought };
    let scores = board
        .empty_cells()
        .map(|cell| minimax(&board.with_mark(cell, mover), depth + 1, !maximizing));

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}

/// Best cell for Cross together with its score.
///
/// Candidates are tried in ascending index order and only a strictly
/// greater score replaces the current best, so the first of several equal
/// moves wins. The candidate ply itself is not counted: each candidate is
/// scored with `minimax(child, 0, false)`.
///
/// # Panics
///
/// Panics if the board has no empty cell.
#[instrument(fields(free = board.free_cells()))]
pub fn best_move(board: &Board) -> ScoredMove {
    let score = |cell| ScoredMove {
        cell,
        score: minimax(&board.with_mark(cell, Mark::Cross), 0, false),
    };

    let mut candidates = board.empty_cells();
    let Some(first) = candidates.next() else {
        panic!("search requires at least one empty cell");
    };

    let mut best = score(first);
    for cell in candidates {
        let scored = score(cell);
        if scored.score > best.score {
            best = scored;
        }
    }

    debug!(cell = best.cell, score = best.score, "Engine chose move");
    best
}

/// Index of the best cell, searching with Cross as the maximiser.
///
/// This is the reply the automated Nought player uses in computer mode.
///
/// # Panics
///
/// Panics if the board has no empty cell.
pub fn find_best_move(board: &Board) -> usize {
    best_move(board).cell
}

/// Best cell for `mark`, searching from that side's own perspective.
///
/// For Nought the board is searched with marks exchanged, which turns the
/// Cross-framed search into a Nought-maximising one.
///
/// # Panics
///
/// Panics if the board has no empty cell.
#[instrument]
pub fn find_best_move_for(board: &Board, mark: Mark) -> usize {
    match mark {
        Mark::Cross => find_best_move(board),
        Mark::Nought => find_best_move(&board.swapped()),
    }
}

/// Record of an engine-vs-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlay {
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Final board.
    pub board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Plays both sides with [`find_best_move_for`] until the game is decided.
///
/// The side to move is inferred from the mark counts, so any reachable
/// position can be continued.
#[instrument]
pub fn self_play(start: &Board) -> SelfPlay {
    let mut board = *start;
    let mut moves = Vec::new();

    let mut outcome = rules::outcome(&board);
    while !outcome.is_terminal() {
        let mark = board.side_to_move();
        let cell = find_best_move_for(&board, mark);
        board = board.with_mark(cell, mark);
        moves.push(Move::new(mark, cell));
        outcome = rules::outcome_after(&board, mark);
    }

    debug!(moves = moves.len(), %outcome, "Self-play finished");
    SelfPlay {
        moves,
        board,
        outcome,
    }
}
