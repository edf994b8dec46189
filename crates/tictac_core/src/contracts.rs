//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} apply move {Q}.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, Cell, GameState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game is still undecided.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the board has a winner or is full.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell exists and is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects out-of-range and occupied cells.
    pub fn check(state: &GameState, cell: usize) -> Result<(), MoveError> {
        match state.board().cell(cell) {
            None => Err(MoveError::OutOfRange(cell)),
            Some(Cell::Empty) => Ok(()),
            Some(_) => Err(MoveError::Occupied(cell)),
        }
    }
}

/// Composite precondition: a move is legal if the game is undecided and
/// the cell is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `cell`.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, cell: usize) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        CellIsEmpty::check(state, cell)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: marks are never overwritten or removed.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Every cell occupied in `before` holds the same mark in `after`.
    pub fn holds(before: &Board, after: &Board) -> bool {
        before
            .cells()
            .iter()
            .zip(after.cells())
            .all(|(b, a)| b.is_empty() || b == a)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for applying a move (the human move plus any automated reply).
///
/// Preconditions:
/// - Game undecided
/// - Cell in range and empty
///
/// Postconditions:
/// - Board is monotonic
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, cell: &usize) -> Result<(), MoveError> {
        LegalMove::check(state, *cell)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !MonotonicBoard::holds(before.board(), after.board()) {
            warn!("Board monotonicity violated");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a placed mark changed".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Game invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
