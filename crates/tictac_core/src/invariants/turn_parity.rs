//! Turn-parity invariant: the side to move follows from the mark counts.

use super::super::GameState;
use super::Invariant;

/// Invariant: while the game is undecided, the turn matches the board.
///
/// Equal counts mean Cross moves; one extra Cross means Nought moves.
/// A decided game is exempt because its turn is frozen at the last mover.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome().is_terminal() || state.turn() == state.board().side_to_move()
    }

    fn description() -> &'static str {
        "Side to move matches the mark counts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Mark};

    #[test]
    fn test_holds_for_new_state() {
        assert!(TurnParityInvariant::holds(&GameState::new(GameMode::Duo)));
    }

    #[test]
    fn test_stale_turn_violates() {
        let mut state = GameState::new(GameMode::Duo);
        state.board_mut().put(4, Mark::Cross);
        assert!(!TurnParityInvariant::holds(&state));
        state.set_turn(Mark::Nought);
        assert!(TurnParityInvariant::holds(&state));
    }

    #[test]
    fn test_decided_game_is_exempt() {
        let mut state = GameState::new(GameMode::Duo);
        for cell in [0, 3, 1, 4, 2] {
            let mark = state.board().side_to_move();
            state.board_mut().put(cell, mark);
        }
        // Cross completed the top row and the turn stays with Cross.
        assert!(TurnParityInvariant::holds(&state));
    }
}
