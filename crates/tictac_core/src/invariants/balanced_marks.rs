//! Balanced-marks invariant: Cross leads Nought by at most one.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: crosses minus noughts is 0 or 1.
///
/// Cross always opens, and both modes alternate sides, so Nought can never
/// be ahead and Cross can never be two ahead.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let crosses = state.board().count(Mark::Cross);
        let noughts = state.board().count(Mark::Nought);
        crosses == noughts || crosses == noughts + 1
    }

    fn description() -> &'static str {
        "Crosses lead noughts by zero or one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;

    #[test]
    fn test_holds_when_cross_leads_by_one() {
        let mut state = GameState::new(GameMode::Duo);
        state.board_mut().put(4, Mark::Cross);
        assert!(BalancedMarksInvariant::holds(&state));
    }

    #[test]
    fn test_nought_ahead_violates() {
        let mut state = GameState::new(GameMode::Duo);
        state.board_mut().put(4, Mark::Nought);
        assert!(!BalancedMarksInvariant::holds(&state));
    }

    #[test]
    fn test_cross_two_ahead_violates() {
        let mut state = GameState::new(GameMode::Duo);
        state.board_mut().put(0, Mark::Cross);
        state.board_mut().put(1, Mark::Cross);
        assert!(!BalancedMarksInvariant::holds(&state));
    }
}
