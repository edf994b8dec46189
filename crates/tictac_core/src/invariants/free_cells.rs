//! Free-cell invariant: the cached counter matches the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: the free-cell counter equals the number of empty cells.
pub struct FreeCellsInvariant;

impl Invariant<GameState> for FreeCellsInvariant {
    fn holds(state: &GameState) -> bool {
        let empty = state.board().cells().iter().filter(|c| c.is_empty()).count();
        empty == state.free_cells()
    }

    fn description() -> &'static str {
        "Free-cell counter matches the number of empty cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Mark};

    #[test]
    fn test_holds_after_placements() {
        let mut state = GameState::new(GameMode::Duo);
        state.board_mut().put(4, Mark::Cross);
        state.board_mut().put(0, Mark::Nought);
        assert!(FreeCellsInvariant::holds(&state));
    }

    #[test]
    fn test_detects_drift() {
        let mut state = GameState::new(GameMode::Duo);
        state.board_mut().put(4, Mark::Cross);
        state.board_mut().corrupt_free_cells(9);
        assert!(!FreeCellsInvariant::holds(&state));
    }
}
