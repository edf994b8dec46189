//! Outbound notifications from the game to whatever presents it.

use super::{Mark, Outcome};
use serde::{Deserialize, Serialize};

/// Notification sink supplied to a [`Game`](crate::Game) at construction.
///
/// The game only ever calls outward through this trait. It renders
/// nothing itself and makes no assumptions about the sink beyond these
/// calls.
pub trait GameObserver {
    /// A mark was placed at `cell`.
    fn on_mark_placed(&mut self, cell: usize, mark: Mark);

    /// The game was decided. `outcome` displays as the result text.
    fn on_game_ended(&mut self, outcome: Outcome);

    /// The board was cleared for a new game.
    fn on_board_reset(&mut self);
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_mark_placed(&mut self, cell: usize, mark: Mark) {
        (**self).on_mark_placed(cell, mark);
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        (**self).on_game_ended(outcome);
    }

    fn on_board_reset(&mut self) {
        (**self).on_board_reset();
    }
}

impl<T: GameObserver + ?Sized> GameObserver for Box<T> {
    fn on_mark_placed(&mut self, cell: usize, mark: Mark) {
        (**self).on_mark_placed(cell, mark);
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        (**self).on_game_ended(outcome);
    }

    fn on_board_reset(&mut self) {
        (**self).on_board_reset();
    }
}

/// A single notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Mark placed.
    MarkPlaced {
        /// Board index (0-8).
        cell: usize,
        /// Mark placed there.
        mark: Mark,
    },
    /// Game ended.
    GameEnded(Outcome),
    /// Board cleared.
    BoardReset,
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns all recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Outcomes reported so far.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::GameEnded(outcome) => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    /// Placements since the most recent reset, as `(cell, mark)` pairs.
    pub fn placements(&self) -> Vec<(usize, Mark)> {
        let start = self
            .events
            .iter()
            .rposition(|event| matches!(event, GameEvent::BoardReset))
            .map_or(0, |i| i + 1);
        self.events[start..]
            .iter()
            .filter_map(|event| match event {
                GameEvent::MarkPlaced { cell, mark } => Some((*cell, *mark)),
                _ => None,
            })
            .collect()
    }
}

impl GameObserver for EventLog {
    fn on_mark_placed(&mut self, cell: usize, mark: Mark) {
        self.events.push(GameEvent::MarkPlaced { cell, mark });
    }

    fn on_game_ended(&mut self, outcome: Outcome) {
        self.events.push(GameEvent::GameEnded(outcome));
    }

    fn on_board_reset(&mut self) {
        self.events.push(GameEvent::BoardReset);
    }
}
