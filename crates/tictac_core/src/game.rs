//! Game controller: applies moves, answers for the computer, reports results.

use super::contracts::{Contract, MoveContract};
use super::search::find_best_move;
use super::{GameMode, GameObserver, GameState, Mark, Outcome, rules};
use tracing::{debug, info, instrument};

/// Owning handle over one game and its notification sink.
///
/// All mutation goes through [`apply_move`](Self::apply_move),
/// [`new_game`](Self::new_game) and
/// [`change_game_mode`](Self::change_game_mode).
#[derive(Debug)]
pub struct Game<O> {
    state: GameState,
    observer: O,
}

impl<O: GameObserver> Game<O> {
    /// Starts a game in `mode`, notifying the observer of the cleared board.
    #[instrument(skip(observer))]
    pub fn new(mode: GameMode, observer: O) -> Self {
        let mut game = Self {
            state: GameState::new(mode),
            observer,
        };
        game.new_game();
        game
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Plays the side to move at `cell`.
    ///
    /// Out-of-range cells, occupied cells and moves after the game is
    /// decided are ignored without any notification. In computer mode the
    /// Nought reply is searched and applied before this returns.
    #[instrument(skip(self), fields(mode = %self.state.mode(), turn = %self.state.turn()))]
    pub fn apply_move(&mut self, cell: usize) {
        if let Err(reason) = MoveContract::pre(&self.state, &cell) {
            debug!(%reason, "Ignoring move");
            return;
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let mover = self.state.turn();
        self.place(cell, mover);

        if !self.check_for_win(mover) {
            match self.state.mode() {
                GameMode::Duo => self.state.set_turn(mover.opponent()),
                GameMode::Computer => self.play_computer_reply(),
            }
        }

        #[cfg(debug_assertions)]
        self.verify_transition(&before);
    }

    /// Clears the board and gives the first move to Cross. The mode is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.state = GameState::new(self.state.mode());
        info!(mode = %self.state.mode(), "New game");
        self.observer.on_board_reset();
    }

    /// Abandons the current game and starts a new one in `mode`.
    #[instrument(skip(self))]
    pub fn change_game_mode(&mut self, mode: GameMode) {
        self.new_game();
        self.state.set_mode(mode);
    }

    #[cfg(debug_assertions)]
    fn verify_transition(&self, before: &GameState) {
        if let Err(violation) = MoveContract::post(before, &self.state) {
            panic!("{violation}");
        }
    }

    fn play_computer_reply(&mut self) {
        self.state.set_turn(Mark::Nought);
        let reply = find_best_move(self.state.board());
        debug!(cell = reply, "Computer replies");
        self.place(reply, Mark::Nought);
        self.state.set_turn(Mark::Cross);
        self.check_for_win(Mark::Nought);
    }

    fn place(&mut self, cell: usize, mark: Mark) {
        let placed = self.state.board_mut().place(cell, mark);
        debug_assert!(placed.is_ok(), "placed on a checked cell: {placed:?}");
        if placed.is_ok() {
            self.observer.on_mark_placed(cell, mark);
        }
    }

    /// Reports a decided game for the side that just moved.
    fn check_for_win(&mut self, mover: Mark) -> bool {
        let outcome = rules::outcome_after(self.state.board(), mover);
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.observer.on_game_ended(outcome);
            true
        } else {
            false
        }
    }
}
