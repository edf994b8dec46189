//! Tictac core - tic-tac-toe rules and an exhaustive minimax opponent
//!
//! # Architecture
//!
//! - **Board**: 9 closed-enum cells with a free-cell count that never drifts
//! - **Rules**: win and draw detection over the 8 lines
//! - **Search**: plain minimax, Cross as maximiser, no pruning
//! - **Game**: owning controller that applies moves, answers for the
//!   computer in [`GameMode::Computer`], and notifies a [`GameObserver`]
//!
//! # Example
//!
//! ```
//! use tictac_core::{EventLog, Game, GameMode, Mark, Outcome};
//!
//! let mut game = Game::new(GameMode::Duo, EventLog::new());
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.outcome(), Outcome::Win(Mark::Cross));
//! assert_eq!(game.observer().outcomes(), vec![Outcome::Win(Mark::Cross)]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
mod game;
pub mod invariants;
mod observer;
mod outcome;
mod position;
pub mod rules;
pub mod search;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, CELLS, ParseBoardError};
pub use game::Game;
pub use observer::{EventLog, GameEvent, GameObserver};
pub use outcome::Outcome;
pub use position::Position;
pub use search::{ScoredMove, SelfPlay, best_move, find_best_move, find_best_move_for, self_play};
pub use state::GameState;
pub use types::{Cell, GameMode, Mark, Turn};
