//! Tests for the game controller and its notifications.

use tictac_core::{EventLog, Game, GameEvent, GameMode, GameObserver, Mark, Outcome};

fn play(mode: GameMode, cells: &[usize]) -> Game<EventLog> {
    let mut game = Game::new(mode, EventLog::new());
    for &cell in cells {
        game.apply_move(cell);
    }
    game
}

#[test]
fn test_human_win_against_computer_notifies_once() {
    let game = play(GameMode::Computer, &[0, 3, 4, 8]);

    assert_eq!(
        game.observer().placements(),
        vec![
            (0, Mark::Cross),
            (1, Mark::Nought),
            (3, Mark::Cross),
            (6, Mark::Nought),
            (4, Mark::Cross),
            (5, Mark::Nought),
            (8, Mark::Cross),
        ]
    );
    assert_eq!(game.observer().outcomes(), vec![Outcome::Win(Mark::Cross)]);
    assert_eq!(game.state().board().to_string(), "X|O|.\nX|X|O\nO|.|X");
    assert_eq!(game.state().free_cells(), 2);
}

#[test]
fn test_computer_win_ends_game() {
    let game = play(GameMode::Computer, &[0, 2, 6, 8, 7]);

    assert_eq!(game.outcome(), Outcome::Win(Mark::Nought));
    assert_eq!(game.observer().outcomes(), vec![Outcome::Win(Mark::Nought)]);
    // The move at 7 arrives after the game is decided and is dropped.
    assert_eq!(game.observer().placements().len(), 8);
    assert!(game.state().board().is_empty(7));
}

#[test]
fn test_computer_game_can_draw() {
    let game = play(GameMode::Computer, &[4, 0, 8, 2, 6, 7, 3, 5, 1]);

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.observer().outcomes(), vec![Outcome::Draw]);
    assert_eq!(game.state().free_cells(), 0);
}

#[test]
fn test_occupied_cell_is_silent_no_op() {
    let mut game = play(GameMode::Computer, &[4]);
    let before = game.state().clone();
    let events = game.observer().events().len();

    // 0 was taken by the computer's reply.
    game.apply_move(0);
    game.apply_move(4);

    assert_eq!(game.state(), &before);
    assert_eq!(game.observer().events().len(), events);
}

#[test]
fn test_out_of_range_cell_is_silent_no_op() {
    let mut game = Game::new(GameMode::Duo, EventLog::new());
    game.apply_move(9);
    game.apply_move(usize::MAX);

    assert_eq!(game.state().free_cells(), 9);
    assert_eq!(game.state().turn(), Mark::Cross);
    assert_eq!(game.observer().events(), &[GameEvent::BoardReset]);
}

#[test]
fn test_duo_win_for_nought() {
    let game = play(GameMode::Duo, &[0, 3, 1, 4, 8, 5]);

    assert_eq!(game.outcome(), Outcome::Win(Mark::Nought));
    assert_eq!(game.observer().outcomes(), vec![Outcome::Win(Mark::Nought)]);
    // Turn is not advanced past the winning move.
    assert_eq!(game.state().turn(), Mark::Nought);
}

#[test]
fn test_duo_draw_after_nine_moves() {
    let game = play(GameMode::Duo, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.observer().outcomes(), vec![Outcome::Draw]);
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut game = play(GameMode::Computer, &[0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(game.outcome(), Outcome::Draw);
    let events = game.observer().events().len();

    game.apply_move(8);

    assert_eq!(game.observer().events().len(), events);
    assert_eq!(game.observer().outcomes(), vec![Outcome::Draw]);
}

#[test]
fn test_new_game_keeps_mode_and_clears_board() {
    let mut game = play(GameMode::Computer, &[4, 8]);
    game.new_game();

    assert_eq!(game.state().mode(), GameMode::Computer);
    assert_eq!(game.state().turn(), Mark::Cross);
    assert_eq!(game.state().free_cells(), 9);
    assert!(game.observer().placements().is_empty());
    assert_eq!(game.observer().events().last(), Some(&GameEvent::BoardReset));
}

#[test]
fn test_new_game_after_win_accepts_moves_again() {
    let mut game = play(GameMode::Duo, &[0, 3, 1, 4, 2]);
    game.new_game();
    game.apply_move(2);

    assert_eq!(game.observer().placements(), vec![(2, Mark::Cross)]);
    assert_eq!(game.outcome(), Outcome::Ongoing);
}

#[test]
fn test_change_mode_mid_game() {
    let mut game = play(GameMode::Duo, &[4]);
    game.change_game_mode(GameMode::Computer);
    game.apply_move(4);

    assert_eq!(game.state().mode(), GameMode::Computer);
    // The computer answered in the new mode.
    assert_eq!(game.state().free_cells(), 7);
    assert_eq!(game.state().turn(), Mark::Cross);
}

#[derive(Default)]
struct Counter {
    marks: usize,
    ends: usize,
    resets: usize,
}

impl GameObserver for Counter {
    fn on_mark_placed(&mut self, _cell: usize, _mark: Mark) {
        self.marks += 1;
    }

    fn on_game_ended(&mut self, _outcome: Outcome) {
        self.ends += 1;
    }

    fn on_board_reset(&mut self) {
        self.resets += 1;
    }
}

#[test]
fn test_custom_observer_by_reference() {
    let mut counter = Counter::default();
    {
        let mut game = Game::new(GameMode::Computer, &mut counter);
        for cell in [0, 3, 4, 8] {
            game.apply_move(cell);
        }
    }
    assert_eq!(counter.marks, 7);
    assert_eq!(counter.ends, 1);
    assert_eq!(counter.resets, 1);
}
