//! Engine analysis commands: `best-move` and `self-play`.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tictac_core::{Board, Outcome, Position, ScoredMove, SelfPlay, best_move, rules, self_play};
use tracing::instrument;

/// Engine choice for one position, as printed by `best-move --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Position searched.
    pub board: Board,
    /// Chosen cell and its minimax score.
    #[serde(flatten)]
    pub choice: ScoredMove,
}

/// Parses a board argument.
pub fn parse_board(text: &str) -> Result<Board> {
    text.parse::<Board>()
        .with_context(|| format!("Invalid board {:?}", text))
}

/// Searches `board` for Cross's best cell.
///
/// # Errors
///
/// Fails if the board has no empty cell or already has a winner.
#[instrument]
pub fn best_move_report(board: Board) -> Result<BestMoveReport> {
    match rules::outcome(&board) {
        Outcome::Ongoing => {}
        outcome => bail!("Nothing to search: {}", outcome),
    }
    Ok(BestMoveReport {
        board,
        choice: best_move(&board),
    })
}

/// Plays the engine against itself from `board`.
#[instrument]
pub fn self_play_report(board: Board) -> SelfPlay {
    self_play(&board)
}

/// Text rendering of a [`BestMoveReport`].
pub fn format_best_move(report: &BestMoveReport) -> String {
    let label = Position::from_index(report.choice.cell).map_or("?", Position::label);
    format!(
        "{}\n\nBest move for X: {} ({}), score {}",
        report.board,
        report.choice.cell + 1,
        label,
        report.choice.score
    )
}

/// Text rendering of a [`SelfPlay`] record.
pub fn format_self_play(game: &SelfPlay) -> String {
    let mut lines: Vec<String> = game
        .moves
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{:>2}. {} {}", i + 1, m.mark, m.cell + 1))
        .collect();
    lines.push(String::new());
    lines.push(game.board.to_string());
    lines.push(String::new());
    lines.push(game.outcome.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_move_report_blocks_row() {
        let report = best_move_report(parse_board("XX.......").unwrap()).unwrap();
        assert_eq!(report.choice, ScoredMove { cell: 2, score: 10 });
        assert!(format_best_move(&report).ends_with("Best move for X: 3 (Top-right), score 10"));
    }

    #[test]
    fn test_best_move_refuses_finished_boards() {
        assert!(best_move_report(parse_board("XOXXOOOXX").unwrap()).is_err());
        assert!(best_move_report(parse_board("XXXOO....").unwrap()).is_err());
    }

    #[test]
    fn test_parse_board_error_has_context() {
        let err = parse_board("XO?").unwrap_err();
        assert!(err.to_string().starts_with("Invalid board"));
    }

    #[test]
    fn test_self_play_text_ends_with_result() {
        let game = self_play_report(Board::new());
        let text = format_self_play(&game);
        assert!(text.starts_with(" 1. X 1"));
        assert!(text.ends_with("Draw"));
    }

    #[test]
    fn test_best_move_json_is_flat() {
        let report = best_move_report(Board::new()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["cell"], 0);
        assert_eq!(json["score"], 0);
        assert!(json["board"].is_array());
    }
}
