//! One-shot evaluation of a move list.

use crate::config::CliConfig;
use crate::session::parse_cell;
use anyhow::{Context, Result};
use serde::Serialize;
use tictactoe_history::{Board, GameHistory, GameStatus, Mark, MoveEntry};
use tracing::instrument;

/// Snapshot of a game after a replay, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// The active board.
    pub board: Board,
    /// The active board rendered with the configured symbols.
    pub grid: String,
    /// Active history position.
    pub current_move: usize,
    /// Mark to play next from the active board.
    pub next_mark: Mark,
    /// Status line.
    pub status: String,
    /// Won, drawn or in progress.
    pub outcome: GameStatus,
    /// Navigable history entries.
    pub moves: Vec<MoveEntry>,
}

impl ReplayReport {
    /// Captures the active state of `game`.
    pub fn from_game(game: &GameHistory, config: &CliConfig) -> Self {
        Self {
            board: game.current_board().clone(),
            grid: config.render_board(game.current_board()),
            current_move: game.current_move(),
            next_mark: game.next_mark(),
            status: game.status(),
            outcome: game.outcome(),
            moves: game.list_moves(),
        }
    }

    /// Plain-text rendering: board, status, then the move list.
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n{}\n", self.grid, self.status);
        if self.outcome == GameStatus::Draw {
            text.push_str("Draw\n");
        }
        for entry in &self.moves {
            let marker = if *entry.move_index() == self.current_move { '*' } else { ' ' };
            text.push_str(&format!("{} {}\n", marker, entry.label()));
        }
        text
    }
}

/// Plays `cells` from a fresh game, then optionally jumps.
///
/// # Errors
///
/// Fails on the first unparseable or illegal cell, or an out-of-range jump.
#[instrument(skip(config))]
pub fn replay(cells: &[String], jump: Option<usize>, config: &CliConfig) -> Result<ReplayReport> {
    let mut game = GameHistory::new();

    for (n, cell) in cells.iter().enumerate() {
        let index = parse_cell(cell).with_context(|| format!("Move #{}", n + 1))?;
        game.apply_move(index)
            .with_context(|| format!("Move #{} ({})", n + 1, cell))?;
    }

    if let Some(target) = jump {
        game.jump_to(target).context("Jump after replay")?;
    }

    Ok(ReplayReport::from_game(&game, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_replay_win() {
        let report = replay(&cells(&["0", "3", "1", "4", "2"]), None, &CliConfig::default()).unwrap();
        assert_eq!(report.status, "Winner: X");
        assert_eq!(report.current_move, 5);
        assert_eq!(report.moves.len(), 6);
        assert!(report.to_text().starts_with("X|X|X\n-+-+-\nO|O|.\n"));
    }

    #[test]
    fn test_replay_with_jump() {
        let report =
            replay(&cells(&["center", "top-left"]), Some(1), &CliConfig::default()).unwrap();
        assert_eq!(report.current_move, 1);
        assert_eq!(report.next_mark, tictactoe_history::Player::O);
        assert!(report.to_text().contains("* Go to move #1"));
    }

    #[test]
    fn test_replay_reports_failing_move() {
        let err = replay(&cells(&["4", "4"]), None, &CliConfig::default()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Move #2"), "{}", message);
        assert!(message.contains("already occupied"), "{}", message);
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        assert!(replay(&cells(&["4"]), Some(5), &CliConfig::default()).is_err());
    }
}
