//! Board evaluation rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Nothing here holds state, so
//! the same functions serve both move validation in
//! [`GameHistory`](crate::GameHistory) and read-only inspection of past
//! snapshots.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner};

use crate::error::IllegalMove;
use crate::position::Position;
use crate::types::{Board, GameStatus};
use crate::Mark;
use tracing::instrument;

/// Validates a move on `board`, returning the target position.
///
/// # Errors
///
/// - [`IllegalMove::OutOfBounds`] if `index` is not in 0-8
/// - [`IllegalMove::GameDecided`] if a line is already complete
/// - [`IllegalMove::Occupied`] if the square is taken
#[instrument(skip(board))]
pub fn check_move(board: &Board, index: usize) -> Result<Position, IllegalMove> {
    let pos = Position::from_index(index).ok_or(IllegalMove::OutOfBounds(index))?;

    if let Some(player) = winner(board) {
        return Err(IllegalMove::GameDecided(player));
    }

    if !board.is_empty(pos) {
        return Err(IllegalMove::Occupied(pos));
    }

    Ok(pos)
}

/// True iff `index` is in 0-8, its square is empty and nobody has won.
pub fn is_move_legal(board: &Board, index: usize) -> bool {
    check_move(board, index).is_ok()
}

/// Human-readable status line for `board` with `next` to move.
///
/// Draws are not called out: a full board with no line reads
/// `"Next player: ..."`. Use [`outcome`] to distinguish.
pub fn status_text(board: &Board, next: Mark) -> String {
    match winner(board) {
        Some(player) => format!("Winner: {}", player),
        None => format!("Next player: {}", next),
    }
}

/// Classifies `board` as won, drawn or still in progress.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
