//! Error types for move application and history navigation.
//!
//! Both [`IllegalMove`] and [`OutOfRange`] describe caller misuse. They are
//! recoverable: the operation that returned them left the history unchanged.

use crate::position::Position;
use crate::types::Player;
use derive_more::{Display, Error, From};

/// A move that cannot be applied to the active board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// The cell index is not in 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// A line is already complete on the active board.
    #[display("Game is already over: {} has won", _0)]
    GameDecided(Player),
}

impl std::error::Error for IllegalMove {}

/// A jump target that is not a recorded history position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {} is out of range (history has {} snapshots)", requested, len)]
pub struct OutOfRange {
    /// The requested move index.
    pub requested: usize,
    /// Number of snapshots in the history at the time of the request.
    pub len: usize,
}

/// Any error a history operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum GameError {
    /// Rejected move.
    #[display("{}", _0)]
    IllegalMove(IllegalMove),

    /// Rejected jump.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),
}

impl std::error::Error for GameError {}

/// Failure to parse a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {}", message)]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub message: String,
}

impl BoardParseError {
    /// Creates a new parse error.
    pub fn new(message: String) -> Self {
        Self { message }
    }
}
