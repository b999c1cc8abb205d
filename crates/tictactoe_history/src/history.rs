//! Game history with time travel.
//!
//! [`GameHistory`] is the only stateful piece of the crate. It owns every
//! snapshot produced so far and a pointer to the active one. Whose turn it
//! is comes from the pointer's parity rather than a stored flag, so jumping
//! around the history can never leave the turn out of sync.

use crate::contracts::{self, Contract, JumpContract, MoveContract};
use crate::error::{IllegalMove, OutOfRange};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use crate::Mark;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Upper bound on snapshots: the empty board plus nine moves.
pub const MAX_SNAPSHOTS: usize = 10;

/// One navigable entry of the move list.
///
/// `move_index` never changes for a given snapshot while the history is not
/// truncated, so callers can use it as an identity key when diffing lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct MoveEntry {
    /// History position this entry jumps to.
    move_index: usize,
    /// Label such as `"Go to move #3"`.
    label: String,
}

impl MoveEntry {
    /// Builds the entry for history position `move_index`.
    pub fn for_move(move_index: usize) -> Self {
        let label = if move_index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", move_index)
        };
        Self::new(move_index, label)
    }
}

/// Ordered board snapshots plus the active-snapshot pointer.
///
/// Invariants: `snapshots[0]` is the empty board, each later snapshot adds
/// exactly one mark to its predecessor, and
/// `current_move < snapshots.len() <= MAX_SNAPSHOTS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    #[serde(rename = "history")]
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameHistory {
    /// Starts a new game: one empty snapshot, pointer at 0.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game history");
        Self {
            snapshots: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Plays `indices` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMove`] encountered.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, IllegalMove> {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index)?;
        }
        Ok(game)
    }

    /// The active snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current_move]
    }

    /// Index of the active snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of snapshots, including the initial empty board.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The mark that plays next from the active snapshot.
    ///
    /// X on even `current_move`, O on odd.
    pub fn next_mark(&self) -> Mark {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Places the next mark at `index` on the active snapshot.
    ///
    /// On success any snapshots after the active one are discarded, the new
    /// board is appended and becomes active.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the cell is out of bounds, occupied, or
    /// the active board is already won. The history is left untouched.
    #[instrument(skip(self), fields(current_move = self.current_move, snapshots = self.snapshots.len()))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), IllegalMove> {
        let position = MoveContract::pre(self, &index)
            .inspect_err(|error| warn!(index, %error, "Rejected move"))?;

        let player = self.next_mark();
        let next = self.current_board().with_mark(position, player);
        let before = cfg!(debug_assertions).then(|| self.clone());

        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;

        if let Some(before) = before {
            contracts::debug_check_post::<MoveContract, GameHistory, usize>(&before, self);
        }

        debug!(%position, %player, current_move = self.current_move, "Move applied");
        Ok(())
    }

    /// Makes snapshot `move_index` active without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `move_index` is not a recorded position.
    #[instrument(skip(self), fields(current_move = self.current_move, snapshots = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), OutOfRange> {
        let target = JumpContract::pre(self, &move_index)
            .inspect_err(|error| warn!(%error, "Rejected jump"))?;

        let before = cfg!(debug_assertions).then(|| self.clone());
        self.current_move = target;

        if let Some(before) = before {
            contracts::debug_check_post::<JumpContract, GameHistory, usize>(&before, self);
        }

        debug!(current_move = self.current_move, "Jumped");
        Ok(())
    }

    /// One entry per snapshot, in history order.
    pub fn list_moves(&self) -> Vec<MoveEntry> {
        (0..self.snapshots.len()).map(MoveEntry::for_move).collect()
    }

    /// Status line for the active snapshot.
    pub fn status(&self) -> String {
        rules::status_text(self.current_board(), self.next_mark())
    }

    /// Won, drawn or in-progress classification of the active snapshot.
    pub fn outcome(&self) -> GameStatus {
        rules::outcome(self.current_board())
    }

    /// The cell marked at each move, across the whole recorded history.
    ///
    /// Entry `m - 1` is the cell that move `m` filled.
    pub fn played_positions(&self) -> Vec<Position> {
        self.snapshots
            .windows(2)
            .filter_map(|pair| pair[0].changed_positions(&pair[1]).first().copied())
            .collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
