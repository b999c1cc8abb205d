//! Pointer bounds invariant: the active snapshot exists.

use super::Invariant;
use crate::{GameHistory, MAX_SNAPSHOTS};

/// Invariant: `1 <= snapshots <= MAX_SNAPSHOTS` and `current_move < snapshots`.
pub struct PointerInBoundsInvariant;

impl Invariant<GameHistory> for PointerInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        let len = game.snapshot_count();
        (1..=MAX_SNAPSHOTS).contains(&len) && game.current_move() < len
    }

    fn description() -> &'static str {
        "Active snapshot pointer lies within a history of 1 to 10 snapshots"
    }
}
