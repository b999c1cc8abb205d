//! Snapshot chain invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: the history starts empty and grows one mark at a time.
///
/// `snapshots[0]` is the empty board, and every later snapshot differs from
/// its predecessor in exactly one square, which went from empty to occupied.
/// Nothing is ever erased or overwritten.
pub struct SnapshotChainInvariant;

impl Invariant<GameHistory> for SnapshotChainInvariant {
    fn holds(game: &GameHistory) -> bool {
        let snapshots = game.snapshots();

        match snapshots.first() {
            Some(first) if *first == Board::new() => {}
            _ => return false,
        }

        snapshots.windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            matches!(
                before.changed_positions(after).as_slice(),
                [pos] if before.is_empty(*pos) && !after.is_empty(*pos)
            )
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
