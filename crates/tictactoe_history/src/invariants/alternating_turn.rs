//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameHistory, Player, Square};

/// Invariant: the mark added by move `n` belongs to X for odd `n`, O for even.
///
/// Together with the derived turn in [`GameHistory::next_mark`] this rules
/// out any desync between the recorded marks and whose turn it is.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.snapshots()
            .windows(2)
            .enumerate()
            .all(|(turn, pair)| {
                let expected = if turn % 2 == 0 { Player::X } else { Player::O };
                pair[0]
                    .changed_positions(&pair[1])
                    .iter()
                    .all(|pos| pair[1].get(*pos) == Square::Occupied(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let game = GameHistory::replay(&[0, 1, 2, 3]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_player_violates() {
        let mut game = GameHistory::replay(&[0]).unwrap();
        let again = game.snapshots[1].with_mark(Position::Center, Player::X);
        game.snapshots.push(again);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
