//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// One immutable snapshot of the 3x3 board.
///
/// Squares are stored in row-major order, so index = row * 3 + col.
/// There is no in-place setter: [`Board::with_mark`] returns a new board,
/// which keeps every snapshot held in a history valid after later moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Positions whose square differs between `self` and `other`.
    pub fn changed_positions(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }

    /// Renders the board as a 3-line grid using the given symbols.
    pub fn render(&self, x: &str, o: &str, empty: &str) -> String {
        self.grid(|_, square| match square {
            Square::Empty => empty.to_string(),
            Square::Occupied(Player::X) => x.to_string(),
            Square::Occupied(Player::O) => o.to_string(),
        })
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so a reader can pick a cell.
    pub fn display(&self) -> String {
        self.grid(|pos, square| match square {
            Square::Empty => pos.to_string(),
            Square::Occupied(player) => player.to_string(),
        })
    }

    fn grid(&self, symbol: impl Fn(usize, Square) -> String) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                result.push_str(&symbol(pos, self.squares[pos]));
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Parses nine cells in row-major order.
///
/// `X`/`x` and `O`/`o` are marks; `.`, `-`, `_` and space are empty.
/// Newlines and `|` separators are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;
        for ch in s.chars().filter(|c| *c != '\n' && *c != '\r' && *c != '|') {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            if count == 9 {
                return Err(BoardParseError::new("more than 9 cells".to_string()));
            }
            squares[count] = square;
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::new(format!(
                "expected 9 cells, found {}",
                count
            )));
        }
        Ok(Self { squares })
    }
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert_eq!(board.get(Position::Center), Square::Empty);
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_changed_positions() {
        let before = Board::new().with_mark(Position::TopLeft, Player::X);
        let after = before.with_mark(Position::BottomRight, Player::O);
        assert_eq!(before.changed_positions(&after), vec![Position::BottomRight]);
        assert!(after.changed_positions(&after).is_empty());
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO.\n.X.\n..O".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
        assert!("XOZ......".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_shows_indices_for_empty() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(board.display(), "0|1|2\n-+-+-\n3|X|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_render_with_symbols() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::BottomRight, Player::O);
        assert_eq!(board.render("X", "○", " "), "X| | \n-+-+-\n | | \n-+-+-\n | |○");
    }
}
