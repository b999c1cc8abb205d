//! Headless tic-tac-toe game state with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules** ([`rules`]): pure evaluation of a single [`Board`] snapshot
//!   (winner, legality, status text).
//! - **History** ([`GameHistory`]): the ordered snapshots of one game and
//!   the pointer to the active one; the only stateful type.
//! - **Contracts / invariants**: pre- and postconditions guarding the two
//!   history mutators, checked in debug builds.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameHistory, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.status(), "Winner: X");
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.next_mark(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod history;
mod position;
mod types;

// Public modules
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports
pub use error::{BoardParseError, GameError, IllegalMove, OutOfRange};
pub use history::{GameHistory, MAX_SNAPSHOTS, MoveEntry};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

/// The mark a player writes into a square.
pub type Mark = Player;
