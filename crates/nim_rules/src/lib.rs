//! Pure Super Nim game logic.
//!
//! Super Nim is played on a square board holding a fixed number of chips.
//! Two players take turns clearing every chip from a row or a column; the
//! player who clears the last chip wins.
//!
//! # Architecture
//!
//! - **Board**: the grid and its occupancy queries
//! - **Rules**: validation and application of move requests
//! - **Typestate**: the turn controller, one type per game phase
//! - **Invariants**: properties checked against a game's move history
//!
//! # Example
//!
//! ```
//! use nim_rules::{Axis, Board, GameResult, GameStart, MoveRequest, Outcome, Player};
//!
//! let board = Board::from_chips(2, &[(0, 0), (1, 1)]).unwrap();
//! let GameResult::AwaitingMove(game) = GameStart::new(board).start() else {
//!     panic!("board has chips");
//! };
//!
//! let row_zero = game.validate(MoveRequest::new(Axis::Row, 0)).unwrap();
//! let GameResult::AwaitingMove(game) = game.play(row_zero).unwrap() else {
//!     panic!("one chip left");
//! };
//!
//! let row_one = game.validate(MoveRequest::new(Axis::Row, 1)).unwrap();
//! let GameResult::GameOver(over) = game.play(row_one).unwrap() else {
//!     panic!("board is empty");
//! };
//! assert_eq!(over.outcome(), &Outcome::Winner(Player::Two));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod invariants;
mod rules;
mod types;
mod typestate;

pub use board::{Board, BoardError};
pub use config::GameConfig;
pub use invariants::{
    AlternatingTurns, ClearedLinesStayEmpty, GameRecord, Invariant, InvariantSet, InvariantViolation,
    MonotonicChips, NimInvariants,
};
pub use rules::{MoveError, MoveRequest, ValidMove, apply_move, legal_moves, validate_move};
pub use types::{Axis, Cell, Line, Move, Player};
pub use typestate::{AwaitingMove, GameOver, GameResult, GameStart, Outcome};
