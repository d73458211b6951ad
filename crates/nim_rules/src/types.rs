//! Core domain types for Super Nim.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player 1 (moves first).
    #[display("1")]
    One,
    /// Player 2.
    #[display("2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No chip.
    #[default]
    Empty,
    /// Holds a chip.
    Occupied,
}

impl Cell {
    /// Returns true if the cell holds a chip.
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied)
    }
}

/// Direction of a move: a whole row or a whole column.
///
/// Parses case-insensitively from `row`/`r` and `column`/`col`/`c`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Axis {
    /// A horizontal line.
    #[display("row")]
    #[strum(serialize = "row", serialize = "r")]
    Row,
    /// A vertical line.
    #[display("column")]
    #[strum(serialize = "column", serialize = "col", serialize = "c")]
    Column,
}

/// A row or column of the board, identified by an in-range index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{axis} {index}")]
pub struct Line {
    /// Whether this is a row or a column.
    pub axis: Axis,
    /// Zero-based index of the line.
    pub index: usize,
}

impl Line {
    /// Creates a new line.
    pub fn new(axis: Axis, index: usize) -> Self {
        Self { axis, index }
    }

    /// Row `index`.
    pub fn row(index: usize) -> Self {
        Self::new(Axis::Row, index)
    }

    /// Column `index`.
    pub fn column(index: usize) -> Self {
        Self::new(Axis::Column, index)
    }
}

/// An accepted move: a player clearing a line.
///
/// Moves are recorded in the game history so invariants can replay them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("player {player} cleared {line}")]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// The line that was cleared.
    pub line: Line,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, line: Line) -> Self {
        Self { player, line }
    }
}
