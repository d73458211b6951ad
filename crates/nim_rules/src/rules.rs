//! Move validation and application.
//!
//! Moves are requested as an axis plus a raw index and must pass
//! [`validate_move`] before they can be applied. Validation produces a
//! [`ValidMove`], the only input [`apply_move`] accepts. A valid move is
//! checked again when applied, since the board may have changed since.

use crate::board::Board;
use crate::types::{Axis, Line};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A move as requested by a player, before validation.
///
/// The index is signed so that anything a player can type is representable.
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
    derive_new::new,
)]
#[display("{axis} {index}")]
pub struct MoveRequest {
    /// Row or column.
    pub axis: Axis,
    /// Requested line index.
    pub index: i64,
}

/// A move that passed validation against a board.
///
/// Only [`validate_move`] constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidMove {
    line: Line,
}

impl ValidMove {
    /// The line this move clears.
    pub fn line(&self) -> Line {
        self.line
    }
}

impl From<ValidMove> for MoveRequest {
    fn from(mv: ValidMove) -> Self {
        // Line indices come from a board, so they always fit in an i64.
        MoveRequest::new(mv.line.axis, mv.line.index as i64)
    }
}

/// Why a well-formed move request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside `0..size`.
    #[display("Index {index} is out of range (must be 0-{})", size - 1)]
    IndexOutOfRange {
        /// The requested index.
        index: i64,
        /// Board dimension.
        size: usize,
    },

    /// The line has no chips to remove.
    #[display("There are no chips in {_0}")]
    EmptyLine(Line),
}

impl std::error::Error for MoveError {}

/// Validates a move request against the board without mutating it.
///
/// # Errors
///
/// Returns [`MoveError::IndexOutOfRange`] for an index outside the board and
/// [`MoveError::EmptyLine`] for a line with no chips.
#[instrument(skip(board), fields(size = board.size()))]
pub fn validate_move(board: &Board, request: MoveRequest) -> Result<ValidMove, MoveError> {
    let size = board.size();
    let index = usize::try_from(request.index)
        .ok()
        .filter(|&index| index < size)
        .ok_or(MoveError::IndexOutOfRange {
            index: request.index,
            size,
        })?;

    let line = Line::new(request.axis, index);
    if !board.has_occupied_in(line) {
        debug!(%line, "Rejected move on empty line");
        return Err(MoveError::EmptyLine(line));
    }

    Ok(ValidMove { line })
}

/// Clears the line of a validated move.
///
/// The move is validated again against `board` first, so a move checked
/// against another board, or against this one before it changed, is
/// rejected. Returns the number of chips removed, always at least one.
///
/// # Errors
///
/// Returns the [`MoveError`] that [`validate_move`] gives on this board.
#[instrument(skip(board), fields(line = %mv.line))]
pub fn apply_move(board: &mut Board, mv: ValidMove) -> Result<usize, MoveError> {
    let mv = validate_move(board, mv.into())?;
    let removed = board.line_count(mv.line);
    board.clear(mv.line);
    debug!(removed, remaining = board.occupied_count(), "Applied move");
    Ok(removed)
}

/// Every move that would pass validation on this board.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<ValidMove> {
    Axis::iter()
        .flat_map(|axis| (0..board.size()).map(move |index| Line::new(axis, index)))
        .filter(|&line| board.has_occupied_in(line))
        .map(|line| ValidMove { line })
        .collect()
}
