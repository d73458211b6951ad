//! First-class invariants for Super Nim.
//!
//! Invariants are properties that must hold throughout a game. They are
//! checked against a game's recorded history, in debug builds after every
//! move, and are testable on their own.

use crate::board::Board;
use crate::types::{Move, Player};

mod alternating_turns;
mod cleared_lines;
mod monotonic_chips;

pub use alternating_turns::AlternatingTurns;
pub use cleared_lines::ClearedLinesStayEmpty;
pub use monotonic_chips::MonotonicChips;

/// Read access to a game's recorded state, shared by every phase.
pub trait GameRecord {
    /// The board as it was when the game started.
    fn initial_board(&self) -> &Board;

    /// The current board.
    fn board(&self) -> &Board;

    /// Every accepted move, oldest first.
    fn history(&self) -> &[Move];

    /// The player to move, or `None` once the game is over.
    fn to_move(&self) -> Option<Player>;
}

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// All Super Nim invariants as a composable set.
pub type NimInvariants = (MonotonicChips, AlternatingTurns, ClearedLinesStayEmpty);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typestate::{AwaitingMove, GameResult};
    use crate::types::Line;

    fn in_progress() -> AwaitingMove {
        let board = Board::from_chips(3, &[(0, 0), (1, 1), (2, 2), (2, 0)]).unwrap();
        match AwaitingMove::replay(board, &[Line::row(0), Line::column(1)]) {
            Ok(GameResult::AwaitingMove(game)) => game,
            _ => panic!("Expected in-progress game"),
        }
    }

    #[test]
    fn test_set_holds_after_moves() {
        assert!(NimInvariants::check_all(&in_progress()).is_ok());
    }

    #[test]
    fn test_set_reports_every_violation() {
        let mut game = in_progress();
        // Put a chip back on a cleared row and hand the turn to the wrong player.
        game.board = Board::from_chips(3, &[(0, 1), (2, 2), (2, 0)]).unwrap();
        game.to_move = game.to_move.opponent();

        let violations = NimInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Pair = (MonotonicChips, AlternatingTurns);
        assert!(Pair::check_all(&in_progress()).is_ok());
    }
}
