//! Monotonic chips invariant: chips are only ever removed.

use super::{GameRecord, Invariant};

/// Invariant: every recorded move removed at least one chip, and replaying
/// the history from the initial board reproduces the current board.
pub struct MonotonicChips;

impl<G: GameRecord> Invariant<G> for MonotonicChips {
    fn holds(game: &G) -> bool {
        let mut replayed = game.initial_board().clone();

        for mov in game.history() {
            let before = replayed.occupied_count();
            replayed.clear(mov.line);
            if replayed.occupied_count() >= before {
                return false;
            }
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Every move removes chips and none are ever added"
    }
}
