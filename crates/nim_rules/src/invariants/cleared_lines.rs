//! Cleared lines invariant: a line stays empty once cleared.

use super::{GameRecord, Invariant};

/// Invariant: every line named in the history is empty on the current board.
pub struct ClearedLinesStayEmpty;

impl<G: GameRecord> Invariant<G> for ClearedLinesStayEmpty {
    fn holds(game: &G) -> bool {
        game.history()
            .iter()
            .all(|mov| !game.board().has_occupied_in(mov.line))
    }

    fn description() -> &'static str {
        "Cleared lines stay empty"
    }
}
