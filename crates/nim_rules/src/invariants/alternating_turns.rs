//! Alternating turn invariant: players move 1, 2, 1, 2, ...

use super::{GameRecord, Invariant};
use crate::types::Player;

/// Invariant: history alternates starting with player 1, and the player to
/// move follows the last recorded mover.
pub struct AlternatingTurns;

impl<G: GameRecord> Invariant<G> for AlternatingTurns {
    fn holds(game: &G) -> bool {
        let history = game.history();

        if history.first().is_some_and(|first| first.player != Player::One) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match (game.to_move(), history.last()) {
            (Some(next), Some(last)) => next == last.player.opponent(),
            (Some(next), None) => next == Player::One,
            (None, _) => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player 1"
    }
}
