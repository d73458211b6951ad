//! Game configuration.

use crate::board::{Board, BoardError};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Default board dimension.
pub const DEFAULT_SIZE: usize = 8;

/// Default number of chips placed on a new board.
pub const DEFAULT_CHIPS: usize = 15;

/// Parameters for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct GameConfig {
    /// Board dimension (rows and columns).
    #[serde(default = "default_size")]
    size: usize,

    /// Number of chips placed at random.
    #[serde(default = "default_chips")]
    chips: usize,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_chips() -> usize {
    DEFAULT_CHIPS
}

impl GameConfig {
    /// Builds a fresh random board for this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] when the configuration cannot produce a board.
    #[instrument(skip(rng))]
    pub fn board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        Board::random(self.size, self.chips, rng)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_CHIPS)
    }
}
