//! Game orchestration between two players sharing one frontend.

use crate::frontend::{Frontend, FrontendError, GameEvent};
use nim_rules::{Board, GameOver, GameResult, GameStart};
use tracing::{debug, info, instrument};

/// Drives a game from start to finish through a frontend.
///
/// Exactly one move request is outstanding at a time; the game only advances
/// once the frontend returns a validated move.
pub struct Orchestrator<F> {
    frontend: F,
}

impl<F: Frontend> Orchestrator<F> {
    /// Creates a new orchestrator.
    pub fn new(frontend: F) -> Self {
        Self { frontend }
    }

    /// Consumes the orchestrator, returning the frontend.
    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Runs the game loop on `board` until it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError`] if the frontend fails, including
    /// [`FrontendError::IllegalMove`] when it hands back a move that does
    /// not apply to the current board.
    #[instrument(skip(self, board), fields(size = board.size(), chips = board.occupied_count()))]
    pub fn run(&mut self, board: Board) -> Result<GameOver, FrontendError> {
        info!("Starting game orchestration");
        self.frontend.notify(&GameEvent::Started { board: &board })?;

        let mut game = match GameStart::new(board).start() {
            GameResult::AwaitingMove(game) => game,
            GameResult::GameOver(over) => return self.finish(over),
        };

        loop {
            let player = game.to_move();
            self.frontend.notify(&GameEvent::TurnStarted { player })?;

            debug!(%player, "Waiting for move");
            let mv = self.frontend.request_move(&game)?;

            game = match game.play(mv)? {
                GameResult::AwaitingMove(next) => {
                    self.frontend.notify(&GameEvent::MoveMade {
                        player,
                        line: mv.line(),
                        board: next.board(),
                    })?;
                    next
                }
                GameResult::GameOver(over) => {
                    self.frontend.notify(&GameEvent::MoveMade {
                        player,
                        line: mv.line(),
                        board: over.board(),
                    })?;
                    return self.finish(over);
                }
            };
        }
    }

    fn finish(&mut self, over: GameOver) -> Result<GameOver, FrontendError> {
        info!(outcome = %over.outcome(), moves = over.history().len(), "Game over");
        self.frontend.notify(&GameEvent::GameOver {
            outcome: *over.outcome(),
        })?;
        Ok(over)
    }
}
