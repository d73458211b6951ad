//! The boundary between the game and whatever presents it.

use nim_rules::{AwaitingMove, Board, Line, MoveError, Outcome, Player, ValidMove};

/// Something that happened in the game, for a frontend to present.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    /// A new game started on this board.
    Started {
        /// The starting board.
        board: &'a Board,
    },
    /// A player is about to be asked for a move.
    TurnStarted {
        /// The player to move.
        player: Player,
    },
    /// A move was played.
    MoveMade {
        /// Who moved.
        player: Player,
        /// The line they cleared.
        line: Line,
        /// The board after the move.
        board: &'a Board,
    },
    /// The game ended.
    GameOver {
        /// How it ended.
        outcome: Outcome,
    },
}

/// Fatal frontend failure. Bad input is never one of these; frontends
/// re-prompt until they have a valid move.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum FrontendError {
    /// Reading or writing failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// The input ended before a valid move was entered.
    #[display("Input closed before a move was entered")]
    #[from(ignore)]
    InputClosed,

    /// The frontend returned a move the game no longer accepts.
    #[display("Frontend returned an illegal move: {_0}")]
    IllegalMove(MoveError),
}

impl std::error::Error for FrontendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrontendError::Io(err) => Some(err),
            FrontendError::InputClosed => None,
            FrontendError::IllegalMove(err) => Some(err),
        }
    }
}

/// Presents a game and collects moves from the players.
pub trait Frontend {
    /// Presents a game event.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError`] if the event could not be presented.
    fn notify(&mut self, event: &GameEvent<'_>) -> Result<(), FrontendError>;

    /// Asks the player to move until a valid move is given.
    ///
    /// The move must be validated against `game` as it is now.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError`] only for failures that end the game.
    fn request_move(&mut self, game: &AwaitingMove) -> Result<ValidMove, FrontendError>;
}

impl<F: Frontend + ?Sized> Frontend for &mut F {
    fn notify(&mut self, event: &GameEvent<'_>) -> Result<(), FrontendError> {
        (**self).notify(event)
    }

    fn request_move(&mut self, game: &AwaitingMove) -> Result<ValidMove, FrontendError> {
        (**self).request_move(game)
    }
}
