//! Phase-specific typestate structs for the Super Nim turn controller.
//!
//! Each phase is its own type. Only [`AwaitingMove`] accepts moves, and a
//! [`GameOver`] always carries an [`Outcome`].

use crate::board::Board;
use crate::invariants::{GameRecord, InvariantSet, NimInvariants};
use crate::rules::{self, MoveError, MoveRequest, ValidMove};
use crate::types::{Line, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player who cleared the last chip.
    Winner(Player),
    /// The board held no chips, so no move was ever requested.
    EmptyBoard,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::EmptyBoard => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins"),
            Outcome::EmptyBoard => write!(f, "The board started empty"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Start Phase
// ─────────────────────────────────────────────────────────────

/// Game ready to start on a freshly generated board.
#[derive(Debug, Clone)]
pub struct GameStart {
    board: Board,
}

impl GameStart {
    /// Wraps a board for a new game.
    #[instrument(skip(board), fields(size = board.size(), chips = board.occupied_count()))]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with player 1 to move.
    ///
    /// A board without chips is finished before any move is requested.
    #[instrument(skip(self))]
    pub fn start(self) -> GameResult {
        if self.board.is_empty() {
            info!("Board has no chips, game over before first move");
            return GameResult::GameOver(GameOver {
                initial: self.board.clone(),
                board: self.board,
                history: Vec::new(),
                outcome: Outcome::EmptyBoard,
            });
        }

        GameResult::AwaitingMove(AwaitingMove {
            initial: self.board.clone(),
            board: self.board,
            history: Vec::new(),
            to_move: Player::One,
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  AwaitingMove Phase
// ─────────────────────────────────────────────────────────────

/// Game waiting for the current player's move.
///
/// The board always holds at least one chip.
#[derive(Debug, Clone)]
pub struct AwaitingMove {
    pub(crate) initial: Board,
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl AwaitingMove {
    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board as it was when the game started.
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates a move request against the current board.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the request is out of range or targets an
    /// empty line. The game is unchanged either way.
    pub fn validate(&self, request: MoveRequest) -> Result<ValidMove, MoveError> {
        rules::validate_move(&self.board, request)
    }

    /// Returns every valid move.
    pub fn legal_moves(&self) -> Vec<ValidMove> {
        rules::legal_moves(&self.board)
    }

    /// Plays a validated move, consuming self and transitioning to the next phase.
    ///
    /// Clearing the last chip ends the game with the mover as winner;
    /// otherwise the opponent moves next. Invariants are checked in debug
    /// builds.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if `mv` is no longer valid on this board,
    /// for instance a move that was already played.
    #[instrument(skip(self), fields(player = %self.to_move, line = %mv.line()))]
    pub fn play(self, mv: ValidMove) -> Result<GameResult, MoveError> {
        let mut game = self;
        rules::apply_move(&mut game.board, mv)?;
        game.history.push(Move::new(game.to_move, mv.line()));

        if game.board.is_empty() {
            info!(winner = %game.to_move, moves = game.history.len(), "Board cleared");
            let over = GameOver {
                initial: game.initial,
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner(game.to_move),
            };
            debug_assert_invariants(&over);
            return Ok(GameResult::GameOver(over));
        }

        game.to_move = game.to_move.opponent();
        debug!(next = %game.to_move, remaining = game.board.occupied_count(), "Turn passes");
        debug_assert_invariants(&game);
        Ok(GameResult::AwaitingMove(game))
    }

    /// Replays lines from a starting board, alternating players from player 1.
    ///
    /// Stops early if the board empties before the lines run out.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument(skip(board))]
    pub fn replay(board: Board, lines: &[Line]) -> Result<GameResult, MoveError> {
        let mut game = match GameStart::new(board).start() {
            GameResult::AwaitingMove(game) => game,
            over @ GameResult::GameOver(_) => return Ok(over),
        };

        for line in lines {
            let mv = game.validate(MoveRequest::new(line.axis, line.index as i64))?;
            match game.play(mv)? {
                GameResult::AwaitingMove(next) => game = next,
                over @ GameResult::GameOver(_) => return Ok(over),
            }
        }

        Ok(GameResult::AwaitingMove(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  GameOver Phase
// ─────────────────────────────────────────────────────────────

/// Finished game with an outcome.
#[derive(Debug, Clone)]
pub struct GameOver {
    initial: Board,
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameOver {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the winner, if any move was made.
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    /// Returns the final (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board as it was when the game started.
    pub fn initial_board(&self) -> &Board {
        &self.initial
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts on a fresh board (consumes the finished game).
    #[instrument(skip(self, board))]
    pub fn restart(self, board: Board) -> GameStart {
        GameStart::new(board)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of starting a game or making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Waiting for the next player's move.
    AwaitingMove(AwaitingMove),
    /// Game finished.
    GameOver(GameOver),
}

impl GameRecord for AwaitingMove {
    fn initial_board(&self) -> &Board {
        &self.initial
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn history(&self) -> &[Move] {
        &self.history
    }

    fn to_move(&self) -> Option<Player> {
        Some(self.to_move)
    }
}

impl GameRecord for GameOver {
    fn initial_board(&self) -> &Board {
        &self.initial
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn history(&self) -> &[Move] {
        &self.history
    }

    fn to_move(&self) -> Option<Player> {
        None
    }
}

fn debug_assert_invariants<G: GameRecord>(game: &G) {
    if cfg!(debug_assertions)
        && let Err(violations) = NimInvariants::check_all(game)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Invariant violation: {descriptions}");
    }
}
