//! Line-based console frontend.
//!
//! Renders the board as text and reads moves as two answers: an axis
//! (`row` or `col`) and an index. Anything unparseable or illegal is
//! reported and asked again.

use crate::frontend::{Frontend, FrontendError, GameEvent};
use nim_rules::{AwaitingMove, Axis, MoveRequest, Outcome, ValidMove};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Input that could not be parsed into a move request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The axis answer was neither a row nor a column token.
    #[display("Unrecognized direction {_0:?}. Enter 'row' or 'col'.")]
    UnknownAxis(String),

    /// The index answer was not an integer.
    #[display("{_0:?} is not a whole number. Enter an integer index.")]
    NotAnInteger(String),
}

impl std::error::Error for InputError {}

/// Parses an axis token, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::UnknownAxis`] for anything else.
pub fn parse_axis(input: &str) -> Result<Axis, InputError> {
    let token = input.trim();
    token
        .parse()
        .map_err(|_| InputError::UnknownAxis(token.to_string()))
}

/// Parses a line index, ignoring surrounding whitespace.
///
/// Negative numbers parse; range checks belong to move validation.
///
/// # Errors
///
/// Returns [`InputError::NotAnInteger`] if the input is not an integer.
pub fn parse_index(input: &str) -> Result<i64, InputError> {
    let token = input.trim();
    token
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_string()))
}

/// Console frontend over any line reader and writer.
///
/// Production uses locked stdin and stdout; tests use in-memory buffers.
#[derive(Debug)]
pub struct ConsoleFrontend<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    /// Creates a console frontend.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the frontend, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Prints a prompt and reads one answer.
    fn ask(&mut self, prompt: &str) -> Result<String, FrontendError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            warn!("Input closed while waiting for a move");
            return Err(FrontendError::InputClosed);
        }
        Ok(line)
    }

    /// One round of questions: `Ok(Err(_))` means "report and ask again".
    fn ask_once(
        &mut self,
        game: &AwaitingMove,
    ) -> Result<Result<ValidMove, String>, FrontendError> {
        let answer = self.ask("Enter 'row' to clear a row or 'col' to clear a column: ")?;
        let axis = match parse_axis(&answer) {
            Ok(axis) => axis,
            Err(err) => return Ok(Err(err.to_string())),
        };

        let answer = self.ask(&format!("Enter the {axis} index: "))?;
        let index = match parse_index(&answer) {
            Ok(index) => index,
            Err(err) => return Ok(Err(err.to_string())),
        };

        Ok(game
            .validate(MoveRequest::new(axis, index))
            .map_err(|err| format!("{err}. Try again.")))
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn notify(&mut self, event: &GameEvent<'_>) -> Result<(), FrontendError> {
        match event {
            GameEvent::Started { board } => {
                writeln!(self.writer, "Welcome to Super Nim!")?;
                write!(self.writer, "{board}")?;
            }
            GameEvent::TurnStarted { player } => {
                writeln!(self.writer)?;
                writeln!(self.writer, "Player {player} to move.")?;
            }
            GameEvent::MoveMade {
                player,
                line,
                board,
            } => {
                writeln!(self.writer, "Player {player} cleared {line}.")?;
                write!(self.writer, "{board}")?;
            }
            GameEvent::GameOver { outcome } => match outcome {
                Outcome::Winner(player) => {
                    writeln!(self.writer, "Game over! Player {player} wins!")?;
                }
                Outcome::EmptyBoard => {
                    writeln!(self.writer, "The board has no chips. Game over before the first move.")?;
                }
            },
        }
        self.writer.flush()?;
        Ok(())
    }

    #[instrument(skip(self, game), fields(player = %game.to_move()))]
    fn request_move(&mut self, game: &AwaitingMove) -> Result<ValidMove, FrontendError> {
        loop {
            match self.ask_once(game)? {
                Ok(mv) => {
                    debug!(line = %mv.line(), "Accepted move");
                    return Ok(mv);
                }
                Err(message) => {
                    debug!(%message, "Rejected input");
                    writeln!(self.writer, "{message}")?;
                }
            }
        }
    }
}
