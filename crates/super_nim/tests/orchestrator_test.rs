//! Orchestrator behaviour with a scripted, non-console frontend.

use nim_rules::{
    AwaitingMove, Axis, Board, Line, MoveError, MoveRequest, Outcome, Player, ValidMove,
};
use std::collections::VecDeque;
use super_nim::{Frontend, FrontendError, GameEvent, Orchestrator};

/// Frontend that plays a fixed list of requests, skipping any the game rejects.
#[derive(Default)]
struct ScriptedFrontend {
    requests: VecDeque<MoveRequest>,
    events: Vec<String>,
    rejected: usize,
}

impl ScriptedFrontend {
    fn new(requests: &[(Axis, i64)]) -> Self {
        Self {
            requests: requests
                .iter()
                .map(|&(axis, index)| MoveRequest::new(axis, index))
                .collect(),
            ..Self::default()
        }
    }
}

impl Frontend for ScriptedFrontend {
    fn notify(&mut self, event: &GameEvent<'_>) -> Result<(), FrontendError> {
        let entry = match event {
            GameEvent::Started { board } => format!("start {}", board.occupied_count()),
            GameEvent::TurnStarted { player } => format!("turn {player}"),
            GameEvent::MoveMade { player, line, board } => {
                format!("{player}: {line} -> {}", board.occupied_count())
            }
            GameEvent::GameOver { outcome } => format!("over {outcome}"),
        };
        self.events.push(entry);
        Ok(())
    }

    fn request_move(&mut self, game: &AwaitingMove) -> Result<ValidMove, FrontendError> {
        while let Some(request) = self.requests.pop_front() {
            match game.validate(request) {
                Ok(mv) => return Ok(mv),
                Err(_) => self.rejected += 1,
            }
        }
        Err(FrontendError::InputClosed)
    }
}

#[test]
fn test_event_sequence_for_full_game() {
    let board = Board::from_chips(2, &[(0, 0), (1, 1)]).unwrap();
    let mut frontend = ScriptedFrontend::new(&[(Axis::Row, 0), (Axis::Row, 1)]);

    let over = Orchestrator::new(&mut frontend).run(board).unwrap();

    assert_eq!(over.winner(), Some(Player::Two));
    assert_eq!(
        frontend.events,
        vec![
            "start 2",
            "turn 1",
            "1: row 0 -> 1",
            "turn 2",
            "2: row 1 -> 0",
            "over Player 2 wins",
        ]
    );
}

#[test]
fn test_rejected_requests_do_not_pass_the_turn() {
    let board = Board::from_chips(3, &[(0, 0), (0, 2), (2, 1)]).unwrap();
    let mut frontend = ScriptedFrontend::new(&[
        (Axis::Row, 1),
        (Axis::Column, 7),
        (Axis::Row, 0),
        (Axis::Row, 0),
        (Axis::Column, 1),
    ]);

    let over = Orchestrator::new(&mut frontend).run(board).unwrap();

    assert_eq!(frontend.rejected, 3);
    assert_eq!(over.winner(), Some(Player::Two));
    assert_eq!(
        over.history().iter().map(|m| m.line).collect::<Vec<_>>(),
        vec![Line::row(0), Line::column(1)]
    );
}

#[test]
fn test_empty_board_reports_without_turns() {
    let board = Board::from_chips(3, &[]).unwrap();
    let mut frontend = ScriptedFrontend::new(&[]);

    let over = Orchestrator::new(&mut frontend).run(board).unwrap();

    assert_eq!(over.outcome(), &Outcome::EmptyBoard);
    assert_eq!(frontend.events, vec!["start 0", "over The board started empty"]);
}

/// Frontend that returns the first move it ever validated, every turn.
#[derive(Default)]
struct RepeatingFrontend {
    first: Option<ValidMove>,
}

impl Frontend for RepeatingFrontend {
    fn notify(&mut self, _event: &GameEvent<'_>) -> Result<(), FrontendError> {
        Ok(())
    }

    fn request_move(&mut self, game: &AwaitingMove) -> Result<ValidMove, FrontendError> {
        let mv = match self.first {
            Some(mv) => mv,
            None => game.validate(MoveRequest::new(Axis::Row, 0))?,
        };
        self.first = Some(mv);
        Ok(mv)
    }
}

#[test]
fn test_repeated_move_from_frontend_is_an_error() {
    let board = Board::from_chips(3, &[(0, 0), (1, 1), (2, 2)]).unwrap();

    let result = Orchestrator::new(RepeatingFrontend::default()).run(board);

    assert!(matches!(
        result,
        Err(FrontendError::IllegalMove(MoveError::EmptyLine(line))) if line == Line::row(0)
    ));
}

#[test]
fn test_frontend_failure_propagates() {
    let board = Board::from_chips(2, &[(0, 0), (1, 1)]).unwrap();
    let mut frontend = ScriptedFrontend::new(&[(Axis::Row, 0)]);

    let result = Orchestrator::new(&mut frontend).run(board);

    assert!(matches!(result, Err(FrontendError::InputClosed)));
    assert_eq!(frontend.events.last().map(String::as_str), Some("turn 2"));
}
