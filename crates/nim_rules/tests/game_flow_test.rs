//! Tests for the typestate turn controller driven through the public API.

use nim_rules::{
    Axis, Board, GameResult, GameStart, InvariantSet, MoveError, MoveRequest, NimInvariants,
    Outcome, Player,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn test_two_by_two_scenario() {
    let board = Board::from_chips(2, &[(0, 0), (1, 1)]).unwrap();
    assert!(board.has_occupied_in_row(0));
    assert!(board.has_occupied_in_row(1));
    assert!(board.has_occupied_in_column(0));
    assert!(board.has_occupied_in_column(1));

    let GameResult::AwaitingMove(game) = GameStart::new(board).start() else {
        panic!("Board has chips");
    };
    assert_eq!(game.to_move(), Player::One);

    let mv = game.validate(MoveRequest::new(Axis::Row, 0)).unwrap();
    let GameResult::AwaitingMove(game) = game.play(mv).unwrap() else {
        panic!("One chip remains");
    };
    assert_eq!(game.board().chips(), vec![(1, 1)]);
    assert_eq!(game.to_move(), Player::Two);

    let mv = game.validate(MoveRequest::new(Axis::Row, 1)).unwrap();
    let GameResult::GameOver(over) = game.play(mv).unwrap() else {
        panic!("Board is empty");
    };
    assert_eq!(over.outcome(), &Outcome::Winner(Player::Two));
}

#[test]
fn test_zero_chip_board_finishes_before_any_move() {
    let board = Board::random(3, 0, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
    assert!(board.is_empty());
    match GameStart::new(board).start() {
        GameResult::GameOver(over) => {
            assert_eq!(over.outcome(), &Outcome::EmptyBoard);
            assert!(over.history().is_empty());
        }
        GameResult::AwaitingMove(_) => panic!("Nothing to play on an empty board"),
    }
}

#[test]
fn test_stale_move_does_not_pass_the_turn() {
    let board = Board::from_chips(3, &[(0, 0), (1, 1), (2, 2)]).unwrap();
    let GameResult::AwaitingMove(game) = GameStart::new(board).start() else {
        panic!("Board has chips");
    };
    let mv = game.validate(MoveRequest::new(Axis::Column, 1)).unwrap();
    let GameResult::AwaitingMove(game) = game.play(mv).unwrap() else {
        panic!("Two chips remain");
    };

    let result = game.clone().play(mv);
    assert_eq!(result.unwrap_err(), MoveError::EmptyLine(mv.line()));
    assert_eq!(game.board().occupied_count(), 2);
    assert_eq!(game.to_move(), Player::Two);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_validation_rejects_bounds_and_empty_lines() {
    let board = Board::from_chips(4, &[(1, 1)]).unwrap();
    let GameResult::AwaitingMove(game) = GameStart::new(board).start() else {
        panic!("Board has chips");
    };

    for axis in [Axis::Row, Axis::Column] {
        assert!(matches!(
            game.validate(MoveRequest::new(axis, -1)),
            Err(MoveError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            game.validate(MoveRequest::new(axis, 4)),
            Err(MoveError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            game.validate(MoveRequest::new(axis, 0)),
            Err(MoveError::EmptyLine(_))
        ));
    }
}

#[test]
fn test_random_play_terminates_monotonically() {
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let size = rng.gen_range(1..=8);
        let chips = rng.gen_range(1..=size * size);
        let board = Board::random(size, chips, &mut rng).unwrap();

        let mut game = match GameStart::new(board).start() {
            GameResult::AwaitingMove(game) => game,
            GameResult::GameOver(_) => panic!("seed {seed}: board has chips"),
        };
        let mut moves = 0;

        let over = loop {
            let before = game.board().occupied_count();
            let mover = game.to_move();
            let mv = *game
                .legal_moves()
                .choose(&mut rng)
                .expect("game awaiting a move has a legal move");
            moves += 1;

            match game.play(mv).expect("legal move applies") {
                GameResult::AwaitingMove(next) => {
                    assert!(next.board().occupied_count() < before, "seed {seed}");
                    assert!(NimInvariants::check_all(&next).is_ok());
                    game = next;
                }
                GameResult::GameOver(over) => {
                    assert_eq!(over.winner(), Some(mover), "seed {seed}");
                    break over;
                }
            }
        };

        assert!(over.board().is_empty());
        assert!(moves <= 2 * size, "seed {seed}: {moves} moves on size {size}");
        assert!(NimInvariants::check_all(&over).is_ok());
    }
}
