//! Game controller tests: turn ownership, end-of-game handling, undo.

use minimax_chess::board::{Board, Color, MoveError, Square, UndoError, STARTING_FEN};
use minimax_chess::game::{Game, GameConfig, GameOutcome};

const FOOLS_MATE_SETUP: &str = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2";

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn game(player_color: Color, ai_depth: u32, start_fen: Option<&str>) -> Game {
    Game::new(GameConfig {
        player_color,
        ai_depth,
        start_fen: start_fen.map(str::to_string),
    })
    .expect("valid config")
}

#[test]
fn new_game_starts_with_player_white() {
    let mut game = Game::new(GameConfig::default()).unwrap();
    assert!(game.is_player_turn());
    assert!(!game.is_engine_turn());
    assert_eq!(game.fen(), STARTING_FEN);
    assert_eq!(game.status_message(), "White to move.");
    assert_eq!(game.legal_moves().len(), 20);
    assert!(game.is_legal_move(sq("g1"), sq("f3"), None));
    assert!(!game.is_legal_move(sq("g1"), sq("g3"), None));
    assert_eq!(game.outcome(), None);
}

#[test]
fn player_move_then_engine_reply() {
    let mut game = game(Color::White, 1, None);
    let mv = game.play_player_move(sq("e2"), sq("e4"), None).unwrap();
    assert_eq!(mv.to_string(), "e2e4");
    assert!(game.is_engine_turn());
    assert_eq!(game.status_message(), "Black to move.");

    let result = game.play_engine_move().unwrap().expect("engine has moves");
    assert_eq!(result.best_move.color(), Color::Black);
    assert_eq!(game.history(), &[mv, result.best_move]);
    assert!(game.is_player_turn());
}

#[test]
fn rejected_moves_leave_no_trace() {
    let mut game = game(Color::White, 1, None);

    assert!(matches!(
        game.play_player_move(sq("e2"), sq("e5"), None),
        Err(MoveError::IllegalMove { .. })
    ));
    assert_eq!(game.play_engine_move(), Err(MoveError::NotYourTurn));
    assert_eq!(game.fen(), STARTING_FEN);
    assert!(game.history().is_empty());

    game.play_player_notation("d2d4").unwrap();
    let fen = game.fen();
    assert_eq!(
        game.play_player_move(sq("d7"), sq("d5"), None),
        Err(MoveError::NotYourTurn)
    );
    assert_eq!(game.fen(), fen);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn undo_retracts_full_turn() {
    let mut game = game(Color::White, 1, None);
    assert_eq!(game.undo_turn(), Err(UndoError::EmptyHistory));

    game.play_player_notation("e2e4").unwrap();
    game.play_engine_move().unwrap();
    assert_eq!(game.undo_turn(), Ok(2));
    assert_eq!(*game.board(), Board::new());
    assert!(game.history().is_empty());
    assert!(game.is_player_turn());
}

#[test]
fn undo_when_engine_moved_first() {
    let mut game = game(Color::Black, 1, None);
    assert!(game.is_engine_turn());
    game.play_engine_move().unwrap().expect("engine has moves");
    assert!(game.is_player_turn());

    assert_eq!(game.undo_turn(), Ok(1));
    assert_eq!(game.fen(), STARTING_FEN);
    assert!(game.is_engine_turn());
}

#[test]
fn player_checkmate_ends_game() {
    let mut game = game(Color::Black, 2, Some(FOOLS_MATE_SETUP));
    game.play_player_notation("d8h4").unwrap();

    assert_eq!(
        game.outcome(),
        Some(GameOutcome::Checkmate {
            winner: Color::Black
        })
    );
    assert!(game.is_over());
    assert_eq!(game.status_message(), "Game over: Black wins by checkmate.");
    assert_eq!(game.play_engine_move(), Err(MoveError::GameOver));

    assert_eq!(game.undo_turn(), Ok(1));
    assert_eq!(game.outcome(), None);
    assert_eq!(game.fen(), FOOLS_MATE_SETUP);
}

#[test]
fn engine_delivers_mate() {
    let mut game = game(Color::Black, 2, Some("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1"));
    let result = game.play_engine_move().unwrap().expect("engine has moves");
    assert_eq!(result.best_move.to_string(), "a1a8");
    assert_eq!(
        game.outcome().and_then(GameOutcome::winner),
        Some(Color::White)
    );
    assert_eq!(
        game.play_player_move(sq("g8"), sq("h8"), None),
        Err(MoveError::GameOver)
    );
}

#[test]
fn load_position_classifies_and_is_atomic() {
    let mut game = game(Color::White, 1, None);
    game.play_player_notation("e2e4").unwrap();
    let before = game.fen();

    assert!(game.load_position("not a fen").is_err());
    assert_eq!(game.fen(), before);
    assert_eq!(game.history().len(), 1);

    game.load_position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(game.outcome(), Some(GameOutcome::Stalemate));
    assert_eq!(game.status_message(), "Game over: Draw by stalemate.");
    assert!(game.history().is_empty());

    game.load_position("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(game.outcome(), Some(GameOutcome::InsufficientMaterial));

    game.load_position("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();
    assert_eq!(game.outcome(), None);
    assert_eq!(game.status_message(), "CHECK -- Black to move.");
    assert!(game.is_engine_turn());
}

#[test]
fn fifty_move_rule_ends_game() {
    let mut game = game(Color::White, 1, Some("4k3/8/8/8/8/8/8/R3K3 w - - 49 60"));
    game.play_player_notation("a1a2").unwrap();
    assert_eq!(game.outcome(), Some(GameOutcome::FiftyMoveRule));
    assert_eq!(game.status_message(), "Game over: Draw by fifty-move rule.");
}

#[test]
fn reset_returns_to_configured_start() {
    let start = "4k3/8/8/8/8/8/8/R3K3 w Q - 0 1";
    let mut game = game(Color::White, 1, Some(start));
    game.play_player_notation("a1a7").unwrap();
    game.reset();
    assert_eq!(game.fen(), start);
    assert!(game.history().is_empty());
    assert!(game.is_player_turn());
}

#[test]
fn invalid_start_position_is_rejected() {
    let config = GameConfig {
        start_fen: Some("8/8/8 w - - 0 1".to_string()),
        ..GameConfig::default()
    };
    assert!(Game::new(config).is_err());
}
