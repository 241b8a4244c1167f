//! Property-based tests using proptest.

use crate::board::{Board, Color, Move};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the initial position.
fn random_playout(seed: u64, num_moves: usize) -> (Board, Vec<Move>) {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        board.make_move(mv);
        played.push(mv);
    }
    (board, played)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: undoing every move restores the initial board exactly
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, played) = random_playout(seed, num_moves);
        prop_assert_eq!(board.history_len(), played.len());

        for expected in played.iter().rev() {
            let undone = board.undo_move();
            prop_assert_eq!(undone, Ok(*expected));
        }
        prop_assert_eq!(board, Board::new());
    }

    /// Property: a single make/undo pair is the identity, from any reachable position
    #[test]
    fn prop_single_move_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, _) = random_playout(seed, num_moves);
        let snapshot = board.clone();
        for mv in board.generate_moves() {
            board.make_move(mv);
            board.undo_move().unwrap();
            prop_assert_eq!(&board, &snapshot);
        }
    }

    /// Property: legal moves are pseudo-legal and never leave the mover in check
    #[test]
    fn prop_legal_moves_are_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, _) = random_playout(seed, num_moves);
        let color = board.side_to_move();
        let pseudo = board.generate_pseudo_legal_moves(color);
        let legal = board.generate_legal_moves(color);

        for mv in legal {
            prop_assert!(pseudo.contains(&mv));
            let after = board.play(mv);
            prop_assert!(!after.in_check(color), "{} leaves {} in check", mv, color);
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);
        let fen = board.to_fen();
        let parsed = Board::try_from_fen(&fen);
        prop_assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            prop_assert_eq!(parsed.to_fen(), fen);
            prop_assert_eq!(parsed.evaluate(), board.evaluate());
        }
    }

    /// Property: the two kings are never adjacent and both are always present
    #[test]
    fn prop_kings_survive(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);
        let white = board.find_king(Color::White);
        let black = board.find_king(Color::Black);
        prop_assert!(white.is_some() && black.is_some());
        if let (Some(w), Some(b)) = (white, black) {
            let distance = w.rank().abs_diff(b.rank()).max(w.file().abs_diff(b.file()));
            prop_assert!(distance > 1);
        }
    }
}
