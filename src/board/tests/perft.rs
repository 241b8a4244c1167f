//! Perft (performance test) for move generation correctness.

use super::{fen, sq};
use crate::board::{Board, Color, Move, Piece};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264)],
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707)],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496)],
    },
];

#[test]
fn test_perft_positions() {
    for position in TEST_POSITIONS {
        let mut board = fen(position.fen);
        for &(depth, expected) in position.depths {
            let nodes = board.perft(depth);
            assert_eq!(
                nodes, expected,
                "{} perft({depth}) returned {nodes}, expected {expected}",
                position.name
            );
        }
        assert_eq!(board.to_fen(), position.fen, "{} was not restored", position.name);
    }
}

#[test]
fn test_pseudo_legal_includes_pinned_moves() {
    // The e2 knight is pinned against the king by the e8 rook.
    let mut board = fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    fn knight_moves(moves: &[Move]) -> usize {
        moves.iter().filter(|m| m.piece().1 == Piece::Knight).count()
    }

    let pseudo = board.generate_pseudo_legal_moves(Color::White);
    let legal = board.generate_legal_moves(Color::White);
    assert_eq!(knight_moves(&pseudo), 6);
    assert_eq!(knight_moves(&legal), 0);
}

#[test]
fn test_promotion_expands_to_four_moves() {
    let mut board = fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<Piece> = board
        .generate_moves()
        .into_iter()
        .filter(|m| m.from() == sq("a7"))
        .filter_map(Move::promotion)
        .collect();
    assert_eq!(
        promotions,
        vec![Piece::Queen, Piece::Rook, Piece::Knight, Piece::Bishop]
    );
}

#[test]
fn test_capture_promotion() {
    let mut board = fen("1r5k/P7/8/8/8/8/8/K7 w - - 0 1");
    let captures: Vec<Move> = board
        .generate_moves()
        .into_iter()
        .filter(|m| m.to() == sq("b8"))
        .collect();
    assert_eq!(captures.len(), 4);
    assert!(captures
        .iter()
        .all(|m| m.captured() == Some((Color::Black, Piece::Rook)) && m.is_promotion()));
}

#[test]
fn test_blocked_pawn_has_no_pushes() {
    let mut board = fen("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1");
    assert!(board
        .generate_moves()
        .iter()
        .all(|m| m.piece().1 != Piece::Pawn));
}

#[test]
fn test_en_passant_only_for_side_to_move() {
    let board = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let white = board.generate_pseudo_legal_moves(Color::White);
    assert!(white.iter().any(|m| m.is_en_passant() && m.to() == sq("d6")));

    let black = board.generate_pseudo_legal_moves(Color::Black);
    assert!(black.iter().all(|m| !m.is_en_passant()));
}

#[test]
fn test_castling_generated_when_clear() {
    let mut board = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let castles: Vec<String> = board
        .generate_moves()
        .into_iter()
        .filter(|m| m.is_castling())
        .map(|m| m.to_string())
        .collect();
    assert_eq!(castles.len(), 2);
    assert!(castles.contains(&"e1g1".to_string()));
    assert!(castles.contains(&"e1c1".to_string()));
}

#[test]
fn test_starting_position_moves() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| m.piece().1 == Piece::Knight).count(), 4);
    assert!(moves.iter().all(|m| m.color() == Color::White && !m.is_capture()));
}
