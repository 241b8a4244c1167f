//! Static evaluation tests.

use super::{fen, sq};
use crate::board::{Board, BoardBuilder, Color, Evaluator, Phase, Piece};

/// Flip the board top to bottom and swap the colours of every piece.
fn mirror(board: &Board) -> Board {
    board
        .pieces()
        .fold(BoardBuilder::new(), |builder, (square, color, piece)| {
            builder.piece(square.flip_vertical(), color.opponent(), piece)
        })
        .side_to_move(board.side_to_move().opponent())
        .build()
}

#[test]
fn test_starting_position_is_balanced() {
    assert_eq!(Board::new().evaluate(), 0);
    assert_eq!(Evaluator::new().evaluate(&Board::new()), 0);
}

#[test]
fn test_colour_mirror_negates_score() {
    let positions = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2",
        "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
    ];
    for fen_str in positions {
        let board = fen(fen_str);
        assert_eq!(board.evaluate(), -mirror(&board).evaluate(), "{fen_str}");
    }
}

#[test]
fn test_material_dominates() {
    let up_a_queen = fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert!(up_a_queen.evaluate() > 800);

    let down_a_rook = fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/1NBQKBNR w Kkq - 0 1");
    assert!(down_a_rook.evaluate() < -400);
}

#[test]
fn test_piece_values() {
    assert_eq!(Evaluator::piece_value(Piece::Pawn), 100);
    assert_eq!(Evaluator::piece_value(Piece::Knight), 320);
    assert_eq!(Evaluator::piece_value(Piece::Bishop), 320);
    assert_eq!(Evaluator::piece_value(Piece::Rook), 500);
    assert_eq!(Evaluator::piece_value(Piece::Queen), 900);
    assert_eq!(Evaluator::piece_value(Piece::King), 20000);
}

#[test]
fn test_positional_tables_mirror_for_black() {
    let mg = Phase::Middlegame;
    assert_eq!(Evaluator::positional_value(Piece::Knight, Color::White, sq("d4"), mg), 20);
    assert_eq!(Evaluator::positional_value(Piece::Knight, Color::Black, sq("d5"), mg), 20);
    assert_eq!(Evaluator::positional_value(Piece::Knight, Color::White, sq("a1"), mg), -50);
    assert_eq!(Evaluator::positional_value(Piece::Pawn, Color::White, sq("e2"), mg), 70);
    assert_eq!(Evaluator::positional_value(Piece::Pawn, Color::Black, sq("e7"), mg), 70);
    assert_eq!(Evaluator::positional_value(Piece::Pawn, Color::White, sq("g7"), mg), 35);
}

#[test]
fn test_king_table_follows_phase() {
    let king_sq = sq("g1");
    assert_eq!(
        Evaluator::positional_value(Piece::King, Color::White, king_sq, Phase::Middlegame),
        30
    );
    assert_eq!(
        Evaluator::positional_value(Piece::King, Color::White, king_sq, Phase::Endgame),
        -40
    );
    assert_eq!(
        Evaluator::positional_value(Piece::King, Color::White, sq("e4"), Phase::Endgame),
        40
    );
}

#[test]
fn test_phase_threshold() {
    assert_eq!(Evaluator::phase(&Board::new()), Phase::Middlegame);
    assert_eq!(Evaluator::phase(&fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")), Phase::Endgame);

    // Exactly sixteen non-king pieces: all pawns.
    let pawns_only = fen("4k3/pppppppp/8/8/8/8/PPPPPPPP/4K3 w - - 0 1");
    assert_eq!(Evaluator::phase(&pawns_only), Phase::Middlegame);

    let fifteen = fen("4k3/ppppppp1/8/8/8/8/PPPPPPPP/4K3 w - - 0 1");
    assert_eq!(Evaluator::phase(&fifteen), Phase::Endgame);
}
