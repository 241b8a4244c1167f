//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts and special moves
//! - `make_unmake.rs` - Make/undo move correctness
//! - `rules.rs` - Attacks, check, checkmate, stalemate and castling legality
//! - `draw.rs` - Draw detection (fifty-move rule, insufficient material)
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta search and move ordering
//! - `proptest.rs` - Property-based tests

mod eval;
mod perft;
mod proptest;

use crate::board::{Board, Move, Piece, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

pub(super) fn fen(fen: &str) -> Board {
    Board::try_from_fen(fen).expect("valid FEN")
}

pub(super) fn find_move(board: &mut Board, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    board
        .find_legal_move(sq(from), sq(to), promotion)
        .expect("expected move not found")
}
