//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use minimax_chess::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.status(), GameStatus::Ongoing { in_check: false });
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, CastleSide, CastlingRights, Color, Evaluator, FenError,
    GameStatus, Move, MoveError, MoveList, Piece, SearchResult, Searcher, Square, SquareError,
    UndoError,
};
