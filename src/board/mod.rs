//! Chess board representation and game logic.
//!
//! An 8x8 mailbox board with make/undo move application, full-rules move
//! generation (castling, en passant, promotions), terminal-state detection,
//! static evaluation and a depth-limited alpha-beta search.
//!
//! # Example
//! ```
//! use minimax_chess::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError, UndoError};
pub use eval::{Evaluator, Phase, MIDDLEGAME_PIECE_THRESHOLD};
pub use make_unmake::MoveGuard;
pub use state::{Board, UnmakeInfo, STARTING_FEN};
pub use status::{GameStatus, FIFTY_MOVE_LIMIT};
pub use types::{CastleSide, CastlingRights, Color, Move, MoveList, Piece, Square};

pub use search::{
    find_best_move, move_priority, order_moves, SearchResult, SearchStats, Searcher, INFINITY,
    MATE_SCORE,
};

pub(crate) use types::PROMOTION_PIECES;
