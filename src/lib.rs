//! A two-player chess engine: full-rules move generation on a mailbox board,
//! material plus piece-square evaluation, and depth-limited alpha-beta search.
//!
//! - [`board`]: position, rules, evaluation and search
//! - [`game`]: a human-versus-engine game driver

pub mod board;
pub mod game;

pub use board::{find_best_move, Board, Color, Move, Piece, SearchResult, Square};
pub use game::{Game, GameConfig, GameOutcome};
