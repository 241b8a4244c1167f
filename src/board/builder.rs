//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use minimax_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(0, 4).unwrap(), Color::White, Piece::King)
//!     .piece(Square::new(7, 4).unwrap(), Color::Black, Piece::King)
//!     .piece(Square::new(1, 0).unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Start from an empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder { board: Board::new() }
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.put(square, Some((color, piece)));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.put(square, None);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.board.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.board.castling_rights = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.board.castling_rights.set(color, side);
        self
    }

    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.board.castling_rights = CastlingRights::none();
        self
    }

    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.board.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for the fifty-move rule).
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.board.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number. Values below 1 are raised to 1.
    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.board.fullmove_number = number.max(1);
        self
    }

    /// Finish the position. The result has an empty move history.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
