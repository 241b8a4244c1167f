//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// One ply: origin, destination, the moving piece, the captured piece and an
/// optional promotion kind.
///
/// Pieces are recorded when the move is generated and are never re-read from
/// the board afterwards. Castling is encoded as a king move of two files; the
/// rook relocation is inferred when the move is made.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: (Color, Piece),
    captured: Option<(Color, Piece)>,
    promotion: Option<Piece>,
    en_passant: bool,
}

/// Moves produced by the generator, in generation order.
pub type MoveList = Vec<Move>;

impl Move {
    /// A plain move or capture.
    #[inline]
    #[must_use]
    pub const fn new(
        from: Square,
        to: Square,
        piece: (Color, Piece),
        captured: Option<(Color, Piece)>,
    ) -> Self {
        Move {
            from,
            to,
            piece,
            captured,
            promotion: None,
            en_passant: false,
        }
    }

    /// A pawn capturing en passant; the victim sits behind `to`.
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            piece: (color, Piece::Pawn),
            captured: Some((color.opponent(), Piece::Pawn)),
            promotion: None,
            en_passant: true,
        }
    }

    /// Copy of this move promoting to `piece`.
    #[inline]
    #[must_use]
    pub const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The moving piece as it stood on the origin square
    #[inline]
    #[must_use]
    pub const fn piece(self) -> (Color, Piece) {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.piece.0
    }

    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<(Color, Piece)> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.en_passant
    }

    /// The square of the piece removed by this capture
    #[inline]
    #[must_use]
    pub fn capture_square(self) -> Square {
        if self.en_passant {
            Square::at(self.from.rank(), self.to.file())
        } else {
            self.to
        }
    }

    /// Returns true for a king move spanning two files
    #[inline]
    #[must_use]
    pub fn is_castling(self) -> bool {
        self.castle_side().is_some()
    }

    /// Castling wing, discriminated by the king's destination file
    #[must_use]
    pub fn castle_side(self) -> Option<CastleSide> {
        if self.piece.1 != Piece::King || self.from.file().abs_diff(self.to.file()) != 2 {
            return None;
        }
        if self.to.file() == CastleSide::KingSide.king_target_file() {
            Some(CastleSide::KingSide)
        } else {
            Some(CastleSide::QueenSide)
        }
    }

    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(self) -> bool {
        self.piece.1 == Piece::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// Same origin, destination and promotion choice
    #[inline]
    #[must_use]
    pub fn matches(self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        self.from == from && self.to == to && self.promotion == promotion
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}
