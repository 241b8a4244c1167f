//! Static evaluation: material plus piece-square bonuses.

use super::pst::{self, Table};
use super::{Board, Color, Piece, Square};

/// Non-king pieces needed on the board for the king to use its middlegame table
pub const MIDDLEGAME_PIECE_THRESHOLD: usize = 16;

/// Game phase, chosen by a hard material-count threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Middlegame,
    Endgame,
}

/// Stateless scorer. Scores are centipawns, positive when White is better.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    #[must_use]
    pub const fn new() -> Self {
        Evaluator
    }

    /// Material value of a piece kind in centipawns
    #[inline]
    #[must_use]
    pub const fn piece_value(piece: Piece) -> i32 {
        piece.value()
    }

    #[must_use]
    pub fn phase(board: &Board) -> Phase {
        let non_kings = board
            .pieces()
            .filter(|&(_, _, piece)| piece != Piece::King)
            .count();
        if non_kings >= MIDDLEGAME_PIECE_THRESHOLD {
            Phase::Middlegame
        } else {
            Phase::Endgame
        }
    }

    /// Positional bonus for `piece` of `color` standing on `sq`.
    #[must_use]
    pub fn positional_value(piece: Piece, color: Color, sq: Square, phase: Phase) -> i32 {
        let table: &Table = match piece {
            Piece::Pawn => &pst::PAWN,
            Piece::Knight => &pst::KNIGHT,
            Piece::Bishop => &pst::BISHOP,
            Piece::Rook => &pst::ROOK,
            Piece::Queen => &pst::QUEEN,
            Piece::King => match phase {
                Phase::Middlegame => &pst::KING_MIDDLEGAME,
                Phase::Endgame => &pst::KING_ENDGAME,
            },
        };
        let row = match color {
            Color::White => 7 - sq.rank(),
            Color::Black => sq.rank(),
        };
        table[row][sq.file()]
    }

    /// Sum of material and positional terms, White-positive.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> i32 {
        let phase = Self::phase(board);
        board
            .pieces()
            .map(|(sq, color, piece)| {
                color.sign() * (piece.value() + Self::positional_value(piece, color, sq, phase))
            })
            .sum()
    }
}

impl Board {
    /// Static evaluation of this position, White-positive
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        Evaluator.evaluate(self)
    }
}
