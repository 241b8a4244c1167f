//! Terminal-state queries: checkmate, stalemate and the draw rules.

use std::fmt;

use super::{Board, Color, Piece, Square};

/// Halfmove clock value at which the fifty-move rule declares a draw
pub const FIFTY_MOVE_LIMIT: u32 = 50;

/// Classification of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing { in_check: bool },
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }

    /// The winning side, for decisive results
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing { in_check: true } => write!(f, "check"),
            GameStatus::Ongoing { in_check: false } => write!(f, "in progress"),
            GameStatus::Checkmate { .. } => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::FiftyMoveRule => write!(f, "fifty-move rule"),
            GameStatus::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

impl Board {
    /// In check with no legal move
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.in_check(color) && self.generate_legal_moves(color).is_empty()
    }

    /// Not in check, but no legal move
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.in_check(color) && self.generate_legal_moves(color).is_empty()
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
    }

    /// Stalemate for `color`, or the fifty-move rule
    pub fn is_draw(&mut self, color: Color) -> bool {
        self.is_fifty_move_draw() || self.is_stalemate(color)
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// one bishop each on squares of the same colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors: Vec<(Color, Piece, Square)> = Vec::new();
        for (sq, color, piece) in self.pieces() {
            match piece {
                Piece::King => {}
                Piece::Knight | Piece::Bishop => minors.push((color, piece, sq)),
                Piece::Pawn | Piece::Rook | Piece::Queen => return false,
            }
        }

        match minors.as_slice() {
            [] | [_] => true,
            [(a_color, Piece::Bishop, a), (b_color, Piece::Bishop, b)] => {
                a_color != b_color && a.is_dark() == b.is_dark()
            }
            _ => false,
        }
    }

    /// Classify the position for the side to move.
    pub fn status(&mut self) -> GameStatus {
        let color = self.side_to_move;
        let in_check = self.in_check(color);
        if self.generate_legal_moves(color).is_empty() {
            return if in_check {
                GameStatus::Checkmate {
                    winner: color.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_fifty_move_draw() {
            return GameStatus::FiftyMoveRule;
        }
        if self.is_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }
        GameStatus::Ongoing { in_check }
    }
}
