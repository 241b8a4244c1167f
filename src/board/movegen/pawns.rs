use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

/// Push `m`, expanded into one move per promotion choice when it reaches the last rank.
fn push_pawn_move(moves: &mut MoveList, m: Move, color: Color) {
    if m.to().rank() == color.pawn_promotion_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(m.with_promotion(promo));
        }
    } else {
        moves.push(m);
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let pawn = (color, Piece::Pawn);

        let Some(forward_sq) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward_sq) {
            push_pawn_move(moves, Move::new(from, forward_sq, pawn, None), color);
            if from.rank() == color.pawn_start_rank() {
                if let Some(double_sq) = forward_sq.offset(dir, 0) {
                    if self.is_empty(double_sq) {
                        moves.push(Move::new(from, double_sq, pawn, None));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target_sq) {
                Some(victim) if victim.0 != color => {
                    push_pawn_move(moves, Move::new(from, target_sq, pawn, Some(victim)), color);
                }
                None if self.is_en_passant_capture(from, target_sq, color) => {
                    moves.push(Move::en_passant(from, target_sq, color));
                }
                _ => {}
            }
        }
    }

    /// En passant is only available to the side to move, onto the recorded
    /// target, with an enemy pawn standing beside the capturing pawn.
    fn is_en_passant_capture(&self, from: Square, target_sq: Square, color: Color) -> bool {
        color == self.side_to_move
            && self.en_passant_target == Some(target_sq)
            && self.piece_at(Square::at(from.rank(), target_sq.file()))
                == Some((color.opponent(), Piece::Pawn))
    }
}
