use super::attack_tables::{BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, ROOK_DIRECTIONS};
use super::{Board, Color, Piece, Square};

impl Board {
    /// First occupied square walking from `from` in direction `(dr, df)`.
    pub(crate) fn first_blocker(
        &self,
        from: Square,
        (dr, df): (isize, isize),
    ) -> Option<(Square, (Color, Piece))> {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            if let Some(occupant) = self.piece_at(next) {
                return Some((next, occupant));
            }
            current = next;
        }
        None
    }

    /// True if any piece of `by` attacks `square`.
    ///
    /// This is a geometric test: it ignores whose turn it is and whether the
    /// attacker is pinned. Pawns attack diagonally forward only; sliders attack
    /// up to and including the first occupied square on each ray.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn of `by` attacks from one rank behind the target, as seen from `by`.
        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = square.offset(behind, df) {
                if self.piece_at(from) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&from| self.piece_at(from) == Some((by, Piece::King)))
        {
            return true;
        }

        for dir in ROOK_DIRECTIONS {
            if let Some((_, (color, piece))) = self.first_blocker(square, dir) {
                if color == by && matches!(piece, Piece::Rook | Piece::Queen) {
                    return true;
                }
            }
        }

        for dir in BISHOP_DIRECTIONS {
            if let Some((_, (color, piece))) = self.first_blocker(square, dir) {
                if color == by && matches!(piece, Piece::Bishop | Piece::Queen) {
                    return true;
                }
            }
        }

        false
    }

    /// True if `color`'s king is attacked. A missing king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }
}
