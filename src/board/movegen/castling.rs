use super::super::{Board, CastleSide, Color, Move, MoveList, Piece, Square};

const KING_HOME_FILE: usize = 4;

impl Board {
    /// True if `color` may castle towards `side` right now.
    ///
    /// Requires the right still held, king and rook on their home squares, the
    /// king not in check, the squares between them empty, and every square the
    /// king crosses or lands on free of enemy attack. On the queen side the
    /// b-file must be empty but may be attacked.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling_rights.has(color, side) {
            return false;
        }

        let rank = color.back_rank();
        let (rook_file, _) = side.rook_files();
        if self.piece_at(Square::at(rank, KING_HOME_FILE)) != Some((color, Piece::King))
            || self.piece_at(Square::at(rank, rook_file)) != Some((color, Piece::Rook))
        {
            return false;
        }

        if self.in_check(color) {
            return false;
        }

        let (between, transit): (&[usize], &[usize]) = match side {
            CastleSide::KingSide => (&[5, 6], &[5, 6]),
            CastleSide::QueenSide => (&[1, 2, 3], &[2, 3]),
        };

        if between
            .iter()
            .any(|&file| !self.is_empty(Square::at(rank, file)))
        {
            return false;
        }

        let opponent = color.opponent();
        !transit
            .iter()
            .any(|&file| self.is_square_attacked(Square::at(rank, file), opponent))
    }

    pub(crate) fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for side in CastleSide::BOTH {
            if self.can_castle(color, side) {
                let to_sq = Square::at(from.rank(), side.king_target_file());
                moves.push(Move::new(from, to_sq, (color, Piece::King), None));
            }
        }
    }
}
