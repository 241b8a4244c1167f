use super::super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Knight and king steps: fixed targets not holding a friendly piece.
    pub(crate) fn generate_leaper_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        let targets = match piece {
            Piece::Knight => &KNIGHT_TARGETS[from.index()],
            _ => &KING_TARGETS[from.index()],
        };
        for &to_sq in targets {
            match self.piece_at(to_sq) {
                Some((occupant_color, _)) if occupant_color == color => {}
                captured => moves.push(Move::new(from, to_sq, (color, piece), captured)),
            }
        }
    }

    /// Ray-cast along each direction, stopping at the edge or the first
    /// occupied square, which is a capture only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to_sq) = current.offset(dr, df) {
                match self.piece_at(to_sq) {
                    None => moves.push(Move::new(from, to_sq, (color, piece), None)),
                    Some(occupant) => {
                        if occupant.0 != color {
                            moves.push(Move::new(from, to_sq, (color, piece), Some(occupant)));
                        }
                        break;
                    }
                }
                current = to_sq;
            }
        }
    }
}
