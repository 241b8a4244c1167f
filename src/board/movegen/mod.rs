mod castling;
mod pawns;
mod pieces;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, MoveList, Piece};

impl Board {
    /// Every move consistent with the pieces' movement rules for `color`,
    /// ignoring whether it leaves `color`'s own king in check.
    ///
    /// Moves come out in square order (a1..h8), then per piece in the order
    /// its rules produce them.
    #[must_use]
    pub fn generate_pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::with_capacity(64);
        for (from, piece_color, piece) in self.pieces() {
            if piece_color != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, color, &mut moves),
                Piece::Knight => self.generate_leaper_moves(from, color, piece, &mut moves),
                Piece::Bishop => {
                    self.generate_slider_moves(from, color, piece, &BISHOP_DIRECTIONS, &mut moves);
                }
                Piece::Rook => {
                    self.generate_slider_moves(from, color, piece, &ROOK_DIRECTIONS, &mut moves);
                }
                Piece::Queen => {
                    self.generate_slider_moves(from, color, piece, &QUEEN_DIRECTIONS, &mut moves);
                }
                Piece::King => {
                    self.generate_leaper_moves(from, color, piece, &mut moves);
                    self.generate_castling_moves(from, color, &mut moves);
                }
            }
        }
        moves
    }

    /// Pseudo-legal moves that do not leave `color`'s king in check.
    ///
    /// Each candidate is made, tested and undone through a move guard, so the
    /// board is left exactly as found.
    pub fn generate_legal_moves(&mut self, color: Color) -> MoveList {
        let pseudo_moves = self.generate_pseudo_legal_moves(color);
        pseudo_moves
            .into_iter()
            .filter(|&m| {
                let after = self.play(m);
                !after.in_check(color)
            })
            .collect()
    }

    /// Legal moves for the side to move
    pub fn generate_moves(&mut self) -> MoveList {
        self.generate_legal_moves(self.side_to_move)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|m| self.play(m).perft(depth - 1))
            .sum()
    }
}
