use std::ops::{Deref, DerefMut};

use super::error::UndoError;
use super::{Board, CastleSide, Color, Move, Piece, Square, UnmakeInfo};

/// The castling wing whose rook starts on `sq`, if `sq` is one of `color`'s corners
fn rook_home_side(color: Color, sq: Square) -> Option<CastleSide> {
    if sq.rank() != color.back_rank() {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| side.rook_files().0 == sq.file())
}

impl Board {
    /// Apply `m` in place and push a rollback record.
    ///
    /// No legality check is made; the move is assumed to come from the
    /// generator or to have been validated against it.
    pub fn make_move(&mut self, m: Move) {
        self.history.push(UnmakeInfo {
            mv: m,
            previous_castling_rights: self.castling_rights,
            previous_en_passant_target: self.en_passant_target,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
        });

        let (color, piece) = m.piece();

        if m.is_en_passant() {
            self.put(m.capture_square(), None);
        }

        if let Some(side) = m.castle_side() {
            let rank = m.from().rank();
            let (rook_from, rook_to) = side.rook_files();
            let rook = self.piece_at(Square::at(rank, rook_from));
            self.put(Square::at(rank, rook_from), None);
            self.put(Square::at(rank, rook_to), rook);
        }

        self.put(m.from(), None);
        let placed = m.promotion().unwrap_or(piece);
        self.put(m.to(), Some((color, placed)));

        match piece {
            Piece::King => self.castling_rights.remove_color(color),
            Piece::Rook => {
                if let Some(side) = rook_home_side(color, m.from()) {
                    self.castling_rights.remove(color, side);
                }
            }
            _ => {}
        }
        if let Some((captured_color, Piece::Rook)) = m.captured() {
            if let Some(side) = rook_home_side(captured_color, m.to()) {
                self.castling_rights.remove(captured_color, side);
            }
        }

        self.en_passant_target = if m.is_double_pawn_push() {
            let skipped = (m.from().rank() + m.to().rank()) / 2;
            Some(Square::at(skipped, m.from().file()))
        } else {
            None
        };

        if piece == Piece::Pawn || m.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Take back the most recent `make_move`.
    ///
    /// With an empty history nothing changes and `UndoError::EmptyHistory`
    /// is returned.
    pub fn undo_move(&mut self) -> Result<Move, UndoError> {
        let info = self.history.pop().ok_or(UndoError::EmptyHistory)?;
        let m = info.mv;

        self.side_to_move = self.side_to_move.opponent();

        self.put(m.to(), None);
        self.put(m.from(), Some(m.piece()));
        if let Some(captured) = m.captured() {
            self.put(m.capture_square(), Some(captured));
        }

        if let Some(side) = m.castle_side() {
            let rank = m.from().rank();
            let (rook_from, rook_to) = side.rook_files();
            let rook = self.piece_at(Square::at(rank, rook_to));
            self.put(Square::at(rank, rook_to), None);
            self.put(Square::at(rank, rook_from), rook);
        }

        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        Ok(m)
    }

    /// Make `m` for the lifetime of the returned guard.
    ///
    /// The guard derefs to the board and undoes the move when dropped, so every
    /// exit path of the caller (including an early `break`) restores the
    /// position. Code holding the guard must leave the history as it found it.
    pub fn play(&mut self, m: Move) -> MoveGuard<'_> {
        self.make_move(m);
        MoveGuard { board: self }
    }
}

/// Scoped make/undo pair returned by [`Board::play`].
pub struct MoveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        let undone = self.board.undo_move();
        debug_assert!(undone.is_ok(), "move guard found an empty history");
    }
}
