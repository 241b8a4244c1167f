use super::error::SquareError;
use super::{CastlingRights, Color, Move, Piece, Square};

/// Serialized form of the standard initial layout
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything needed to invert exactly one `make_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) mv: Move,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl UnmakeInfo {
    /// The move this record takes back
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

/// The mutable game position: an 8x8 mailbox plus the state that is not
/// visible on the squares, and the rollback stack for `undo_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<UnmakeInfo>,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.put(Square::at(0, file), Some((Color::White, *piece)));
            board.put(Square::at(7, file), Some((Color::Black, *piece)));
            board.put(Square::at(1, file), Some((Color::White, Piece::Pawn)));
            board.put(Square::at(6, file), Some((Color::Black, Piece::Pawn)));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Replace the contents of a square. No legality check, no history entry.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<(Color, Piece)>) {
        self.put(sq, piece);
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Option<(Color, Piece)>) {
        self.squares[sq.index()] = piece;
    }

    /// Look up a square by raw coordinates.
    ///
    /// Out-of-range coordinates are rejected, never clamped.
    pub fn get(&self, rank: usize, file: usize) -> Result<Option<(Color, Piece)>, SquareError> {
        Ok(self.piece_at(Square::new(rank, file)?))
    }

    /// Write a square by raw coordinates.
    pub fn set(
        &mut self,
        rank: usize,
        file: usize,
        piece: Option<(Color, Piece)>,
    ) -> Result<(), SquareError> {
        let sq = Square::new(rank, file)?;
        self.put(sq, piece);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Every occupied square with its piece, in index order (a1..h8)
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|(color, piece)| (Square::from_index(idx), color, piece)))
    }

    /// Locate the king of `color`.
    ///
    /// Returns `None` when the position has no such king, which only happens
    /// in hand-built test positions.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares
            .iter()
            .position(|cell| *cell == Some((color, Piece::King)))
            .map(Square::from_index)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Number of moves that can currently be undone
    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recently made move, if any
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(UnmakeInfo::mv)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
