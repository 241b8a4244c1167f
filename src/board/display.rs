use std::fmt;

use super::{Board, Square};

const RULE: &str = "  +---+---+---+---+---+---+---+---+";

/// ASCII diagram, rank 8 at the top. Uppercase is White, `.` is empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = self
                    .piece_at(Square::at(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
