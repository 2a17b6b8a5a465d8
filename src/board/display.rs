use std::fmt;

use super::{Board, Square, BOARD_SIZE};

impl fmt::Display for Board {
    /// Text grid with rank 8 at the top, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..BOARD_SIZE {
                let ch = self
                    .piece_at(Square(col, row))
                    .map_or('.', |piece| piece.to_fen_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
