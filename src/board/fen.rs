use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Occupant, Piece, Square, BOARD_SIZE};

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// The placement field of a FEN string: everything before the first space.
fn placement_field(fen: &str) -> &str {
    fen.split_once(' ').map_or(fen, |(placement, _)| placement)
}

impl Board {
    /// Import a FEN piece placement onto this board.
    ///
    /// Trailing FEN fields (side to move, castling, en passant, clocks) are
    /// ignored. This never fails: unknown characters are skipped and
    /// placements that fall off the board are dropped. Nothing is cleared
    /// first; a placement replaces whatever occupied its square.
    pub fn import_placement(&mut self, fen: &str) {
        self.import_placement_with(fen, |_, piece| Occupant::bare(piece));
    }

    /// Like [`Board::import_placement`], building each occupant with `make`.
    pub fn import_placement_with<F>(&mut self, fen: &str, mut make: F)
    where
        F: FnMut(Square, Piece) -> Occupant,
    {
        let mut row: i32 = BOARD_SIZE as i32 - 1;
        let mut col: i32 = 0;
        let mut placed = 0usize;

        for c in placement_field(fen).chars() {
            match c {
                '/' => {
                    row -= 1;
                    col = 0;
                }
                '1'..='8' => col += c as i32 - '0' as i32,
                _ => {
                    // Unknown characters still consume a column.
                    if let Some(piece) = Piece::from_fen_char(c) {
                        match Square::from_signed(col, row) {
                            Some(sq) => {
                                self.place(sq, make(sq, piece));
                                placed += 1;
                            }
                            None => log::debug!("dropping {piece} at col {col}, row {row}"),
                        }
                    } else {
                        log::trace!("ignoring '{c}' in placement");
                    }
                    col += 1;
                }
            }
        }

        log::debug!("imported {placed} pieces from placement");
    }

    /// Parse a FEN piece placement strictly.
    ///
    /// Returns an error on unknown characters, more than 8 ranks or ranks
    /// wider than 8 files. Trailing FEN fields are ignored.
    pub fn try_from_placement(fen: &str) -> Result<Self, PlacementError> {
        let mut board = Board::empty();

        for (rank_idx, rank_str) in placement_field(fen).split('/').enumerate() {
            if rank_idx >= BOARD_SIZE {
                return Err(PlacementError::TooManyRanks {
                    ranks: placement_field(fen).split('/').count(),
                });
            }
            let row = BOARD_SIZE - 1 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                let sq = Square::new(file, row).ok_or(PlacementError::TooManyFiles {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                board.set_piece(sq, piece);
                file += 1;
            }
            if file > BOARD_SIZE {
                return Err(PlacementError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        Ok(board)
    }

    /// Parse a FEN piece placement.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `try_from_placement` for fallible parsing.
    #[must_use]
    pub fn from_placement(fen: &str) -> Self {
        Self::try_from_placement(fen).expect("Invalid piece placement")
    }

    /// FEN piece placement of this board, rank 8 first.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in (0..BOARD_SIZE).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(Square(col, row)) {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_placement(s)
    }
}
