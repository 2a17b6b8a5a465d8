use super::{Occupant, Piece, Player, Square, BOARD_SIZE};

/// 8x8 grid of squares, each holding at most one [`Occupant`].
///
/// The board exclusively owns its occupants. Placing onto an occupied square
/// hands the previous occupant back to the caller (or drops it).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Occupant>; BOARD_SIZE]; BOARD_SIZE], // [row][col]
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// Standard chess starting position, without any visual state.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        board.import_placement(super::STARTING_PLACEMENT);
        board
    }

    #[inline]
    #[must_use]
    pub fn occupant_at(&self, sq: Square) -> Option<&Occupant> {
        self.squares[sq.row()][sq.col()].as_ref()
    }

    #[inline]
    pub fn occupant_at_mut(&mut self, sq: Square) -> Option<&mut Occupant> {
        self.squares[sq.row()][sq.col()].as_mut()
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.occupant_at(sq).map(Occupant::piece)
    }

    /// Identity tag at a square, `0` when empty.
    #[must_use]
    pub fn tag_at(&self, sq: Square) -> u8 {
        self.piece_at(sq).map_or(0, Piece::tag)
    }

    /// Owner of the piece at `(col, row)`.
    ///
    /// Returns `None` when the coordinates are off the board or the square is
    /// empty.
    #[must_use]
    pub fn owner_at(&self, col: i32, row: i32) -> Option<Player> {
        let sq = Square::from_signed(col, row)?;
        self.occupant_at(sq).map(Occupant::owner)
    }

    /// Put an occupant on a square, returning whatever was there before.
    pub fn place(&mut self, sq: Square, occupant: Occupant) -> Option<Occupant> {
        log::trace!("place {} on {sq}", occupant.piece());
        self.squares[sq.row()][sq.col()].replace(occupant)
    }

    /// Place a piece with no visual state.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) -> Option<Occupant> {
        self.place(sq, Occupant::bare(piece))
    }

    /// Empty a square, returning the released occupant.
    pub fn clear_square(&mut self, sq: Square) -> Option<Occupant> {
        self.squares[sq.row()][sq.col()].take()
    }

    /// Release every occupant. Returns how many were released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        self.for_each_square_mut(|_, slot| {
            if slot.take().is_some() {
                released += 1;
            }
        });
        released
    }

    /// Move the occupant of `from` onto `to`.
    ///
    /// Returns the occupant previously standing on `to`, which the caller now
    /// owns. Does nothing when `from` is empty or equals `to`.
    pub fn move_occupant(&mut self, from: Square, to: Square) -> Option<Occupant> {
        if from == to {
            return None;
        }
        let occupant = self.clear_square(from)?;
        self.place(to, occupant)
    }

    /// Visit every square exactly once in row-major order.
    pub fn for_each_square<F>(&self, mut f: F)
    where
        F: FnMut(Square, Option<&Occupant>),
    {
        for sq in Square::all() {
            f(sq, self.occupant_at(sq));
        }
    }

    /// Mutable variant of [`Board::for_each_square`].
    pub fn for_each_square_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(Square, &mut Option<Occupant>),
    {
        for sq in Square::all() {
            f(sq, &mut self.squares[sq.row()][sq.col()]);
        }
    }

    /// Occupied squares in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, &Occupant)> + '_ {
        Square::all().filter_map(move |sq| self.occupant_at(sq).map(|occ| (sq, occ)))
    }

    /// Pieces owned by `player`, in row-major order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants()
            .filter(move |(_, occ)| occ.owner() == player)
            .map(|(sq, occ)| (sq, occ.piece()))
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.occupants().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants().next().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}
