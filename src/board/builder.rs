//! Fluent builder for constructing boards.
//!
//! Allows creating positions piece by piece rather than parsing placements.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Player, Square};
//!
//! let e1 = Square::new(4, 0).unwrap();
//! let e8 = Square::new(4, 7).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Player::White, PieceKind::King)
//!     .piece(e8, Player::Black, PieceKind::King)
//!     .build();
//! assert_eq!(board.piece_count(), 2);
//! ```

use super::{Board, Piece, PieceKind, Player, Square, STARTING_PLACEMENT};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::from_placement(STARTING_PLACEMENT);
        BoardBuilder {
            pieces: board
                .occupants()
                .map(|(sq, occupant)| (sq, occupant.piece()))
                .collect(),
        }
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, owner: Player, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(owner, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board
    }
}
