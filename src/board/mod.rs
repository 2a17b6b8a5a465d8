//! Board representation and its two text encodings.
//!
//! The board is an 8x8 grid of squares, each owning at most one placed piece.
//! Two independent encodings are supported:
//! - FEN piece placement (rank 8 first), see [`Board::import_placement`]
//! - the compact 64-character state string (row 0 first), see
//!   [`Board::state_string`] and [`Board::set_state_string`]
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Player, StateCodec};
//!
//! let mut board = Board::empty();
//! board.import_placement("8/8/8/8/8/8/8/R7");
//! assert_eq!(board.owner_at(0, 0), Some(Player::White));
//!
//! let snapshot = board.state_string();
//! let mut restored = Board::empty();
//! restored.set_state_string(&snapshot, StateCodec::Full).unwrap();
//! assert_eq!(restored, board);
//! ```

mod builder;
mod display;
mod error;
mod fen;
mod state;
mod state_string;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PlacementError, SquareError, StateError};
pub use fen::STARTING_PLACEMENT;
pub use state::Board;
pub use state_string::{notation_for_tag, StateCodec, STATE_STRING_LEN};
pub use types::{Occupant, Piece, PieceKind, Player, Sprite, Square, TextureId, BOARD_SIZE};
