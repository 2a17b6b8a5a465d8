//! Core board types.
//!
//! - `PieceKind`, `Player` and `Piece` - piece identity and ownership
//! - `Square` - (col, row) board coordinates
//! - `Occupant` and `Sprite` - a placed piece together with its visuals

mod occupant;
mod piece;
mod square;

pub use occupant::{Occupant, Sprite, TextureId};
pub use piece::{Piece, PieceKind, Player};
pub use square::{Square, BOARD_SIZE};
