//! Placed pieces and their visual state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind, Player};

/// Handle to a texture loaded by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureId(pub u32);

/// Host-facing visual state of an occupant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sprite {
    /// Texture handle, `None` for boards built without a host.
    pub texture: Option<TextureId>,
    pub texture_name: String,
    /// Edge length in pixels.
    pub size: u32,
    /// Pixel position of the sprite's center.
    pub position: (i32, i32),
}

/// A piece sitting on a board square.
///
/// The board owns its occupants by value; the owning player is a plain
/// [`Player`] value, not a reference into the host's player table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occupant {
    piece: Piece,
    sprite: Sprite,
}

impl Occupant {
    #[must_use]
    pub fn new(piece: Piece, sprite: Sprite) -> Self {
        Occupant { piece, sprite }
    }

    /// Occupant without any visual state.
    #[must_use]
    pub fn bare(piece: Piece) -> Self {
        Occupant {
            piece,
            sprite: Sprite::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub fn owner(&self) -> Player {
        self.piece.owner
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.piece.kind
    }

    #[inline]
    #[must_use]
    pub fn tag(&self) -> u8 {
        self.piece.tag()
    }

    #[must_use]
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn set_position(&mut self, position: (i32, i32)) {
        self.sprite.position = position;
    }

    #[must_use]
    pub fn with_position(mut self, position: (i32, i32)) -> Self {
        self.sprite.position = position;
        self
    }
}
