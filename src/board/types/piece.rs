//! Piece kinds, players and the packed identity tag.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six chess piece kinds.
///
/// Discriminants are the ordinals used by the identity tag and by the
/// notation tables (`0` is reserved for "no piece").
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All piece kinds in ordinal order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Ordinal in `1..=6`.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<PieceKind> {
        match ordinal {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Parse a kind from its letter, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter of this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Lowercase English name, as used in texture file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two players. `White` is player index 0 and sits on rows 0-1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// Both players in index order (White=0, Black=1)
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::White),
            1 => Some(Player::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Prefix of this player's texture file names.
    #[inline]
    #[must_use]
    pub const fn texture_prefix(self) -> &'static str {
        match self {
            Player::White => "w_",
            Player::Black => "b_",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Logical identity of a placed piece: what it is and who owns it.
///
/// The packed integer tag (`kind + player * 128`) only exists at the
/// serialization boundary, see [`Piece::tag`] and [`Piece::from_tag`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    /// Tag offset applied per player index.
    pub const PLAYER_TAG_OFFSET: u8 = 128;

    #[inline]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Piece { owner, kind }
    }

    /// Packed identity tag, in `1..=6` for White and `129..=134` for Black.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u8 {
        self.kind.ordinal() + self.owner.index() as u8 * Self::PLAYER_TAG_OFFSET
    }

    /// Unpack an identity tag. Returns `None` for `0` (no piece) and for any
    /// value outside the two valid ranges.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Piece> {
        let owner = Self::owner_of_tag(tag);
        match PieceKind::from_ordinal(tag & !Self::PLAYER_TAG_OFFSET) {
            Some(kind) => Some(Piece { owner, kind }),
            None => None,
        }
    }

    /// Player half of a tag: anything at or above 128 belongs to Black.
    #[inline]
    #[must_use]
    pub const fn owner_of_tag(tag: u8) -> Player {
        if tag >= Self::PLAYER_TAG_OFFSET {
            Player::Black
        } else {
            Player::White
        }
    }

    /// Notation letter, uppercase for White and lowercase for Black.
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.owner {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }

    /// Parse a notation letter; the case selects the owner.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let owner = if c.is_ascii_lowercase() {
            Player::Black
        } else {
            Player::White
        };
        Some(Piece { owner, kind })
    }

    /// Texture file for this piece, e.g. `w_knight.png`.
    #[must_use]
    pub fn texture_name(self) -> String {
        format!("{}{}.png", self.owner.texture_prefix(), self.kind.name())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_cover_both_ranges() {
        let tags: Vec<u8> = Player::BOTH
            .iter()
            .flat_map(|&owner| PieceKind::ALL.iter().map(move |&kind| Piece::new(owner, kind).tag()))
            .collect();
        assert_eq!(tags, vec![1, 2, 3, 4, 5, 6, 129, 130, 131, 132, 133, 134]);
    }

    #[test]
    fn test_from_tag_rejects_gaps() {
        assert_eq!(Piece::from_tag(0), None);
        assert_eq!(Piece::from_tag(7), None);
        assert_eq!(Piece::from_tag(128), None);
        assert_eq!(Piece::from_tag(135), None);
        assert_eq!(Piece::from_tag(255), None);
        assert_eq!(
            Piece::from_tag(132),
            Some(Piece::new(Player::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn test_owner_of_tag_splits_at_128() {
        assert_eq!(Piece::owner_of_tag(6), Player::White);
        assert_eq!(Piece::owner_of_tag(129), Player::Black);
    }

    #[test]
    fn test_fen_char_case_selects_owner() {
        let white_queen = Piece::from_fen_char('Q').unwrap();
        assert_eq!(white_queen, Piece::new(Player::White, PieceKind::Queen));
        assert_eq!(white_queen.to_fen_char(), 'Q');

        let black_knight = Piece::from_fen_char('n').unwrap();
        assert_eq!(black_knight.owner, Player::Black);
        assert_eq!(black_knight.to_fen_char(), 'n');

        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('1'), None);
    }

    #[test]
    fn test_texture_names() {
        assert_eq!(
            Piece::new(Player::White, PieceKind::Pawn).texture_name(),
            "w_pawn.png"
        );
        assert_eq!(
            Piece::new(Player::Black, PieceKind::King).texture_name(),
            "b_king.png"
        );
    }

    #[test]
    fn test_player_index_round_trip() {
        for player in Player::BOTH {
            assert_eq!(Player::from_index(player.index()), Some(player));
        }
        assert_eq!(Player::from_index(2), None);
        assert_eq!(Player::White.opponent(), Player::Black);
    }
}
