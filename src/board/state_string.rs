//! Compact 64-character board encoding used for snapshots.
//!
//! One character per square in row-major order (rows 0..8 outer, cols 0..8
//! inner): `'0'` for an empty square, `PNBRQK` for White and `pnbrqk` for
//! Black. This ordering differs from FEN, which starts at rank 8.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::{Board, Occupant, Piece, PieceKind, Player, Square, BOARD_SIZE};

/// Length of a compact state string.
pub const STATE_STRING_LEN: usize = BOARD_SIZE * BOARD_SIZE;

const EMPTY_CHAR: char = '0';
const WHITE_NOTATION: &[u8; 7] = b"0PNBRQK";
const BLACK_NOTATION: &[u8; 7] = b"0pnbrqk";

/// How a compact state string is read back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StateCodec {
    /// Every letter restores its exact kind and owner.
    #[default]
    Full,
    /// Older snapshot reader: each occupied square becomes a pawn of the
    /// encoded player. Accepts the digits `1`/`2` (player index plus one) as
    /// well as letters, whose case selects the player.
    Legacy,
}

impl fmt::Display for StateCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateCodec::Full => write!(f, "full"),
            StateCodec::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for StateCodec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(StateCodec::Full),
            "legacy" => Ok(StateCodec::Legacy),
            other => Err(format!("unknown state codec '{other}'")),
        }
    }
}

/// Notation character for an identity tag, split at the 128 boundary.
#[must_use]
pub fn notation_for_tag(tag: u8) -> char {
    let (table, ordinal) = if tag < Piece::PLAYER_TAG_OFFSET {
        (WHITE_NOTATION, tag)
    } else {
        (BLACK_NOTATION, tag - Piece::PLAYER_TAG_OFFSET)
    };
    table
        .get(usize::from(ordinal))
        .map_or(EMPTY_CHAR, |&b| b as char)
}

impl StateCodec {
    fn decode_char(self, index: usize, c: char) -> Result<Option<Piece>, StateError> {
        let invalid = StateError::InvalidChar { index, found: c };
        if c == EMPTY_CHAR {
            return Ok(None);
        }
        match self {
            StateCodec::Full => Piece::from_fen_char(c).map(Some).ok_or(invalid),
            StateCodec::Legacy => {
                let owner = match c {
                    '1' => Player::White,
                    '2' => Player::Black,
                    _ => Piece::from_fen_char(c).ok_or(invalid)?.owner,
                };
                Ok(Some(Piece::new(owner, PieceKind::Pawn)))
            }
        }
    }

    /// Decode a whole state string without touching any board.
    pub fn decode(self, s: &str) -> Result<[Option<Piece>; STATE_STRING_LEN], StateError> {
        let len = s.chars().count();
        if len != STATE_STRING_LEN {
            return Err(StateError::MalformedState { len });
        }
        let mut pieces = [None; STATE_STRING_LEN];
        for (index, c) in s.chars().enumerate() {
            pieces[index] = self.decode_char(index, c)?;
        }
        Ok(pieces)
    }
}

impl Board {
    /// Export the board as a 64-character compact state string.
    #[must_use]
    pub fn state_string(&self) -> String {
        let mut s = String::with_capacity(STATE_STRING_LEN);
        self.for_each_square(|_, occupant| {
            s.push(notation_for_tag(occupant.map_or(0, Occupant::tag)));
        });
        s
    }

    /// Replace every square from a compact state string.
    ///
    /// The string is validated before the board is modified, so on error the
    /// board is left as it was.
    pub fn set_state_string(&mut self, s: &str, codec: StateCodec) -> Result<(), StateError> {
        self.set_state_string_with(s, codec, |_, piece| Occupant::bare(piece))
    }

    /// Like [`Board::set_state_string`], building each occupant with `make`.
    pub fn set_state_string_with<F>(
        &mut self,
        s: &str,
        codec: StateCodec,
        mut make: F,
    ) -> Result<(), StateError>
    where
        F: FnMut(Square, Piece) -> Occupant,
    {
        let decoded = codec.decode(s).inspect_err(|e| log::warn!("rejected state string: {e}"))?;
        self.for_each_square_mut(|sq, slot| {
            *slot = decoded[sq.index()].map(|piece| make(sq, piece));
        });
        log::debug!("restored {codec} state string");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_STATE: &str =
        "RNBQKBNRPPPPPPPP00000000000000000000000000000000pppppppprnbqkbnr";

    #[test]
    fn test_empty_board_exports_zeros() {
        assert_eq!(Board::empty().state_string(), "0".repeat(64));
    }

    #[test]
    fn test_starting_position_export() {
        let s = Board::starting_position().state_string();
        assert_eq!(s.len(), 64);
        assert_eq!(s, START_STATE);
    }

    #[test]
    fn test_export_uses_row_major_order() {
        let mut board = Board::empty();
        board.set_piece(Square(1, 0), Piece::new(Player::White, PieceKind::Knight));
        board.set_piece(Square(0, 1), Piece::new(Player::Black, PieceKind::Queen));
        let s = board.state_string();
        assert_eq!(&s[..10], "0N000000q0");
    }

    #[test]
    fn test_notation_for_tag() {
        assert_eq!(notation_for_tag(0), '0');
        assert_eq!(notation_for_tag(4), 'R');
        assert_eq!(notation_for_tag(134), 'k');
        assert_eq!(notation_for_tag(128), '0');
    }

    #[test]
    fn test_full_round_trip() {
        let board = Board::from_placement("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R");
        let mut restored = Board::empty();
        restored
            .set_state_string(&board.state_string(), StateCodec::Full)
            .unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_full_decode_clears_empty_squares() {
        let mut board = Board::starting_position();
        let mut state = "0".repeat(63);
        state.push('k');
        board.set_state_string(&state, StateCodec::Full).unwrap();
        assert_eq!(board.piece_count(), 1);
        assert_eq!(
            board.piece_at(Square(7, 7)),
            Some(Piece::new(Player::Black, PieceKind::King))
        );
    }

    #[test]
    fn test_legacy_decode_turns_everything_into_pawns() {
        let mut board = Board::empty();
        board.set_state_string(START_STATE, StateCodec::Legacy).unwrap();

        assert_eq!(board.piece_count(), 32);
        for (_, occupant) in board.occupants() {
            assert_eq!(occupant.kind(), PieceKind::Pawn);
        }
        assert_eq!(board.owner_at(4, 0), Some(Player::White));
        assert_eq!(board.owner_at(4, 7), Some(Player::Black));
    }

    #[test]
    fn test_legacy_decode_reads_player_digits() {
        let mut state = String::from("12");
        state.push_str(&"0".repeat(62));
        let mut board = Board::empty();
        board.set_state_string(&state, StateCodec::Legacy).unwrap();
        assert_eq!(
            board.piece_at(Square(0, 0)),
            Some(Piece::new(Player::White, PieceKind::Pawn))
        );
        assert_eq!(
            board.piece_at(Square(1, 0)),
            Some(Piece::new(Player::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn test_full_decode_rejects_digits() {
        let mut state = String::from("1");
        state.push_str(&"0".repeat(63));
        let err = Board::empty()
            .set_state_string(&state, StateCodec::Full)
            .unwrap_err();
        assert_eq!(err, StateError::InvalidChar { index: 0, found: '1' });
    }

    #[test]
    fn test_short_string_is_malformed() {
        let mut board = Board::starting_position();
        let err = board
            .set_state_string("RNBQKBNR", StateCodec::Full)
            .unwrap_err();
        assert_eq!(err, StateError::MalformedState { len: 8 });
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn test_long_string_is_malformed() {
        let state = "0".repeat(65);
        assert_eq!(
            StateCodec::Full.decode(&state),
            Err(StateError::MalformedState { len: 65 })
        );
    }

    #[test]
    fn test_invalid_char_leaves_board_untouched() {
        let mut board = Board::starting_position();
        let mut state = START_STATE.to_string();
        state.replace_range(63..64, "x");
        let err = board.set_state_string(&state, StateCodec::Legacy).unwrap_err();
        assert_eq!(err, StateError::InvalidChar { index: 63, found: 'x' });
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn test_codec_parse() {
        assert_eq!("Full".parse::<StateCodec>(), Ok(StateCodec::Full));
        assert_eq!(" legacy ".parse::<StateCodec>(), Ok(StateCodec::Legacy));
        assert!("pawns".parse::<StateCodec>().is_err());
        assert_eq!(StateCodec::default(), StateCodec::Full);
    }
}
