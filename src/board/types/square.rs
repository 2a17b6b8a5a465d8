//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (col, row).
///
/// Row 0 is the rank nearest White; col 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub(crate) usize, pub(crate) usize); // (col, row)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Square(col, row))
        } else {
            None
        }
    }

    /// Bounds-checked constructor for signed host coordinates.
    #[must_use]
    pub fn from_signed(col: i32, row: i32) -> Option<Self> {
        let col = usize::try_from(col).ok()?;
        let row = usize::try_from(row).ok()?;
        Square::new(col, row)
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.1
    }

    /// Row-major index (`row * 8 + col`), the order of the compact state string.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.1 * BOARD_SIZE + self.0
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < BOARD_SIZE * BOARD_SIZE {
            Some(Square(idx % BOARD_SIZE, idx / BOARD_SIZE))
        } else {
            None
        }
    }

    /// Every square in row-major order: rows 0..8 outer, cols 0..8 inner.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(col, row)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((col, row): (usize, usize)) -> Result<Self, Self::Error> {
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(Square(col, row))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(col, row))
    }
}
