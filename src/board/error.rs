//! Error types for board encodings.

use std::fmt;

/// Error type for compact state string decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// State string is not exactly 64 characters long
    MalformedState { len: usize },
    /// Character outside the accepted charset
    InvalidChar { index: usize, found: char },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::MalformedState { len } => {
                write!(f, "State string must be 64 characters, found {len}")
            }
            StateError::InvalidChar { index, found } => {
                write!(f, "Invalid character '{found}' at index {index} in state string")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Error type for strict placement parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// More than 8 rank segments
    TooManyRanks { ranks: usize },
    /// Character that is neither a digit 1-8 nor a piece letter
    InvalidPiece { char: char },
    /// A rank describes more than 8 files
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::TooManyRanks { ranks } => {
                write!(f, "Placement has {ranks} ranks, at most 8 allowed")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
