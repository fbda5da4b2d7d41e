//! Error types for the fifteen crate

use thiserror::Error;

use crate::board::Side;

/// Main error type for the fifteen crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("row {row} / column {col} is outside the 3x3 board (both must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row},{col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("digit {digit} is out of range (must be 0-9)")]
    DigitOutOfRange { digit: u8 },

    #[error("digit {digit} is not in the {side} side's set")]
    WrongParity { digit: u8, side: Side },

    #[error("digit {digit} has already been placed")]
    DigitAlreadyUsed { digit: u8 },

    #[error("digit {digit} appears more than once in '{context}'")]
    DuplicateDigit { digit: u8, context: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("no legal move exists for the {side} side; the caller must detect match end first")]
    NoLegalMoves { side: Side },

    #[error("match already over")]
    MatchOver,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
