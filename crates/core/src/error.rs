//! Error types for field and piece operations.
//!
//! Only contract violations are errors. A move, rotation or spawn that is
//! blocked by another block or the field edge is an ordinary `false`.

use thiserror::Error;

use crate::types::ParseError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field of {width}x{height} is too small (minimum 4x8)")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("invalid square ({x}, {y})")]
    InvalidSquare { x: i32, y: i32 },

    #[error("invalid row {0}")]
    InvalidRow(i32),

    #[error("invalid kind of piece: {0:?}")]
    InvalidKind(String),

    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("invalid orientation: {0:?}")]
    InvalidOrientation(String),

    #[error("no current piece")]
    NoCurrentPiece,

    #[error("piece has been deleted")]
    PieceDeleted,

    #[error("current piece is still in play")]
    PieceLive,
}

impl From<ParseError> for FieldError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::Kind(s) => FieldError::InvalidKind(s),
            ParseError::Orientation(s) => FieldError::InvalidOrientation(s),
            ParseError::Direction(s) => FieldError::InvalidDirection(s),
        }
    }
}
