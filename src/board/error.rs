//! Error types for board operations.

use std::fmt;

use super::{Side, Square};

/// Error type for board access and move generation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square coordinates outside the 8x8 grid
    SquareOutOfBounds { square: Square },
    /// A piece was required on a square that is empty
    NoPieceAtSquare { square: Square },
    /// The side has no king on the board
    NoKingFound { side: Side },
    /// The side has more than one king on the board
    TooManyKings { side: Side, count: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::SquareOutOfBounds { square } => {
                write!(f, "Square is not on board: {square}")
            }
            BoardError::NoPieceAtSquare { square } => {
                write!(f, "No chess piece at {square}")
            }
            BoardError::NoKingFound { side } => {
                write!(f, "No king found for player {side}")
            }
            BoardError::TooManyKings { side, count } => {
                write!(f, "Player {side} has {count} kings")
            }
        }
    }
}

impl std::error::Error for BoardError {}
