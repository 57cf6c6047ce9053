//! Error type for turn execution.

use std::fmt;

use super::GameStatus;
use crate::board::{BoardError, PieceKind, Side, Square};

/// Reasons a requested turn is refused. A refused turn changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// Board access failed (off-board square, empty origin, missing king)
    Board(BoardError),
    /// The piece on the origin square belongs to the side not on move
    WrongPlayerTurn { square: Square, side: Side },
    /// No legal move connects the two squares
    NoMatchingLegalMove { from: Square, to: Square },
    /// A promotion was requested without a kind that picks exactly one move
    AmbiguousPromotionChoice {
        from: Square,
        to: Square,
        requested: Option<PieceKind>,
    },
    /// The game already has a result
    GameAlreadyConcluded { status: GameStatus },
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::Board(err) => write!(f, "{err}"),
            TurnError::WrongPlayerTurn { square, side } => {
                write!(f, "Piece at {square} belongs to {side}, who is not on move")
            }
            TurnError::NoMatchingLegalMove { from, to } => {
                write!(f, "No legal move from {from} to {to}")
            }
            TurnError::AmbiguousPromotionChoice {
                from,
                to,
                requested,
            } => match requested {
                Some(kind) => write!(
                    f,
                    "Promotion from {from} to {to} cannot create {kind:?}"
                ),
                None => write!(f, "Promotion from {from} to {to} needs a piece kind"),
            },
            TurnError::GameAlreadyConcluded { status } => {
                write!(f, "Game is already concluded with status: {status}")
            }
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for TurnError {
    fn from(err: BoardError) -> Self {
        TurnError::Board(err)
    }
}
