//! Turn records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::piece::{Piece, PieceKind};
use super::square::Square;
use crate::board::{Board, BoardError};

/// Log entry for one executed turn: the requested squares and what stood on
/// them before the move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnRecord {
    pub from: Square,
    pub from_piece: Piece,
    pub to: Square,
    pub to_piece: Option<Piece>,
}

impl TurnRecord {
    #[must_use]
    pub const fn new(from: Square, from_piece: Piece, to: Square, to_piece: Option<Piece>) -> Self {
        TurnRecord {
            from,
            from_piece,
            to,
            to_piece,
        }
    }

    /// Record of `mv` as played on `board`, which must be the pre-move position.
    pub fn for_move(board: &Board, mv: &Move) -> Result<Self, BoardError> {
        let from = mv.from();
        let to = mv.to();
        let from_piece = board
            .piece_at(from)?
            .ok_or(BoardError::NoPieceAtSquare { square: from })?;
        Ok(TurnRecord::new(from, from_piece, to, board.piece_at(to)?))
    }

    /// True if this turn pushed a pawn two rows in one step.
    #[must_use]
    pub fn is_two_row_pawn_advance(&self) -> bool {
        self.from_piece.is_kind(PieceKind::Pawn)
            && self.from.col() == self.to.col()
            && (self.from.row() - self.to.row()).abs() == 2
    }
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved {} from {} to {}", self.from_piece, self.from, self.to)?;
        if let Some(taken) = self.to_piece {
            write!(f, " taking piece {taken}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn test_two_row_advance() {
        let pawn = Piece::new(PieceKind::Pawn, Side::White);
        assert!(TurnRecord::new(Square(6, 4), pawn, Square(4, 4), None).is_two_row_pawn_advance());
        assert!(!TurnRecord::new(Square(6, 4), pawn, Square(5, 4), None).is_two_row_pawn_advance());

        let rook = Piece::new(PieceKind::Rook, Side::White);
        assert!(!TurnRecord::new(Square(6, 0), rook, Square(4, 0), None).is_two_row_pawn_advance());
    }

    #[test]
    fn test_display() {
        let record = TurnRecord::new(
            Square(4, 4),
            Piece::new(PieceKind::Pawn, Side::White),
            Square(3, 3),
            Some(Piece::new(PieceKind::Pawn, Side::Black)),
        );
        assert_eq!(record.to_string(), "Moved W:p from e4 to d5 taking piece B:p");
    }
}
