//! Move types.
//!
//! Every move is described by the squares it vacates and the
//! (square, piece) pairs it populates. Applying a move clears all vacated
//! squares first and then writes the populated ones, which is enough to
//! express quiet moves, captures, en passant, castling and promotion
//! uniformly.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind, Side};
use super::square::Square;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the king starts on (both castle sides)
    pub const KING_HOME_COL: i8 = 4;

    #[inline]
    #[must_use]
    pub const fn rook_home_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_destination_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_destination_col(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns strictly between the king and the rook; all must be empty.
    #[must_use]
    pub const fn between_cols(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king starts on, passes through and lands on; none may be threatened.
    #[must_use]
    pub const fn king_path_cols(self) -> &'static [i8] {
        match self {
            CastleSide::KingSide => &[4, 5, 6],
            CastleSide::QueenSide => &[4, 3, 2],
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_home(side: Side) -> Square {
        Square(side.back_row(), Self::KING_HOME_COL)
    }

    #[inline]
    #[must_use]
    pub const fn rook_home(self, side: Side) -> Square {
        Square(side.back_row(), self.rook_home_col())
    }
}

/// A fully described move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Quiet move or ordinary capture
    Basic { from: Square, to: Square, piece: Piece },
    /// Pawn capture of a pawn that just advanced two rows past it
    EnPassant { from: Square, to: Square, side: Side },
    /// King and rook swap past each other on the back row
    Castle { side: Side, castle_side: CastleSide },
    /// Pawn reaching the far row, replaced by `promoted`
    Promotion { from: Square, to: Square, promoted: Piece },
}

impl Move {
    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        match *self {
            Move::Basic { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Promotion { from, .. } => from,
            Move::Castle { side, .. } => CastleSide::king_home(side),
        }
    }

    /// Get the destination square (the king's, for castling)
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        match *self {
            Move::Basic { to, .. } | Move::EnPassant { to, .. } | Move::Promotion { to, .. } => to,
            Move::Castle { side, castle_side } => {
                Square(side.back_row(), castle_side.king_destination_col())
            }
        }
    }

    /// The piece that stands on `to()` once the move is made
    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> Piece {
        match *self {
            Move::Basic { piece, .. } => piece,
            Move::EnPassant { side, .. } => Piece::new(PieceKind::Pawn, side),
            Move::Castle { side, .. } => Piece::new(PieceKind::King, side),
            Move::Promotion { promoted, .. } => promoted,
        }
    }

    /// The side making this move
    #[inline]
    #[must_use]
    pub const fn side(&self) -> Side {
        self.moved_piece().side
    }

    /// Square of the pawn removed by an en passant capture
    #[must_use]
    pub const fn en_passant_victim(&self) -> Option<Square> {
        match *self {
            Move::EnPassant { from, to, .. } => Some(Square(from.row(), to.col())),
            _ => None,
        }
    }

    /// Squares cleared before the move's pieces are placed.
    ///
    /// Always contains `from()` and `to()`.
    #[must_use]
    pub fn vacated(&self) -> Vec<Square> {
        match *self {
            Move::Basic { from, to, .. } | Move::Promotion { from, to, .. } => vec![from, to],
            Move::EnPassant { from, to, .. } => vec![from, to, Square(from.row(), to.col())],
            Move::Castle { side, castle_side } => vec![
                CastleSide::king_home(side),
                castle_side.rook_home(side),
                self.to(),
            ],
        }
    }

    /// Squares written after clearing, with the piece placed on each.
    ///
    /// Always contains `(to(), moved_piece())`.
    #[must_use]
    pub fn populated(&self) -> Vec<(Square, Piece)> {
        match *self {
            Move::Castle { side, castle_side } => vec![
                (
                    Square(side.back_row(), castle_side.rook_destination_col()),
                    Piece::new(PieceKind::Rook, side),
                ),
                (self.to(), self.moved_piece()),
            ],
            _ => vec![(self.to(), self.moved_piece())],
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    /// Get the promotion kind, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match *self {
            Move::Promotion { promoted, .. } => Some(promoted.kind),
            _ => None,
        }
    }

    /// Get the castle side, if this is a castling move
    #[inline]
    #[must_use]
    pub const fn castle_side(&self) -> Option<CastleSide> {
        match *self {
            Move::Castle { castle_side, .. } => Some(castle_side),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_notation_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<Move> {
        let white_pawn = Piece::new(PieceKind::Pawn, Side::White);
        vec![
            Move::Basic {
                from: Square(6, 4),
                to: Square(4, 4),
                piece: white_pawn,
            },
            Move::EnPassant {
                from: Square(3, 4),
                to: Square(2, 3),
                side: Side::White,
            },
            Move::Castle {
                side: Side::White,
                castle_side: CastleSide::KingSide,
            },
            Move::Castle {
                side: Side::Black,
                castle_side: CastleSide::QueenSide,
            },
            Move::Promotion {
                from: Square(1, 0),
                to: Square(0, 1),
                promoted: Piece::new(PieceKind::Queen, Side::White),
            },
        ]
    }

    #[test]
    fn test_vacated_and_populated_cover_endpoints() {
        for mv in all_variants() {
            let vacated = mv.vacated();
            assert!(vacated.contains(&mv.from()), "{mv:?}");
            assert!(vacated.contains(&mv.to()), "{mv:?}");
            assert!(mv.populated().contains(&(mv.to(), mv.moved_piece())), "{mv:?}");
        }
    }

    #[test]
    fn test_en_passant_vacates_victim() {
        let mv = Move::EnPassant {
            from: Square(3, 4),
            to: Square(2, 3),
            side: Side::White,
        };
        assert_eq!(mv.en_passant_victim(), Some(Square(3, 3)));
        assert!(mv.vacated().contains(&Square(3, 3)));
    }

    #[test]
    fn test_castle_geometry() {
        let white_kingside = Move::Castle {
            side: Side::White,
            castle_side: CastleSide::KingSide,
        };
        assert_eq!(white_kingside.from(), Square(7, 4));
        assert_eq!(white_kingside.to(), Square(7, 6));
        assert!(white_kingside.vacated().contains(&Square(7, 7)));
        assert!(white_kingside
            .populated()
            .contains(&(Square(7, 5), Piece::new(PieceKind::Rook, Side::White))));

        let black_queenside = Move::Castle {
            side: Side::Black,
            castle_side: CastleSide::QueenSide,
        };
        assert_eq!(black_queenside.from(), Square(0, 4));
        assert_eq!(black_queenside.to(), Square(0, 2));
        assert!(black_queenside.vacated().contains(&Square(0, 0)));
        assert!(black_queenside
            .populated()
            .contains(&(Square(0, 3), Piece::new(PieceKind::Rook, Side::Black))));
    }

    #[test]
    fn test_display() {
        let moves = all_variants();
        assert_eq!(moves[0].to_string(), "e2e4");
        assert_eq!(moves[2].to_string(), "e1g1");
        assert_eq!(moves[4].to_string(), "a7b8q");
    }
}
