//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::moves::CastleSide;
use super::piece::{Piece, PieceKind, Side};
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Remaining castling rights represented as a bitmask.
///
/// A right is lost for good once the king or the matching rook leaves its
/// home square, or once anything lands on one of those squares (a capture
/// of the rook at home).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::all()
    }
}

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, side: Side, castle_side: CastleSide) -> bool {
        self.0 & Self::bit_for(side, castle_side) != 0
    }

    /// True while the side keeps at least one castling right
    #[inline]
    #[must_use]
    pub const fn has_any(self, side: Side) -> bool {
        self.has(side, CastleSide::KingSide) || self.has(side, CastleSide::QueenSide)
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, side: Side, castle_side: CastleSide) {
        self.0 |= Self::bit_for(side, castle_side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, side: Side, castle_side: CastleSide) {
        self.0 &= !Self::bit_for(side, castle_side);
    }

    /// Drop every right whose king or rook home square is `from` or `to`.
    pub fn update_for_turn(&mut self, from: Square, to: Square) {
        for side in Side::BOTH {
            let king_home = CastleSide::king_home(side);
            for castle_side in CastleSide::BOTH {
                let rook_home = castle_side.rook_home(side);
                if [from, to]
                    .iter()
                    .any(|sq| *sq == king_home || *sq == rook_home)
                {
                    self.remove(side, castle_side);
                }
            }
        }
    }

    /// Rights implied by piece placement alone: a right is kept when both the
    /// king and the matching rook stand on their home squares.
    pub fn from_placement(piece_at: impl Fn(Square) -> Option<Piece>) -> Self {
        let mut rights = CastlingRights::none();
        for side in Side::BOTH {
            let king = Piece::new(PieceKind::King, side);
            if piece_at(CastleSide::king_home(side)) != Some(king) {
                continue;
            }
            let rook = Piece::new(PieceKind::Rook, side);
            for castle_side in CastleSide::BOTH {
                if piece_at(castle_side.rook_home(side)) == Some(rook) {
                    rights.set(side, castle_side);
                }
            }
        }
        rights
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(side: Side, castle_side: CastleSide) -> u8 {
        match (side, castle_side) {
            (Side::White, CastleSide::KingSide) => CASTLE_WHITE_K,
            (Side::White, CastleSide::QueenSide) => CASTLE_WHITE_Q,
            (Side::Black, CastleSide::KingSide) => CASTLE_BLACK_K,
            (Side::Black, CastleSide::QueenSide) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_move_drops_both_rights() {
        let mut rights = CastlingRights::all();
        rights.update_for_turn(Square(7, 4), Square(6, 4));
        assert!(!rights.has_any(Side::White));
        assert!(rights.has(Side::Black, CastleSide::KingSide));
        assert!(rights.has(Side::Black, CastleSide::QueenSide));
    }

    #[test]
    fn test_rook_move_drops_one_right() {
        let mut rights = CastlingRights::all();
        rights.update_for_turn(Square(0, 0), Square(2, 0));
        assert!(!rights.has(Side::Black, CastleSide::QueenSide));
        assert!(rights.has(Side::Black, CastleSide::KingSide));
        assert!(rights.has_any(Side::Black));
    }

    #[test]
    fn test_both_rooks_moving_drops_all_rights() {
        let mut rights = CastlingRights::all();
        rights.update_for_turn(Square(7, 0), Square(5, 0));
        assert!(rights.has_any(Side::White));
        rights.update_for_turn(Square(7, 7), Square(5, 7));
        assert!(!rights.has_any(Side::White));
        assert!(rights.has_any(Side::Black));
    }

    #[test]
    fn test_capture_on_rook_home_drops_right() {
        let mut rights = CastlingRights::all();
        rights.update_for_turn(Square(1, 6), Square(7, 7));
        assert!(!rights.has(Side::White, CastleSide::KingSide));
        assert!(rights.has(Side::White, CastleSide::QueenSide));
    }

    #[test]
    fn test_from_placement() {
        let rights = CastlingRights::from_placement(|sq| match (sq.row(), sq.col()) {
            (7, 4) => Some(Piece::new(PieceKind::King, Side::White)),
            (7, 7) => Some(Piece::new(PieceKind::Rook, Side::White)),
            (0, 0) => Some(Piece::new(PieceKind::Rook, Side::Black)),
            _ => None,
        });
        assert!(rights.has(Side::White, CastleSide::KingSide));
        assert!(!rights.has(Side::White, CastleSide::QueenSide));
        // No black king at home, so the black rook earns nothing.
        assert!(!rights.has(Side::Black, CastleSide::QueenSide));
    }
}
