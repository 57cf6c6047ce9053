//! Square types and utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the chess board, represented as (row, col).
///
/// Row 0 is Black's back row (rank 8) and row 7 is White's back row
/// (rank 1); col 0 is the a-file. Coordinates are signed so that move
/// geometry can step past the edge of the board: a `Square` is only a pair
/// of numbers, and `is_on_board` decides whether it names a real square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (row, col)

impl Square {
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Square(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.1
    }

    /// Returns true if both coordinates lie in `[0, 8)`.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 >= 0 && self.0 < BOARD_SIZE && self.1 >= 0 && self.1 < BOARD_SIZE
    }

    /// The square `dr` rows and `dc` columns away. May be off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Square(self.0.saturating_add(dr), self.1.saturating_add(dc))
    }

    /// Index into a 64-entry table (a8=0, b8=1, ..., h1=63), if on the board.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.0 as usize * BOARD_SIZE as usize + self.1 as usize)
        } else {
            None
        }
    }

    /// Create a square from a table index (0-63).
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square((idx / 8) as i8, (idx % 8) as i8)
    }

    /// Colour of the square, or `None` when off the board.
    #[must_use]
    pub const fn color(self) -> Option<SquareColor> {
        if !self.is_on_board() {
            return None;
        }
        if (self.0 + self.1) % 2 == 0 {
            Some(SquareColor::Light)
        } else {
            Some(SquareColor::Dark)
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.1 as u8 + b'a') as char, BOARD_SIZE - self.0)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

/// Light or dark square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SquareColor {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Square(0, 0).is_on_board());
        assert!(Square(7, 7).is_on_board());
        assert!(!Square(-1, 3).is_on_board());
        assert!(!Square(3, 8).is_on_board());
    }

    #[test]
    fn test_offset_can_leave_board() {
        let sq = Square(0, 1).offset(-2, -1);
        assert_eq!(sq, Square(-2, 0));
        assert!(!sq.is_on_board());
        assert_eq!(sq.index(), None);
    }

    #[test]
    fn test_algebraic_display() {
        assert_eq!(Square(0, 0).to_string(), "a8");
        assert_eq!(Square(6, 4).to_string(), "e2");
        assert_eq!(Square(7, 7).to_string(), "h1");
        assert_eq!(Square(9, 2).to_string(), "(9, 2)");
    }

    #[test]
    fn test_index_round_trip() {
        for sq in Square::all() {
            let idx = sq.index().unwrap();
            assert_eq!(Square::from_index(idx), sq);
        }
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_square_color_parity() {
        assert_eq!(Square(0, 0).color(), Some(SquareColor::Light));
        assert_eq!(Square(0, 1).color(), Some(SquareColor::Dark));
        assert_eq!(Square(7, 7).color(), Some(SquareColor::Light));
        assert_eq!(Square(8, 0).color(), None);
    }
}
