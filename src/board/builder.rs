//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece instead of replaying moves.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, PieceKind, Side, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Side::White, PieceKind::King)
//!     .piece(Square(0, 4), Side::Black, PieceKind::King)
//!     .piece(Square(6, 0), Side::White, PieceKind::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, BoardError, Piece, PieceKind, Side, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().collect(),
        }
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, side: Side, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(kind, side)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Build the board.
    ///
    /// Fails with `SquareOutOfBounds` if any piece was placed off the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set(square, piece)?;
        }
        Ok(board)
    }
}
