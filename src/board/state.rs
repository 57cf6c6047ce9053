use std::fmt;

use super::{BoardError, Move, Piece, PieceKind, Side, Square, SquareColor, BOARD_SIZE};

const EMPTY_ROW: [Option<Piece>; 8] = [None; 8];

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// The board knows nothing about whose turn it is or how the pieces got
/// there; it only stores occupancy. Cloning is a plain copy of the 64 cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Board with the standard 32-piece starting setup.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for side in Side::BOTH {
            let back = side.back_row() as usize;
            let pawns = side.pawn_start_row() as usize;
            for (col, kind) in BACK_ROW.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(*kind, side));
                board.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, side));
            }
        }
        board
    }

    pub fn empty() -> Self {
        Board {
            squares: [EMPTY_ROW; 8],
        }
    }

    pub fn is_on_board(&self, square: Square) -> bool {
        square.is_on_board()
    }

    fn cell(square: Square) -> Result<(usize, usize), BoardError> {
        if square.is_on_board() {
            Ok((square.row() as usize, square.col() as usize))
        } else {
            Err(BoardError::SquareOutOfBounds { square })
        }
    }

    pub fn piece_at(&self, square: Square) -> Result<Option<Piece>, BoardError> {
        let (row, col) = Self::cell(square)?;
        Ok(self.squares[row][col])
    }

    /// Occupancy of a square, treating off-board squares as empty.
    pub(crate) fn get(&self, square: Square) -> Option<Piece> {
        self.piece_at(square).ok().flatten()
    }

    pub fn is_empty(&self, square: Square) -> Result<bool, BoardError> {
        Ok(self.piece_at(square)?.is_none())
    }

    pub fn set(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        let (row, col) = Self::cell(square)?;
        self.squares[row][col] = Some(piece);
        Ok(())
    }

    pub fn clear(&mut self, square: Square) -> Result<(), BoardError> {
        let (row, col) = Self::cell(square)?;
        self.squares[row][col] = None;
        Ok(())
    }

    /// Move whatever stands on `from` to `to`, overwriting `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        let piece = self
            .piece_at(from)?
            .ok_or(BoardError::NoPieceAtSquare { square: from })?;
        Self::cell(to)?;
        self.clear(from)?;
        self.set(to, piece)
    }

    /// Apply a move: clear every vacated square, then write every populated one.
    ///
    /// All squares are bounds-checked before anything is written, so an
    /// error leaves the board untouched.
    pub fn apply(&mut self, mv: &Move) -> Result<(), BoardError> {
        let vacated = mv.vacated();
        let populated = mv.populated();
        for square in vacated.iter().chain(populated.iter().map(|(sq, _)| sq)) {
            Self::cell(*square)?;
        }
        for square in vacated {
            self.clear(square)?;
        }
        for (square, piece) in populated {
            self.set(square, piece)?;
        }
        Ok(())
    }

    pub fn square_color(&self, square: Square) -> Result<SquareColor, BoardError> {
        square
            .color()
            .ok_or(BoardError::SquareOutOfBounds { square })
    }

    pub fn king_position(&self, side: Side) -> Result<Square, BoardError> {
        let king = Piece::new(PieceKind::King, side);
        Square::all()
            .find(|sq| self.get(*sq) == Some(king))
            .ok_or(BoardError::NoKingFound { side })
    }

    /// All squares holding one of `side`'s pieces, in row-major order.
    pub fn piece_positions(&self, side: Side) -> Vec<Square> {
        Square::all()
            .filter(|sq| self.get(*sq).is_some_and(|p| p.side == side))
            .collect()
    }

    /// Iterate over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Square(row, col)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, "___")?,
                }
            }
        }
        Ok(())
    }
}
