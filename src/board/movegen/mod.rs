//! Move generation and legality.
//!
//! Generation runs in two layers. The per-piece rules in the submodules
//! produce pseudo-legal moves from board geometry and occupancy alone. The
//! functions here filter those through a self-check probe: each candidate is
//! applied to a clone of the board and rejected if the mover's king would be
//! standing on a square the opponent threatens.

mod kings;
mod knights;
mod pawns;
mod sliders;

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, BoardError, CastlingRights, Move, Piece, PieceKind, Side, Square, TurnRecord};

/// Check classification for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckStatus {
    NotInCheck,
    InCheck,
    Checkmate,
    Stalemate,
}

impl CheckStatus {
    /// Combine the two facts that decide the status.
    #[must_use]
    pub const fn classify(in_check: bool, has_escape: bool) -> Self {
        match (in_check, has_escape) {
            (false, true) => CheckStatus::NotInCheck,
            (false, false) => CheckStatus::Stalemate,
            (true, true) => CheckStatus::InCheck,
            (true, false) => CheckStatus::Checkmate,
        }
    }
}

/// History-derived facts that move generation needs beyond piece placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveContext {
    /// Castling rights still available to each side
    pub castling: CastlingRights,
    /// The turn played immediately before this position, for en passant
    pub last_turn: Option<TurnRecord>,
}

impl MoveContext {
    #[must_use]
    pub const fn new(castling: CastlingRights, last_turn: Option<TurnRecord>) -> Self {
        MoveContext {
            castling,
            last_turn,
        }
    }

    /// Context for a board with no history: rights follow piece placement.
    #[must_use]
    pub fn for_board(board: &Board) -> Self {
        MoveContext::new(CastlingRights::from_placement(|sq| board.get(sq)), None)
    }

    /// Context of the position reached by the turn in `record`.
    #[must_use]
    pub fn after(&self, record: TurnRecord) -> Self {
        let mut castling = self.castling;
        castling.update_for_turn(record.from, record.to);
        MoveContext::new(castling, Some(record))
    }
}

/// Move rules evaluated against one board.
///
/// The generator borrows the board it inspects, so probing a hypothetical
/// position means building a second generator over a cloned board.
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator<'a> {
    board: &'a Board,
    context: MoveContext,
}

impl<'a> MoveGenerator<'a> {
    #[must_use]
    pub const fn new(board: &'a Board, context: MoveContext) -> Self {
        MoveGenerator { board, context }
    }

    #[must_use]
    pub const fn board(&self) -> &'a Board {
        self.board
    }

    #[must_use]
    pub const fn context(&self) -> &MoveContext {
        &self.context
    }

    fn occupied_piece(&self, square: Square) -> Result<Piece, BoardError> {
        self.board
            .piece_at(square)?
            .ok_or(BoardError::NoPieceAtSquare { square })
    }

    fn piece_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, piece),
            PieceKind::Knight => self.knight_moves(from, piece),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.slider_moves(from, piece)
            }
            PieceKind::King => self.king_moves(from, piece),
        }
    }

    /// Pseudo-legal moves for the piece on `from`, castling included for kings.
    pub fn pseudo_legal_moves(&self, from: Square) -> Result<Vec<Move>, BoardError> {
        let piece = self.occupied_piece(from)?;
        let mut moves = self.piece_moves(from, piece);
        if piece.is_kind(PieceKind::King) {
            moves.extend(self.castling_moves(from, piece));
        }
        Ok(moves)
    }

    /// Squares `side` could move a piece onto, castling excluded.
    ///
    /// Pawns threaten their two forward diagonals whether or not anything
    /// stands there, and never the squares straight ahead.
    pub fn threatened_squares(&self, side: Side) -> HashSet<Square> {
        let mut threatened = HashSet::new();
        for (from, piece) in self.board.pieces().filter(|(_, p)| p.side == side) {
            if piece.is_kind(PieceKind::Pawn) {
                threatened.extend(self.pawn_attack_squares(from, side));
            } else {
                threatened.extend(self.piece_moves(from, piece).iter().map(Move::to));
            }
        }
        threatened
    }

    pub fn is_in_check(&self, side: Side) -> Result<bool, BoardError> {
        let king = self.board.king_position(side)?;
        Ok(self.threatened_squares(side.opponent()).contains(&king))
    }

    /// True if making `mv` would leave the mover's own king attacked.
    pub fn results_in_self_check(&self, mv: &Move) -> Result<bool, BoardError> {
        let mut probe = self.board.clone();
        probe.apply(mv)?;
        MoveGenerator::new(&probe, self.context).is_in_check(mv.side())
    }

    /// Strictly legal moves for the piece on `from`.
    pub fn legal_moves(&self, from: Square) -> Result<Vec<Move>, BoardError> {
        let mut legal = Vec::new();
        for mv in self.pseudo_legal_moves(from)? {
            if !self.results_in_self_check(&mv)? {
                legal.push(mv);
            }
        }
        Ok(legal)
    }

    /// Every legal move available to `side`.
    pub fn legal_moves_for_side(&self, side: Side) -> Result<Vec<Move>, BoardError> {
        let mut legal = Vec::new();
        for from in self.board.piece_positions(side) {
            legal.extend(self.legal_moves(from)?);
        }
        Ok(legal)
    }

    /// True if `side` has at least one legal move. Stops at the first one found.
    pub fn has_legal_move(&self, side: Side) -> Result<bool, BoardError> {
        for from in self.board.piece_positions(side) {
            for mv in self.pseudo_legal_moves(from)? {
                if !self.results_in_self_check(&mv)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    pub fn check_status(&self, side: Side) -> Result<CheckStatus, BoardError> {
        let in_check = self.is_in_check(side)?;
        let has_escape = self.has_legal_move(side)?;
        Ok(CheckStatus::classify(in_check, has_escape))
    }
}
