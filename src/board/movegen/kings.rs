use super::super::attack_tables::{targets, KING_TARGETS};
use super::super::{CastleSide, Move, Piece, PieceKind, Square};
use super::MoveGenerator;

impl MoveGenerator<'_> {
    pub(crate) fn king_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        targets(&KING_TARGETS, from)
            .iter()
            .filter(|to| self.board.get(**to).map_or(true, |p| p.side != piece.side))
            .map(|&to| Move::Basic { from, to, piece })
            .collect()
    }

    /// Castle moves for the king on `from`.
    ///
    /// A castle needs the right to still be held, the king and rook on their
    /// home squares, an empty gap between them, and no enemy threat on any
    /// square the king starts on, crosses or lands on.
    pub(crate) fn castling_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let side = piece.side;
        if from != CastleSide::king_home(side) || !self.context.castling.has_any(side) {
            return Vec::new();
        }

        let back_row = side.back_row();
        let rook = Piece::new(PieceKind::Rook, side);
        let mut threatened = None;
        let mut moves = Vec::new();

        for castle_side in CastleSide::BOTH {
            if !self.context.castling.has(side, castle_side)
                || self.board.get(castle_side.rook_home(side)) != Some(rook)
            {
                continue;
            }
            let gap_is_empty = castle_side
                .between_cols()
                .iter()
                .all(|&col| self.board.get(Square(back_row, col)).is_none());
            if !gap_is_empty {
                continue;
            }

            // Computed at most once per call, and only when a castle is otherwise possible.
            let threatened =
                threatened.get_or_insert_with(|| self.threatened_squares(side.opponent()));
            let path_is_safe = castle_side
                .king_path_cols()
                .iter()
                .all(|&col| !threatened.contains(&Square(back_row, col)));
            if path_is_safe {
                moves.push(Move::Castle { side, castle_side });
            }
        }

        moves
    }
}
