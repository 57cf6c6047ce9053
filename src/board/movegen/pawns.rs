use super::super::{Move, Piece, PieceKind, Side, Square, PROMOTION_KINDS};
use super::MoveGenerator;

impl MoveGenerator<'_> {
    pub(crate) fn pawn_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let side = piece.side;
        let dir = side.direction();
        let mut moves = Vec::new();

        let forward = from.offset(dir, 0);
        if forward.is_on_board() && self.board.get(forward).is_none() {
            push_advance(&mut moves, from, forward, piece);

            if from.row() == side.pawn_start_row() {
                let double_forward = from.offset(2 * dir, 0);
                if self.board.get(double_forward).is_none() {
                    moves.push(Move::Basic {
                        from,
                        to: double_forward,
                        piece,
                    });
                }
            }
        }

        for target in self.pawn_attack_squares(from, side) {
            if self.board.get(target).is_some_and(|p| p.side != side) {
                push_advance(&mut moves, from, target, piece);
            }
        }

        if let Some(mv) = self.en_passant_move(from, side) {
            moves.push(mv);
        }

        moves
    }

    /// The two forward diagonals of a pawn that are on the board.
    pub(crate) fn pawn_attack_squares(&self, from: Square, side: Side) -> Vec<Square> {
        [-1, 1]
            .iter()
            .map(|&dc| from.offset(side.direction(), dc))
            .filter(|sq| sq.is_on_board())
            .collect()
    }

    /// En passant is open only right after an enemy pawn advanced two rows
    /// and came to rest beside this pawn.
    fn en_passant_move(&self, from: Square, side: Side) -> Option<Move> {
        let last = self.context.last_turn?;
        if !last.is_two_row_pawn_advance() || last.from_piece.side == side {
            return None;
        }
        if last.to.row() != from.row() || (last.to.col() - from.col()).abs() != 1 {
            return None;
        }
        let enemy_pawn = Piece::new(PieceKind::Pawn, side.opponent());
        if self.board.get(last.to) != Some(enemy_pawn) {
            return None;
        }
        let to = last.to.offset(side.direction(), 0);
        if !to.is_on_board() || self.board.get(to).is_some() {
            return None;
        }
        Some(Move::EnPassant { from, to, side })
    }
}

/// A forward step or capture, expanded into the four promotions on the far row.
fn push_advance(moves: &mut Vec<Move>, from: Square, to: Square, piece: Piece) {
    if to.row() == piece.side.promotion_row() {
        for kind in PROMOTION_KINDS {
            moves.push(Move::Promotion {
                from,
                to,
                promoted: Piece::new(kind, piece.side),
            });
        }
    } else {
        moves.push(Move::Basic { from, to, piece });
    }
}
