use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Move, Piece, PieceKind, Square};
use super::MoveGenerator;

fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

impl MoveGenerator<'_> {
    /// Ray moves for bishops, rooks and queens.
    ///
    /// Each ray continues over empty squares and ends at the first occupied
    /// one, which is included only when it holds an enemy piece.
    pub(crate) fn slider_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        for &(dr, dc) in directions(piece.kind) {
            let mut to = from.offset(dr, dc);
            while to.is_on_board() {
                match self.board.get(to) {
                    None => moves.push(Move::Basic { from, to, piece }),
                    Some(other) => {
                        if other.side != piece.side {
                            moves.push(Move::Basic { from, to, piece });
                        }
                        break;
                    }
                }
                to = to.offset(dr, dc);
            }
        }
        moves
    }
}
