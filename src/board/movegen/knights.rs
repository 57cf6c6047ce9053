use super::super::attack_tables::{targets, KNIGHT_TARGETS};
use super::super::{Move, Piece, Square};
use super::MoveGenerator;

impl MoveGenerator<'_> {
    pub(crate) fn knight_moves(&self, from: Square, piece: Piece) -> Vec<Move> {
        targets(&KNIGHT_TARGETS, from)
            .iter()
            .filter(|to| self.board.get(**to).map_or(true, |p| p.side != piece.side))
            .map(|&to| Move::Basic { from, to, piece })
            .collect()
    }
}
