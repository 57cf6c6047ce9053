//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `board_state.rs` - Occupancy, bounds checking and move application
//! - `edge_cases.rs` - Special positions and special moves
//! - `perft.rs` - Node counts against published reference values
//! - `proptest.rs` - Property-based tests over random playouts

mod proptest;

use super::{Board, Piece, PieceKind, Side, Square};

/// Build a board from the piece-placement field of a FEN string.
///
/// The first rank listed is row 0, which matches this crate's layout.
pub(super) fn board_from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    for (row, rank) in placement.split('/').enumerate() {
        let mut col = 0i8;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as i8;
                continue;
            }
            let side = if ch.is_ascii_uppercase() {
                Side::White
            } else {
                Side::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("bad piece letter {other:?} in {placement}"),
            };
            board
                .set(Square(row as i8, col), Piece::new(kind, side))
                .unwrap();
            col += 1;
        }
    }
    board
}

#[test]
fn test_placement_helper_matches_initial_board() {
    assert_eq!(
        board_from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        Board::new()
    );
}
