use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, -1), (0, 1), (-1, 0)];

pub(crate) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn targets_for(deltas: &[(i8, i8)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|from| {
            deltas
                .iter()
                .map(|&(dr, dc)| from.offset(dr, dc))
                .filter(|sq| sq.is_on_board())
                .collect()
        })
        .collect()
}

/// On-board knight destinations for each of the 64 squares.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| targets_for(&KNIGHT_DELTAS));

/// On-board king step destinations for each of the 64 squares.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| targets_for(&KING_DELTAS));

/// Table lookup; off-board squares have no targets.
pub(crate) fn targets(table: &'static [Vec<Square>], from: Square) -> &'static [Square] {
    match from.index() {
        Some(idx) => &table[idx],
        None => &[],
    }
}
