//! Helpers shared by the integration tests.

#![allow(dead_code)]

use chess_rules::board::{PieceKind, Square};
use chess_rules::{Game, TurnError};

/// Parse an algebraic square name such as `e2`.
pub fn square(name: &str) -> Square {
    let bytes = name.as_bytes();
    assert_eq!(bytes.len(), 2, "bad square {name:?}");
    let col = (bytes[0] - b'a') as i8;
    let rank = (bytes[1] - b'0') as i8;
    Square(8 - rank, col)
}

/// Parse coordinate notation: `e2e4`, or `a7a8q` with a promotion letter.
pub fn parse_move(text: &str) -> (Square, Square, Option<PieceKind>) {
    let promotion = text.chars().nth(4).map(|ch| match ch {
        'q' => PieceKind::Queen,
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        other => panic!("bad promotion letter {other:?} in {text}"),
    });
    (square(&text[0..2]), square(&text[2..4]), promotion)
}

/// Perform one turn written in coordinate notation.
pub fn play(game: &mut Game, text: &str) -> Result<(), TurnError> {
    let (from, to, promotion) = parse_move(text);
    game.perform_turn(from, to, promotion).map(|_| ())
}

/// Perform a sequence of turns, panicking on the first rejected one.
pub fn play_all(game: &mut Game, moves: &[&str]) {
    for (ply, text) in moves.iter().enumerate() {
        if let Err(err) = play(game, text) {
            panic!("ply {} ({text}) rejected: {err}", ply + 1);
        }
    }
}
