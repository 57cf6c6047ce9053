//! Chess board representation and move rules.
//!
//! The board is a plain 8x8 grid of optional pieces. Move generation reads
//! a board plus a small [`MoveContext`] (castling rights and the previous
//! turn) and produces fully described [`Move`] values; legality is decided
//! by applying each candidate to a cloned board and checking the mover's
//! king.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, MoveContext, MoveGenerator, Side};
//!
//! let board = Board::new();
//! let generator = MoveGenerator::new(&board, MoveContext::default());
//! let moves = generator.legal_moves_for_side(Side::White).unwrap();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod builder;
mod error;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::BoardError;
pub use movegen::{CheckStatus, MoveContext, MoveGenerator};
pub use perft::perft;
pub use state::Board;
pub use types::{
    CastleSide, CastlingRights, Move, Piece, PieceKind, Side, Square, SquareColor, TurnRecord,
    BOARD_SIZE, PROMOTION_KINDS,
};
