//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = Game::new();
//! game.perform_turn(Square(6, 4), Square(4, 4), None).unwrap();
//! assert_eq!(game.side_to_move(), Side::Black);
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, CastleSide, CastlingRights, CheckStatus, Move, MoveContext,
    MoveGenerator, Piece, PieceKind, Side, Square, TurnRecord,
};
pub use crate::game::{Game, GameStatus, TurnError};
