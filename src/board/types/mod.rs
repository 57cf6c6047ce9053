//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `PieceKind`, `Side` and `Piece` - chess pieces and their owners
//! - `Square` and `SquareColor` - board coordinates
//! - `Move` and `CastleSide` - move representation
//! - `CastlingRights` - castling state
//! - `TurnRecord` - per-turn history entry

mod castling;
mod moves;
mod piece;
mod square;
mod turn;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{CastleSide, Move};
pub use piece::{Piece, PieceKind, Side, PROMOTION_KINDS};
pub use square::{Square, SquareColor, BOARD_SIZE};
pub use turn::TurnRecord;
