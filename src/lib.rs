//! Chess rules engine.
//!
//! [`board`] holds the position model and move rules; [`game`] drives a
//! two-player game turn by turn on top of it and decides when it is over.
//!
//! ```
//! use chess_rules::{Game, GameStatus, Square};
//!
//! let mut game = Game::new();
//! game.perform_turn(Square(6, 4), Square(4, 4), None).unwrap();
//! assert_eq!(game.turn_number(), 2);
//! assert_eq!(game.status(), GameStatus::NotConcluded);
//! ```

pub mod board;
pub mod game;

pub use board::{Board, Move, Piece, PieceKind, Side, Square};
pub use game::{Game, GameStatus, TurnError};
