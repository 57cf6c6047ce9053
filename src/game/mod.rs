//! Game controller: turn order, move execution and result tracking.
//!
//! A [`Game`] owns the authoritative board. Callers hand it fully resolved
//! `(from, to, promotion)` requests; it finds the unique legal move that
//! matches, applies it, records the turn and reclassifies the position.

mod controller;
mod error;
mod status;

pub use controller::Game;
pub use error::TurnError;
pub use status::GameStatus;
