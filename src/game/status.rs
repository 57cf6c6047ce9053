//! Game result tracking.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{CheckStatus, Side};

/// Overall state of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    NotConcluded,
    WhiteWins,
    BlackWins,
    Stalemate,
}

impl GameStatus {
    /// Returns true for the terminal states
    #[inline]
    #[must_use]
    pub const fn is_concluded(self) -> bool {
        !matches!(self, GameStatus::NotConcluded)
    }

    /// The status implied by `side_to_move`'s check classification.
    #[must_use]
    pub const fn after_check(side_to_move: Side, check: CheckStatus) -> Self {
        match check {
            CheckStatus::Checkmate => GameStatus::win_for(side_to_move.opponent()),
            CheckStatus::Stalemate => GameStatus::Stalemate,
            CheckStatus::NotInCheck | CheckStatus::InCheck => GameStatus::NotConcluded,
        }
    }

    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::White => GameStatus::WhiteWins,
            Side::Black => GameStatus::BlackWins,
        }
    }

    /// The winning side, if any
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameStatus::WhiteWins => Some(Side::White),
            GameStatus::BlackWins => Some(Side::Black),
            GameStatus::NotConcluded | GameStatus::Stalemate => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::NotConcluded => write!(f, "not concluded"),
            GameStatus::WhiteWins => write!(f, "White wins"),
            GameStatus::BlackWins => write!(f, "Black wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}
