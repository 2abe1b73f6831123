//! Game state types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    /// No game has been dealt yet.
    NotStarted,
    /// Waiting for the side whose turn it is.
    InProgress,
    /// The player played an eight and must name a suit.
    AwaitingSuitChoice,
    /// A hand was emptied.
    GameOver,
}

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }

    /// Returns the display label of the side.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Opponent => "Opponent",
        }
    }
}
