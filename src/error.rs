//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when playing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No game has been started.
    #[error("no game has been started")]
    NotStarted,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// Not this side's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// A skip or an opponent move is still being resolved.
    #[error("the current turn is still resolving")]
    TurnResolving,
    /// A suit must be chosen first.
    #[error("a suit must be chosen first")]
    SuitChoicePending,
    /// No cards were selected.
    #[error("no cards selected")]
    EmptySelection,
    /// The same card was selected twice.
    #[error("card selected more than once")]
    DuplicateCard,
    /// A selected card is not in the hand.
    #[error("card not in hand")]
    CardNotInHand,
    /// The selection does not match the active card.
    #[error("illegal play")]
    IllegalPlay,
}

/// Errors that can occur when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No game has been started.
    #[error("no game has been started")]
    NotStarted,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// Not this side's turn.
    #[error("not your turn")]
    NotYourTurn,
    /// A skip or an opponent move is still being resolved.
    #[error("the current turn is still resolving")]
    TurnResolving,
    /// A suit must be chosen first.
    #[error("a suit must be chosen first")]
    SuitChoicePending,
}

/// Errors that can occur when choosing a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// No game has been started.
    #[error("no game has been started")]
    NotStarted,
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// No eight is waiting for a suit.
    #[error("no suit choice is pending")]
    NoSuitChoicePending,
}

impl From<DrawError> for PlayError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::NotStarted => Self::NotStarted,
            DrawError::GameOver => Self::GameOver,
            DrawError::NotYourTurn => Self::NotYourTurn,
            DrawError::TurnResolving => Self::TurnResolving,
            DrawError::SuitChoicePending => Self::SuitChoicePending,
        }
    }
}
