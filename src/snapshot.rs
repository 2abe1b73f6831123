//! Read-only view of a game for presentation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::{Card, Suit};
use crate::game::{GameState, Side};

/// Everything a presentation layer needs to render the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// The player's cards, in hand order.
    pub player_hand: Vec<Card>,
    /// Number of cards the opponent holds.
    pub opponent_hand_count: usize,
    /// Top card of the discard pile.
    pub active_card: Option<Card>,
    /// Side authorized to act next.
    pub turn: Side,
    /// Pickup penalty owed by the side about to act.
    pub pending_pickup: u32,
    /// Suit named by the last eight, if any.
    pub wild_suit: Option<Suit>,
    /// Whether the player must choose a suit before play continues.
    pub awaiting_suit_choice: bool,
    /// Current game state.
    pub state: GameState,
    /// Side that emptied its hand first.
    pub winner: Option<Side>,
    /// Transient message describing the last notable event.
    pub message: Option<String>,
    /// Cards left in the deck.
    pub deck_remaining: usize,
}

impl Snapshot {
    /// Returns "Player wins" or "Opponent wins" once the game is over.
    #[must_use]
    pub const fn winner_label(&self) -> Option<&'static str> {
        match self.winner {
            Some(Side::Player) => Some("Player wins"),
            Some(Side::Opponent) => Some("Opponent wins"),
            None => None,
        }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
