//! Play legality and special-card effects.

use crate::card::{Card, Rank, Suit};

/// Pickup penalty added by a two.
pub const PENALTY_TWO: u32 = 2;

/// Pickup penalty added by the queen of spades.
pub const PENALTY_QUEEN_OF_SPADES: u32 = 5;

/// What a new play is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayContext {
    /// The card on top of the discard pile.
    pub active: Card,
    /// Suit named by the last eight, overriding the active card's suit.
    pub wild_suit: Option<Suit>,
    /// Pickup penalty owed by the side about to act.
    pub pending_pickup: u32,
}

impl PlayContext {
    /// Returns the suit a play has to follow.
    #[must_use]
    pub fn suit_to_match(&self) -> Suit {
        self.wild_suit.unwrap_or(self.active.suit)
    }
}

/// Returns whether `card` may lead a play.
///
/// A card is playable when it follows the suit (or the wild suit), matches
/// the active rank, is an eight, or is a two answering a pending pickup.
#[must_use]
pub fn can_play(card: &Card, ctx: &PlayContext) -> bool {
    card.suit == ctx.suit_to_match()
        || card.rank == ctx.active.rank
        || card.rank == Rank::Eight
        || (ctx.pending_pickup > 0 && card.rank == Rank::Two)
}

/// Effect of a card becoming the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No special effect.
    None,
    /// Adds to the pending pickup.
    Pickup(u32),
    /// Skips the next turn.
    Skip,
    /// Names a new suit.
    Wild,
}

/// Looks up the effect of `card`.
#[must_use]
pub fn effect_of(card: &Card) -> Effect {
    match card.rank {
        Rank::Two => Effect::Pickup(PENALTY_TWO),
        Rank::Four | Rank::Ace => Effect::Skip,
        Rank::Eight => Effect::Wild,
        Rank::Queen if card.is_queen_of_spades() => Effect::Pickup(PENALTY_QUEEN_OF_SPADES),
        _ => Effect::None,
    }
}
