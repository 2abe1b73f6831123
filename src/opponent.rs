//! The computer opponent's decision procedure.

use rand::Rng;

use crate::card::{CardId, Suit};
use crate::hand::Hand;
use crate::rules::{PlayContext, can_play};

/// A move picked by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMove {
    /// Play the single card with this id.
    Play(CardId),
    /// Draw the pending penalty, or one card when none is owed.
    Draw,
}

/// Picks the opponent's move.
///
/// A pending pickup is always drawn; the opponent never answers it with a
/// two. Otherwise the first playable card in hand order is played, and if
/// there is none the opponent draws.
#[must_use]
pub fn choose_move(hand: &Hand, ctx: &PlayContext) -> OpponentMove {
    if ctx.pending_pickup > 0 {
        return OpponentMove::Draw;
    }

    hand.cards()
        .iter()
        .find(|card| can_play(card, ctx))
        .map_or(OpponentMove::Draw, |card| OpponentMove::Play(card.id))
}

/// Picks a suit uniformly at random after the opponent plays an eight.
pub fn choose_suit<R: Rng + ?Sized>(rng: &mut R) -> Suit {
    Suit::ALL[rng.random_range(0..Suit::ALL.len())]
}
