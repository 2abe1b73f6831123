//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId};

pub(crate) fn has_duplicates(ids: &[CardId]) -> bool {
    ids.iter()
        .enumerate()
        .any(|(i, id)| ids[i + 1..].contains(id))
}

/// The cards held by one side.
///
/// Insertion order is kept for display and for the opponent's scan order.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns whether the hand holds the card with the given id.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.get(id).is_some()
    }

    /// Removes the cards with the given ids, returned in the order requested.
    ///
    /// Either every id is present (and listed once) and all are removed, or
    /// nothing changes and `None` is returned.
    pub fn take(&mut self, ids: &[CardId]) -> Option<Vec<Card>> {
        if !ids.iter().all(|&id| self.contains(id)) || has_duplicates(ids) {
            return None;
        }

        let mut taken = Vec::with_capacity(ids.len());
        for &id in ids {
            let index = self.cards.iter().position(|card| card.id == id)?;
            taken.push(self.cards.remove(index));
        }
        Some(taken)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
