//! The draw pile.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardId, DECK_SIZE, Rank, Suit};

/// An ordered pile of cards drawn from the front.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds the full 52-card deck in construction order (suit by suit,
    /// two through ace), unshuffled.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        let mut next_id: u16 = 0;

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(CardId(next_id), rank, suit));
                next_id += 1;
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards, front first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the remaining cards uniformly.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Puts the given cards back into the deck and shuffles it.
    pub fn refill<R: Rng + ?Sized>(&mut self, cards: impl IntoIterator<Item = Card>, rng: &mut R) {
        self.cards.extend(cards);
        self.shuffle(rng);
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards from front to back.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
