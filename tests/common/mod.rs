//! Shared helpers for integration tests.

#![allow(dead_code)]

use eights::{Card, Deck, Layout, Rank, Side, Suit};

/// Pulls the uniquely-identified card of a standard deck.
pub fn card(rank: Rank, suit: Suit) -> Card {
    Deck::new()
        .cards()
        .copied()
        .find(|c| c.rank == rank && c.suit == suit)
        .unwrap()
}

pub fn cards(faces: &[(Rank, Suit)]) -> Vec<Card> {
    faces.iter().map(|&(rank, suit)| card(rank, suit)).collect()
}

/// Builds a layout whose deck starts with `deck_front` and continues with
/// every card not placed elsewhere, so all 52 cards are accounted for.
pub fn full_layout(
    player: &[(Rank, Suit)],
    opponent: &[(Rank, Suit)],
    active: (Rank, Suit),
    deck_front: &[(Rank, Suit)],
    turn: Side,
) -> Layout {
    let player = cards(player);
    let opponent = cards(opponent);
    let active = card(active.0, active.1);
    let mut deck = cards(deck_front);

    let placed: Vec<Card> = player
        .iter()
        .chain(&opponent)
        .chain(&deck)
        .copied()
        .chain(Some(active))
        .collect();
    deck.extend(Deck::new().cards().copied().filter(|c| !placed.contains(c)));

    Layout {
        player,
        opponent,
        active,
        deck,
        turn,
    }
}

/// Builds a layout with exactly the given deck.
pub fn small_layout(
    player: &[(Rank, Suit)],
    opponent: &[(Rank, Suit)],
    active: (Rank, Suit),
    deck: &[(Rank, Suit)],
    turn: Side,
) -> Layout {
    Layout {
        player: cards(player),
        opponent: cards(opponent),
        active: card(active.0, active.1),
        deck: cards(deck),
        turn,
    }
}

/// Asserts that every card of a standard deck is present exactly once.
pub fn assert_full_deck(all: &[Card]) {
    assert_eq!(all.len(), eights::DECK_SIZE);
    let mut ids: Vec<_> = all.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), eights::DECK_SIZE);
}
