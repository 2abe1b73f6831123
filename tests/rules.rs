//! Legality, effect, opponent policy, and pile tests.

mod common;

use common::{card, cards};
use eights::opponent::{choose_move, choose_suit};
use eights::rules::{PENALTY_QUEEN_OF_SPADES, PENALTY_TWO, effect_of};
use eights::{
    Card, CardId, DECK_SIZE, Deck, Effect, Hand, OpponentMove, PlayContext, Rank, Suit, can_play,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use Rank::*;
use Suit::*;

fn ctx(active: Card, wild_suit: Option<Suit>, pending_pickup: u32) -> PlayContext {
    PlayContext {
        active,
        wild_suit,
        pending_pickup,
    }
}

#[test]
fn follows_suit_or_rank() {
    let on = ctx(card(Seven, Clubs), None, 0);

    assert!(can_play(&card(King, Clubs), &on));
    assert!(can_play(&card(Seven, Hearts), &on));
    assert!(!can_play(&card(King, Hearts), &on));
}

#[test]
fn eight_is_always_playable() {
    for active in Deck::new().cards() {
        for suit in Suit::ALL {
            assert!(can_play(&card(Eight, suit), &ctx(*active, None, 0)));
            assert!(can_play(&card(Eight, suit), &ctx(*active, Some(Hearts), 5)));
        }
    }
}

#[test]
fn wild_suit_overrides_active_suit() {
    let on = ctx(card(Eight, Clubs), Some(Diamonds), 0);

    assert!(can_play(&card(Three, Diamonds), &on));
    assert!(!can_play(&card(Three, Clubs), &on));
}

#[test]
fn two_is_playable_only_against_a_pending_pickup() {
    let calm = ctx(card(Nine, Spades), None, 0);
    let owed = ctx(card(Nine, Spades), None, 2);

    assert!(!can_play(&card(Two, Hearts), &calm));
    assert!(can_play(&card(Two, Hearts), &owed));
    assert!(!can_play(&card(Three, Hearts), &owed));
}

#[test]
fn effect_table() {
    assert_eq!(effect_of(&card(Two, Hearts)), Effect::Pickup(PENALTY_TWO));
    assert_eq!(
        effect_of(&card(Queen, Spades)),
        Effect::Pickup(PENALTY_QUEEN_OF_SPADES)
    );
    assert_eq!(effect_of(&card(Queen, Hearts)), Effect::None);
    assert_eq!(effect_of(&card(Four, Diamonds)), Effect::Skip);
    assert_eq!(effect_of(&card(Ace, Clubs)), Effect::Skip);
    assert_eq!(effect_of(&card(Eight, Spades)), Effect::Wild);
    assert_eq!(effect_of(&card(King, Spades)), Effect::None);
    assert_eq!(PENALTY_TWO, 2);
    assert_eq!(PENALTY_QUEEN_OF_SPADES, 5);
}

#[test]
fn opponent_draws_any_pending_penalty() {
    let hand = Hand::from_cards(cards(&[(Two, Hearts), (Nine, Hearts)]));

    assert_eq!(
        choose_move(&hand, &ctx(card(Two, Spades), None, 2)),
        OpponentMove::Draw
    );
}

#[test]
fn opponent_plays_first_legal_card_in_hand_order() {
    let hand = Hand::from_cards(cards(&[(King, Clubs), (Eight, Spades), (Nine, Hearts)]));

    assert_eq!(
        choose_move(&hand, &ctx(card(Five, Hearts), None, 0)),
        OpponentMove::Play(card(Eight, Spades).id)
    );
    assert_eq!(
        choose_move(&hand, &ctx(card(King, Diamonds), None, 0)),
        OpponentMove::Play(card(King, Clubs).id)
    );
}

#[test]
fn opponent_draws_without_a_legal_card() {
    let hand = Hand::from_cards(cards(&[(King, Clubs), (Nine, Hearts)]));

    assert_eq!(
        choose_move(&hand, &ctx(card(Five, Spades), None, 0)),
        OpponentMove::Draw
    );
    assert_eq!(
        choose_move(&Hand::new(), &ctx(card(Five, Spades), None, 0)),
        OpponentMove::Draw
    );
}

#[test]
fn opponent_suit_choice_covers_every_suit() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut seen = Vec::new();
    for _ in 0..200 {
        let suit = choose_suit(&mut rng);
        if !seen.contains(&suit) {
            seen.push(suit);
        }
    }

    assert_eq!(seen.len(), Suit::ALL.len());
}

#[test]
fn new_deck_is_complete_and_drawn_from_front() {
    let mut deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let first = deck.draw().unwrap();
    assert_eq!(first.rank, Two);
    assert_eq!(first.suit, Hearts);
    assert_eq!(deck.len(), DECK_SIZE - 1);

    let mut deck = Deck::from_cards(cards(&[(Ace, Spades)]));
    assert_eq!(deck.draw(), Some(card(Ace, Spades)));
    assert_eq!(deck.draw(), None);
    assert!(deck.is_empty());
}

#[test]
fn shuffle_keeps_every_card() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(11));

    let mut ids: Vec<CardId> = deck.cards().map(|c| c.id).collect();
    assert_ne!(ids, Deck::new().cards().map(|c| c.id).collect::<Vec<_>>());
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), DECK_SIZE);
}

#[test]
fn hand_removes_by_identity() {
    let twin_a = Card::new(CardId(100), Seven, Hearts);
    let twin_b = Card::new(CardId(101), Seven, Hearts);
    let mut hand = Hand::from_cards(vec![twin_a, card(Two, Clubs), twin_b]);

    assert_eq!(hand.take(&[twin_b.id]), Some(vec![twin_b]));
    assert_eq!(hand.cards(), &[twin_a, card(Two, Clubs)]);
}

#[test]
fn hand_take_is_all_or_nothing() {
    let mut hand = Hand::from_cards(cards(&[(Two, Clubs), (Five, Hearts)]));

    assert_eq!(hand.take(&[card(Two, Clubs).id, card(Ace, Clubs).id]), None);
    assert_eq!(hand.take(&[card(Two, Clubs).id, card(Two, Clubs).id]), None);
    assert_eq!(hand.len(), 2);

    assert_eq!(
        hand.take(&[card(Five, Hearts).id, card(Two, Clubs).id]),
        Some(cards(&[(Five, Hearts), (Two, Clubs)]))
    );
    assert!(hand.is_empty());
}

#[test]
fn card_display() {
    assert_eq!(card(Queen, Spades).to_string(), "Q of Spades");
    assert_eq!(card(Ten, Hearts).to_string(), "10 of Hearts");
    assert_eq!(Ace.value(), 14);
    assert_eq!(Two.value(), 2);
}
