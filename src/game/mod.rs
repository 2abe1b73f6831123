//! Game engine and state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::rules::{self, PlayContext};
use crate::snapshot::Snapshot;

mod actions;
mod opponent_turn;
pub mod schedule;
pub mod state;

use schedule::Scheduler;
pub use schedule::{Task, TaskKind};
pub use state::{GameState, Side};

/// A fixed arrangement of cards to start a game from.
///
/// The caller is responsible for keeping card ids unique across all piles.
#[derive(Debug, Clone)]
pub struct Layout {
    /// The player's hand.
    pub player: Vec<Card>,
    /// The opponent's hand.
    pub opponent: Vec<Card>,
    /// The initial active card.
    pub active: Card,
    /// The deck, front first.
    pub deck: Vec<Card>,
    /// Side that moves first.
    pub turn: Side,
}

/// A Crazy Eights game between a human player and a computer opponent.
///
/// The game owns the deck, both hands, the discard pile, and a queue of
/// deferred effects driven by a logical millisecond clock. The presentation
/// layer sends intents through the entry points and reads a [`Snapshot`]
/// after each one.
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    rng: ChaCha8Rng,
    state: GameState,
    deck: Deck,
    /// Cards buried under the active card, oldest first.
    discard: Vec<Card>,
    player_hand: Hand,
    opponent_hand: Hand,
    active: Option<Card>,
    turn: Side,
    pending_pickup: u32,
    wild_suit: Option<Suit>,
    winner: Option<Side>,
    message: Option<String>,
    generation: u64,
    scheduler: Scheduler,
    discarded_tasks: usize,
}

impl Game {
    /// Creates a new game with the given seed. No cards are dealt until
    /// [`Game::start_new_game`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use eights::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// game.start_new_game();
    /// assert_eq!(game.state(), GameState::InProgress);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: GameState::NotStarted,
            deck: Deck::default(),
            discard: Vec::new(),
            player_hand: Hand::new(),
            opponent_hand: Hand::new(),
            active: None,
            turn: Side::Player,
            pending_pickup: 0,
            wild_suit: None,
            winner: None,
            message: None,
            generation: 0,
            scheduler: Scheduler::default(),
            discarded_tasks: 0,
        }
    }

    /// Creates a game already started from `layout`.
    #[must_use]
    pub fn with_layout(options: GameOptions, seed: u64, layout: Layout) -> Self {
        let mut game = Self::new(options, seed);
        game.start_from_layout(layout);
        game
    }

    /// Shuffles a fresh deck, deals both hands, and turns up the first
    /// active card. Any effect still queued for the previous game is
    /// invalidated.
    ///
    /// Hand sizes above 25 are clamped so that an active card remains.
    pub fn start_new_game(&mut self) {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.reset(deck);

        let hand_size = self.options.hand_size.min((DECK_SIZE - 1) / 2);
        for _ in 0..hand_size {
            for side in [Side::Player, Side::Opponent] {
                if let Some(card) = self.deck.draw() {
                    self.hand_mut(side).add_card(card);
                }
            }
        }
        self.active = self.deck.draw();
        self.state = GameState::InProgress;

        log::debug!(
            "game {} dealt {} cards each, active card {:?}",
            self.generation,
            hand_size,
            self.active
        );
    }

    /// Starts a new game from a fixed arrangement of cards.
    ///
    /// Like [`Game::start_new_game`], this invalidates deferred effects of
    /// the previous game.
    pub fn start_from_layout(&mut self, layout: Layout) {
        self.reset(Deck::from_cards(layout.deck));
        self.player_hand = Hand::from_cards(layout.player);
        self.opponent_hand = Hand::from_cards(layout.opponent);
        self.active = Some(layout.active);
        self.turn = layout.turn;
        self.state = GameState::InProgress;

        log::debug!("game {} started from layout", self.generation);

        if self.turn == Side::Opponent {
            self.schedule_opponent_move();
        }
    }

    fn reset(&mut self, deck: Deck) {
        self.generation += 1;
        let stale = self.scheduler.retain_generation(self.generation);
        if stale > 0 {
            log::trace!("invalidated {stale} tasks of a previous game");
            self.discarded_tasks += stale;
        }

        self.deck = deck;
        self.discard.clear();
        self.player_hand.clear();
        self.opponent_hand.clear();
        self.active = None;
        self.turn = Side::Player;
        self.pending_pickup = 0;
        self.wild_suit = None;
        self.winner = None;
        self.message = None;
    }

    const fn hand_mut(&mut self, side: Side) -> &mut Hand {
        match side {
            Side::Player => &mut self.player_hand,
            Side::Opponent => &mut self.opponent_hand,
        }
    }

    /// Draws one card, refilling the deck from the discard pile first when
    /// recycling is enabled.
    fn draw(&mut self) -> Option<Card> {
        if self.deck.is_empty() && self.options.recycle_discard && !self.discard.is_empty() {
            log::debug!("recycling {} discarded cards", self.discard.len());
            self.deck.refill(self.discard.drain(..), &mut self.rng);
        }
        self.deck.draw()
    }

    /// Records a winner if either hand is empty. Returns whether the game
    /// ended.
    fn check_winner(&mut self) -> bool {
        let winner = if self.player_hand.is_empty() {
            Side::Player
        } else if self.opponent_hand.is_empty() {
            Side::Opponent
        } else {
            return false;
        };

        self.winner = Some(winner);
        self.state = GameState::GameOver;
        self.message = Some(alloc::format!("{} wins", winner.label()));
        self.discarded_tasks += self.scheduler.clear();
        log::debug!("game {} won by {winner:?}", self.generation);
        true
    }

    /// Hands the turn to the other side.
    fn end_turn(&mut self, side: Side) {
        self.turn = side.other();
        if self.turn == Side::Opponent {
            self.schedule_opponent_move();
        }
    }

    fn schedule_opponent_move(&mut self) {
        self.scheduler.schedule(
            self.options.opponent_delay_ms,
            self.generation,
            TaskKind::OpponentMove,
        );
    }

    fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Advances the game clock by `elapsed_ms` and fires every deferred
    /// effect that falls due, in order. Returns how many were applied.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        let until = self.scheduler.now().saturating_add(elapsed_ms);
        let mut applied = 0;
        while let Some(task) = self.scheduler.pop_due(until) {
            if self.fire(task) {
                applied += 1;
            }
        }
        self.scheduler.set_now(until);
        applied
    }

    /// Fires deferred effects until none remain, jumping the clock to each
    /// one's due time. Returns how many were applied.
    pub fn run_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Some(task) = self.scheduler.pop_due(u64::MAX) {
            if self.fire(task) {
                applied += 1;
            }
        }
        applied
    }

    fn fire(&mut self, task: Task) -> bool {
        if task.generation != self.generation {
            log::trace!(
                "discarding stale {:?} from generation {}",
                task.kind,
                task.generation
            );
            self.discarded_tasks += 1;
            return false;
        }

        log::trace!("firing {:?} at t={}", task.kind, task.due);
        match task.kind {
            TaskKind::SkipTurn(side) => self.resolve_skip(side),
            TaskKind::OpponentMove => self.run_opponent_turn(),
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the side whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Side {
        self.turn
    }

    /// Returns the pickup penalty owed by the side about to act.
    #[must_use]
    pub const fn pending_pickup(&self) -> u32 {
        self.pending_pickup
    }

    /// Returns the suit named by the last eight.
    #[must_use]
    pub const fn wild_suit(&self) -> Option<Suit> {
        self.wild_suit
    }

    /// Returns the top card of the discard pile.
    #[must_use]
    pub const fn active_card(&self) -> Option<Card> {
        self.active
    }

    /// Returns the winner, once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Returns the last event message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the opponent's hand.
    #[must_use]
    pub const fn opponent_hand(&self) -> &Hand {
        &self.opponent_hand
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the cards buried under the active card, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Returns every card of the game, wherever it currently lies.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.deck
            .cards()
            .chain(self.player_hand.cards())
            .chain(self.opponent_hand.cards())
            .chain(self.discard.iter())
            .chain(self.active.as_ref())
            .copied()
            .collect()
    }

    /// Returns what a new play has to match, once a game has started.
    #[must_use]
    pub fn play_context(&self) -> Option<PlayContext> {
        self.active.map(|active| PlayContext {
            active,
            wild_suit: self.wild_suit,
            pending_pickup: self.pending_pickup,
        })
    }

    /// Returns whether `card` may lead a play right now.
    #[must_use]
    pub fn can_play(&self, card: &Card) -> bool {
        self.play_context()
            .is_some_and(|ctx| rules::can_play(card, &ctx))
    }

    /// Returns the current game generation. Every new game increments it.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the current time of the game clock, in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Returns when the next deferred effect falls due.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    /// Returns the queued deferred effects.
    #[must_use]
    pub fn pending_tasks(&self) -> &[Task] {
        self.scheduler.tasks()
    }

    /// Returns whether a deferred effect of this game is still queued.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.scheduler.has_pending(self.generation)
    }

    /// Returns how many deferred effects were dropped because their game
    /// had been replaced or had ended.
    #[must_use]
    pub const fn discarded_tasks(&self) -> usize {
        self.discarded_tasks
    }

    /// Returns a read-only snapshot for presentation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_hand: self.player_hand.cards().to_vec(),
            opponent_hand_count: self.opponent_hand.len(),
            active_card: self.active,
            turn: self.turn,
            pending_pickup: self.pending_pickup,
            wild_suit: self.wild_suit,
            awaiting_suit_choice: self.state == GameState::AwaitingSuitChoice,
            state: self.state,
            winner: self.winner,
            message: self.message.clone(),
            deck_remaining: self.deck.len(),
        }
    }
}
