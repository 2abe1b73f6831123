extern crate alloc;

use alloc::string::String;

use crate::card::{Card, CardId, Suit};
use crate::error::{DrawError, PlayError, SuitError};
use crate::hand::has_duplicates;
use crate::opponent;
use crate::rules::{self, Effect};

use super::{Game, GameState, Side, TaskKind};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), DrawError> {
        match self.state {
            GameState::NotStarted => return Err(DrawError::NotStarted),
            GameState::GameOver => return Err(DrawError::GameOver),
            GameState::AwaitingSuitChoice => return Err(DrawError::SuitChoicePending),
            GameState::InProgress => {}
        }

        if self.turn != Side::Player {
            return Err(DrawError::NotYourTurn);
        }

        if self.is_resolving() {
            return Err(DrawError::TurnResolving);
        }

        Ok(())
    }

    /// Player action: play the selected cards as one batch.
    ///
    /// Only the first card is checked against the active card unless
    /// [`GameOptions::strict_batches`](crate::GameOptions::strict_batches) is
    /// set. The last card becomes the active card and its effect resolves.
    /// Returns the new active card.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the selection is
    /// empty, repeats a card, names a card the player does not hold, or is
    /// not a legal play. A rejected play changes nothing.
    pub fn play_cards(&mut self, selection: &[CardId]) -> Result<Card, PlayError> {
        self.ensure_player_turn()?;
        self.apply_play(Side::Player, selection)
    }

    /// Player action: draw the pending penalty, or one card when none is
    /// owed, and pass the turn.
    ///
    /// Returns the number of cards actually drawn, which is lower than owed
    /// when the deck runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn draw_card(&mut self) -> Result<usize, DrawError> {
        self.ensure_player_turn()?;
        Ok(self.apply_draw(Side::Player))
    }

    /// Player action: name the suit after playing an eight.
    ///
    /// # Errors
    ///
    /// Returns an error if no eight played by the player is waiting for a
    /// suit.
    pub fn choose_suit(&mut self, suit: Suit) -> Result<(), SuitError> {
        match self.state {
            GameState::NotStarted => return Err(SuitError::NotStarted),
            GameState::GameOver => return Err(SuitError::GameOver),
            GameState::InProgress => return Err(SuitError::NoSuitChoicePending),
            GameState::AwaitingSuitChoice => {}
        }

        self.wild_suit = Some(suit);
        self.state = GameState::InProgress;
        self.set_message(alloc::format!("Suit changed to {suit}"));
        log::debug!("player named {suit}");

        self.end_turn(Side::Player);
        Ok(())
    }

    pub(super) fn apply_play(
        &mut self,
        side: Side,
        selection: &[CardId],
    ) -> Result<Card, PlayError> {
        let ctx = self.play_context().ok_or(PlayError::NotStarted)?;
        let (&first_id, rest) = selection.split_first().ok_or(PlayError::EmptySelection)?;

        if has_duplicates(selection) {
            return Err(PlayError::DuplicateCard);
        }

        let hand = match side {
            Side::Player => &self.player_hand,
            Side::Opponent => &self.opponent_hand,
        };
        let first = *hand.get(first_id).ok_or(PlayError::CardNotInHand)?;
        if !rest.iter().all(|&id| hand.contains(id)) {
            return Err(PlayError::CardNotInHand);
        }

        if !rules::can_play(&first, &ctx) {
            return Err(PlayError::IllegalPlay);
        }

        if self.options.strict_batches
            && rest
                .iter()
                .filter_map(|&id| hand.get(id))
                .any(|card| card.rank != first.rank)
        {
            return Err(PlayError::IllegalPlay);
        }

        let mut played = self
            .hand_mut(side)
            .take(selection)
            .ok_or(PlayError::CardNotInHand)?;
        let last = played.pop().ok_or(PlayError::EmptySelection)?;

        self.discard.push(ctx.active);
        self.discard.extend(played);
        self.active = Some(last);
        self.wild_suit = None;
        self.message = None;

        log::debug!(
            "{side:?} played {} card(s), active card {last}",
            selection.len()
        );

        if self.check_winner() {
            return Ok(last);
        }

        self.resolve_effect(side, &last);
        Ok(last)
    }

    fn resolve_effect(&mut self, side: Side, card: &Card) {
        match rules::effect_of(card) {
            Effect::Pickup(amount) => {
                self.pending_pickup += amount;
                log::debug!("pending pickup is now {}", self.pending_pickup);
                self.end_turn(side);
            }
            Effect::Skip => {
                self.scheduler.schedule(
                    self.options.skip_delay_ms,
                    self.generation,
                    TaskKind::SkipTurn(side),
                );
            }
            Effect::Wild => match side {
                Side::Opponent => {
                    let suit = opponent::choose_suit(&mut self.rng);
                    self.wild_suit = Some(suit);
                    self.set_message(alloc::format!("Opponent changed suit to {suit}"));
                    log::debug!("opponent named {suit}");
                    self.end_turn(side);
                }
                Side::Player => {
                    self.state = GameState::AwaitingSuitChoice;
                }
            },
            Effect::None => self.end_turn(side),
        }
    }

    pub(super) fn apply_draw(&mut self, side: Side) -> usize {
        let owed = self.pending_pickup.max(1) as usize;
        let mut drawn = 0;

        while drawn < owed {
            let Some(card) = self.draw() else {
                break;
            };
            self.hand_mut(side).add_card(card);
            drawn += 1;
        }

        self.pending_pickup = 0;
        self.message = (drawn < owed).then(|| String::from("The deck is empty"));
        log::debug!("{side:?} drew {drawn} of {owed} card(s)");

        if !self.check_winner() {
            self.end_turn(side);
        }
        drawn
    }

    /// Consumes the turn skipped by a four or an ace so that `side` moves
    /// again.
    pub(super) fn resolve_skip(&mut self, side: Side) -> bool {
        if self.state != GameState::InProgress || self.turn != side {
            return false;
        }

        self.set_message(alloc::format!("{} was skipped", side.other().label()));
        log::debug!("{:?} skipped, {side:?} moves again", side.other());

        if side == Side::Opponent {
            self.schedule_opponent_move();
        }
        true
    }
}
