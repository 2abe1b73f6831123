use crate::opponent::{self, OpponentMove};

use super::{Game, GameState, Side};

impl Game {
    /// Lets the opponent pick and apply its move. Returns whether a move was
    /// made.
    pub(super) fn run_opponent_turn(&mut self) -> bool {
        if self.state != GameState::InProgress || self.turn != Side::Opponent {
            return false;
        }
        let Some(ctx) = self.play_context() else {
            return false;
        };

        match opponent::choose_move(&self.opponent_hand, &ctx) {
            OpponentMove::Play(id) => {
                if let Err(err) = self.apply_play(Side::Opponent, &[id]) {
                    log::debug!("opponent play rejected ({err}), drawing instead");
                    self.apply_draw(Side::Opponent);
                }
            }
            OpponentMove::Draw => {
                self.apply_draw(Side::Opponent);
            }
        }
        true
    }
}
