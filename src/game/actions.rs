use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::AwaitingPlayerChoice {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card busts the player, the round ends with
    /// [`Outcome::DealerWinsBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.outcome = Some(Outcome::DealerWinsBust);
            self.set_state(GameState::RoundOver);
        }

        Ok(card)
    }

    /// Player action: Stand (pass play to the dealer).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.set_state(GameState::DealerPlay);
        Ok(())
    }

    /// Player action: leave the round without a result.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn exit(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.set_state(GameState::RoundOver);
        Ok(())
    }
}
