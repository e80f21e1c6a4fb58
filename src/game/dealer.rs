use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckExhausted, ShowdownError};
use crate::hand::Hand;
use crate::result::determine_winner;

use super::{Game, GameState};

/// Draws into `hand` while its total is below `stands_on`.
///
/// Returns the cards drawn, in order. Drawing stops the moment the total
/// reaches `stands_on`.
///
/// # Errors
///
/// Returns [`DeckExhausted`] if the deck runs out while the dealer must draw.
/// Cards drawn before that stay in `hand`.
pub fn play_out(
    hand: &mut Hand,
    deck: &mut Deck,
    stands_on: u16,
) -> Result<Vec<Card>, DeckExhausted> {
    let mut drawn = Vec::new();
    while hand.value() < stands_on {
        let card = deck.deal()?;
        hand.add_card(card);
        drawn.push(card);
    }
    Ok(drawn)
}

impl Game {
    /// Dealer plays their hand and the round is decided.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has not stood yet, or the deck is empty
    /// while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerPlay {
            return Err(ShowdownError::InvalidState);
        }

        let drawn = play_out(&mut self.dealer, &mut self.deck, self.options.dealer_stands_on)?;
        log::debug!(
            "dealer drew {} card(s), total {}",
            drawn.len(),
            self.dealer.value()
        );

        self.outcome = Some(determine_winner(&self.player, &self.dealer));
        self.set_state(GameState::RoundOver);

        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Diamonds, rank)
    }

    #[test]
    fn stops_as_soon_as_total_reaches_threshold() {
        let mut hand: Hand = [card(Rank::Ten), card(Rank::Five)].into_iter().collect();
        // Deals come off the end: the Five first, then the Three.
        let mut deck = Deck::from_cards(vec![card(Rank::Three), card(Rank::Five)]);

        let drawn = play_out(&mut hand, &mut deck, 17).unwrap();
        assert_eq!(drawn, [card(Rank::Five)]);
        assert_eq!(hand.value(), 20);
        assert_eq!(deck.cards(), [card(Rank::Three)]);
    }

    #[test]
    fn no_draw_at_seventeen() {
        let mut hand: Hand = [card(Rank::Ten), card(Rank::Seven)].into_iter().collect();
        let mut deck = Deck::initialize();

        let drawn = play_out(&mut hand, &mut deck, 17).unwrap();
        assert!(drawn.is_empty());
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn draws_several_small_cards() {
        let mut hand: Hand = [card(Rank::Two), card(Rank::Three)].into_iter().collect();
        let mut deck = Deck::from_cards(vec![
            card(Rank::King),
            card(Rank::Four),
            card(Rank::Two),
            card(Rank::Three),
        ]);

        let drawn = play_out(&mut hand, &mut deck, 17).unwrap();
        assert_eq!(
            drawn,
            [card(Rank::Three), card(Rank::Two), card(Rank::Four), card(Rank::King)]
        );
        assert_eq!(hand.value(), 24);
        assert!(hand.is_bust());
    }

    #[test]
    fn empty_deck_while_drawing_is_reported() {
        let mut hand: Hand = [card(Rank::Two)].into_iter().collect();
        let mut deck = Deck::from_cards(vec![card(Rank::Four)]);

        assert_eq!(play_out(&mut hand, &mut deck, 17), Err(DeckExhausted));
        assert_eq!(hand.value(), 6);
    }
}
