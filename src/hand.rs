//! Player and dealer hand representation.

use crate::card::Card;

/// Highest total a hand can hold without busting.
pub const BUST_LIMIT: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> u16 {
    cards.iter().map(Card::value).sum()
}

/// An ordered set of cards held by the player or the dealer.
///
/// The total and bust state are computed from the cards on every call, so
/// they always agree with the hand's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sum of all card values. An Ace always counts 11.
    #[must_use]
    pub fn value(&self) -> u16 {
        evaluate_cards(&self.cards)
    }

    /// Value of the first card only, as seen while the rest are face down.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        self.cards.first().map_or(0, Card::value)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BUST_LIMIT
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
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn value_tracks_every_added_card() {
        let mut hand = Hand::new();
        assert_eq!(hand.value(), 0);
        assert!(!hand.is_bust());

        let draws = [
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Clubs, Rank::Nine),
            Card::new(Suit::Spades, Rank::Two),
        ];
        let mut expected = 0;
        for card in draws {
            hand.add_card(card);
            expected += card.value();
            assert_eq!(hand.value(), expected);
        }
        assert_eq!(hand.value(), 22);
        assert!(hand.is_bust());
    }

    #[test]
    fn two_aces_bust_without_soft_adjustment() {
        let hand: Hand = [
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Spades, Rank::Ace),
        ]
        .into_iter()
        .collect();
        assert_eq!(hand.value(), 22);
        assert!(hand.is_bust());
    }

    #[test]
    fn twenty_one_is_not_bust() {
        let hand: Hand = [
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Spades, Rank::King),
        ]
        .into_iter()
        .collect();
        assert_eq!(hand.value(), BUST_LIMIT);
        assert!(!hand.is_bust());
    }

    #[test]
    fn visible_value_counts_first_card() {
        let hand: Hand = [
            Card::new(Suit::Diamonds, Rank::Seven),
            Card::new(Suit::Clubs, Rank::Queen),
        ]
        .into_iter()
        .collect();
        assert_eq!(hand.visible_value(), 7);
        assert_eq!(Hand::new().visible_value(), 0);
    }
}
