//! The 52-card deck.

use rand::RngCore;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckExhausted;

/// An ordered deck of cards. Cards are dealt from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a fresh, unshuffled deck.
    ///
    /// Cards are laid out suit-major in [`Suit::ALL`] order, ranks ascending
    /// from Two to Ace within each suit.
    #[must_use]
    pub fn initialize() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly `cards`. The last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Reorders the deck.
    ///
    /// Every position `i`, first to last, is swapped with
    /// `rng.next_u32() % len`. The index is not narrowed to the unshuffled
    /// tail, so the resulting permutation is not uniform.
    pub fn shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        for i in 0..len {
            let j = rng.next_u32() as usize % len;
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckExhausted`] if the deck is empty.
    pub fn deal(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Returns the remaining cards, in deal-last order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::initialize()
    }
}
