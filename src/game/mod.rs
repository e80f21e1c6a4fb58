//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, DeckExhausted, SaveError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::save::save_game;

mod actions;
mod dealer;
pub mod state;

pub use dealer::play_out;
pub use state::GameState;

/// Cards dealt before the player's first choice, two per side.
const INITIAL_CARDS: usize = 4;

/// A single round of blackjack between one player and the dealer.
///
/// The game owns the deck and both hands for the length of the round. Drive
/// it with [`Game::deal_initial`], then [`Game::hit`] / [`Game::stand`], and
/// finally [`Game::dealer_play`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    deck: Deck,
    state: GameState,
    player: Hand,
    dealer: Hand,
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a game with a fresh deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use poker21::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::DealingInitialHands);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        log::debug!("shuffling deck with seed {seed}");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::initialize();
        deck.shuffle(&mut rng);
        Self::from_deck(options, deck)
    }

    /// Creates a game that deals from `deck` as given, without shuffling.
    #[must_use]
    pub const fn from_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            options,
            deck,
            state: GameState::DealingInitialHands,
            player: Hand::new(),
            dealer: Hand::new(),
            outcome: None,
        }
    }

    fn draw(&mut self) -> Result<Card, DeckExhausted> {
        let card = self.deck.deal()?;
        log::debug!("dealt {card}, {} left", self.deck.len());
        Ok(card)
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("state {:?} -> {state:?}", self.state);
        self.state = state;
    }

    /// Deals two cards to the player, then two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt, or if the deck holds fewer
    /// than four cards. In the latter case the deck and hands are untouched.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != GameState::DealingInitialHands {
            return Err(DealError::InvalidState);
        }

        // Nothing is dealt unless all four cards are available.
        if self.deck.len() < INITIAL_CARDS {
            return Err(DeckExhausted.into());
        }

        for _ in 0..INITIAL_CARDS / 2 {
            let card = self.draw()?;
            self.player.add_card(card);
        }
        for _ in 0..INITIAL_CARDS / 2 {
            let card = self.draw()?;
            self.dealer.add_card(card);
        }

        self.set_state(GameState::AwaitingPlayerChoice);
        Ok(())
    }

    /// Writes both hands to the configured save file.
    ///
    /// The round is not affected whether or not this succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), SaveError> {
        save_game(&self.options.save_path, &self.player, &self.dealer).inspect_err(|err| {
            log::info!("{err}");
        })
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the outcome once the round has been decided.
    ///
    /// This stays `None` if the player exits early.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the dealer's hole card should be shown.
    #[must_use]
    pub const fn dealer_revealed(&self) -> bool {
        !self.options.conceal_hole_card
            || matches!(self.state, GameState::DealerPlay | GameState::RoundOver)
    }
}
