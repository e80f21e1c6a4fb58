//! A single-round terminal blackjack game.
//!
//! The crate provides a [`Game`] type that runs one round between a player
//! and the dealer: the initial deal, hit/stand decisions, dealer play, and
//! the result. Either side busts above 21 and an Ace always counts 11.
//!
//! # Example
//!
//! ```
//! use poker21::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal_initial().unwrap();
//! game.stand().unwrap();
//! game.dealer_play().unwrap();
//! assert_eq!(game.state(), GameState::RoundOver);
//! assert!(game.outcome().is_some());
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod display;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod save;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use console::{Console, IoConsole};
pub use deck::Deck;
pub use error::{
    ActionError, DealError, DeckExhausted, InputError, SaveError, SessionError, ShowdownError,
};
pub use game::{Game, GameState};
pub use hand::{BUST_LIMIT, Hand};
pub use options::GameOptions;
pub use result::{Outcome, determine_winner};
pub use session::MenuChoice;
