//! Error types for game operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A card was requested from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the deck is exhausted")]
pub struct DeckExhausted;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for dealer play.
    #[error("invalid game state for dealer play")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),
}

/// Errors that can occur while reading a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input was not a number.
    #[error("invalid input, please enter a number")]
    InvalidInput,
    /// The number does not name a menu option. Numbers too large to
    /// represent are reported as [`u64::MAX`].
    #[error("invalid option {0}")]
    InvalidOption(u64),
}

/// Errors that can occur while saving the hands.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The save file could not be created or written.
    #[error("failed to write {}", path.display())]
    Io {
        /// Path of the save file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The initial deal failed.
    #[error("initial deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play failed.
    #[error("dealer play failed: {0}")]
    Showdown(#[from] ShowdownError),
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}
