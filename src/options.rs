//! Game configuration options.

use std::path::PathBuf;

/// File the hands are exported to unless configured otherwise.
pub const DEFAULT_SAVE_PATH: &str = "poker_game_save.txt";

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use poker21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(17)
///     .with_conceal_hole_card(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Where [`crate::Game::save`] writes the hands.
    pub save_path: PathBuf,
    /// The dealer draws while below this total.
    pub dealer_stands_on: u16,
    /// Whether the dealer's second card stays face down until the player stands.
    pub conceal_hole_card: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            dealer_stands_on: 17,
            conceal_hole_card: true,
        }
    }
}

impl GameOptions {
    /// Sets the save file path.
    ///
    /// # Example
    ///
    /// ```
    /// use poker21::GameOptions;
    ///
    /// let options = GameOptions::default().with_save_path("round.txt");
    /// assert_eq!(options.save_path.to_str(), Some("round.txt"));
    /// ```
    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use poker21::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u16) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether the dealer's hole card is hidden during the player's turn.
    ///
    /// # Example
    ///
    /// ```
    /// use poker21::GameOptions;
    ///
    /// let options = GameOptions::default().with_conceal_hole_card(false);
    /// assert!(!options.conceal_hole_card);
    /// ```
    #[must_use]
    pub const fn with_conceal_hole_card(mut self, conceal: bool) -> Self {
        self.conceal_hole_card = conceal;
        self
    }
}
