//! Text shown on the console.

use crate::hand::Hand;

/// Greeting printed before the round starts.
pub const BANNER: &str = "Welcome to Poker!\nLet's play.\n\n";

/// Menu printed before each player choice.
pub const MENU: &str = "1. Hit\n2. Stand\n3. Save Game\n4. Exit\nChoose an option: ";

/// Placeholder for a face-down card.
pub const HIDDEN_CARD: &str = "[Hidden Card]";

/// How much of a hand to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Every card and the full total.
    All,
    /// The first card only; the rest are shown as [`HIDDEN_CARD`].
    FirstOnly,
}

/// Renders a hand under `owner`, e.g. `"Player's Hand:"`.
///
/// ```
/// use poker21::display::{Visibility, render_hand};
/// use poker21::{Card, Hand, Rank, Suit};
///
/// let hand: Hand = [Card::new(Suit::Spades, Rank::Ace)].into_iter().collect();
/// assert_eq!(
///     render_hand("Player's Hand:", &hand, Visibility::All),
///     "Player's Hand:\nHand:\nAce of Spades\nTotal Value: 11\n\n"
/// );
/// ```
#[must_use]
pub fn render_hand(owner: &str, hand: &Hand, visibility: Visibility) -> String {
    let mut out = format!("{owner}\nHand:\n");
    for (index, card) in hand.cards().iter().enumerate() {
        let line = if visibility == Visibility::All || index == 0 {
            card.to_string()
        } else {
            HIDDEN_CARD.to_string()
        };
        out.push_str(&line);
        out.push('\n');
    }
    let total = match visibility {
        Visibility::All => hand.value(),
        Visibility::FirstOnly => hand.visible_value(),
    };
    out.push_str(&format!("Total Value: {total}\n\n"));
    out
}
