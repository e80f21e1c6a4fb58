//! Round outcome and winner determination.

use core::cmp::Ordering;
use core::fmt;

use crate::hand::Hand;

/// Final outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins because the dealer busted.
    PlayerWinsBust,
    /// Dealer wins because the player busted.
    DealerWinsBust,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Equal totals.
    Tie,
}

impl Outcome {
    /// Announcement printed at the end of the round.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWinsBust => "Player wins (Dealer busted).",
            Self::DealerWinsBust => "Dealer wins (Player busted).",
            Self::PlayerWins => "Player wins.",
            Self::DealerWins => "Dealer wins.",
            Self::Tie => "It's a tie.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decides the round.
///
/// A player bust is checked first, so when both hands bust the dealer wins.
#[must_use]
pub fn determine_winner(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_bust() {
        return Outcome::DealerWinsBust;
    }
    if dealer.is_bust() {
        return Outcome::PlayerWinsBust;
    }

    match player.value().cmp(&dealer.value()) {
        Ordering::Greater => Outcome::PlayerWins,
        Ordering::Less => Outcome::DealerWins,
        Ordering::Equal => Outcome::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        ranks
            .iter()
            .map(|&rank| Card::new(Suit::Hearts, rank))
            .collect()
    }

    #[test]
    fn player_bust_beats_everything() {
        let player = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        let dealer = hand(&[Rank::King, Rank::Ten]);
        assert_eq!(player.value(), 22);
        assert_eq!(determine_winner(&player, &dealer), Outcome::DealerWinsBust);
        assert_eq!(
            determine_winner(&player, &dealer).to_string(),
            "Dealer wins (Player busted)."
        );
    }

    #[test]
    fn double_bust_goes_to_dealer() {
        let player = hand(&[Rank::King, Rank::Queen, Rank::Five]);
        let dealer = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(determine_winner(&player, &dealer), Outcome::DealerWinsBust);
    }

    #[test]
    fn dealer_bust_gives_player_the_win() {
        let player = hand(&[Rank::King, Rank::Eight]);
        let dealer = hand(&[Rank::King, Rank::Queen, Rank::Two]);
        assert_eq!(determine_winner(&player, &dealer), Outcome::PlayerWinsBust);
        assert_eq!(
            Outcome::PlayerWinsBust.to_string(),
            "Player wins (Dealer busted)."
        );
    }

    #[test]
    fn one_point_margins_decide_the_round() {
        let twenty_one = hand(&[Rank::Ace, Rank::King]);
        let twenty = hand(&[Rank::King, Rank::Queen]);
        assert_eq!(determine_winner(&twenty_one, &twenty), Outcome::PlayerWins);
        assert_eq!(determine_winner(&twenty, &twenty_one), Outcome::DealerWins);
        assert_eq!(determine_winner(&twenty_one, &twenty_one), Outcome::Tie);
    }

    #[test]
    fn higher_total_wins_and_equal_ties() {
        let twenty = hand(&[Rank::King, Rank::Queen]);
        let nineteen = hand(&[Rank::King, Rank::Nine]);

        assert_eq!(determine_winner(&twenty, &nineteen), Outcome::PlayerWins);
        assert_eq!(determine_winner(&nineteen, &twenty), Outcome::DealerWins);
        assert_eq!(determine_winner(&twenty, &twenty), Outcome::Tie);
        assert_eq!(Outcome::PlayerWins.to_string(), "Player wins.");
        assert_eq!(Outcome::DealerWins.to_string(), "Dealer wins.");
        assert_eq!(Outcome::Tie.to_string(), "It's a tie.");
    }
}
