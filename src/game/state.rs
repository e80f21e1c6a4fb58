//! Game state types.

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck is shuffled, no cards dealt yet.
    DealingInitialHands,
    /// Waiting for the player to hit, stand, save, or exit.
    AwaitingPlayerChoice,
    /// Player has stood; the dealer plays out their hand.
    DealerPlay,
    /// Round has ended.
    RoundOver,
}
