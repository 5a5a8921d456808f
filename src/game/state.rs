//! Game state types.

/// Game state.
///
/// The state is observational: it tells the presentation layer what to
/// render, and operations do not gate on it beyond their own preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game has been started yet.
    Idle,
    /// A game is in progress and the player may draw or play.
    AwaitingMove,
    /// The hand has been emptied by a legal play. Terminal until the next
    /// `start_game`.
    Won,
}
