//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when playing a card.
///
/// On any of these the hand and discard pile are left unchanged; the caller
/// decides how to surface the message to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The card matches neither the suit nor the rank of the active card.
    #[error("invalid move: check suit or rank against the active card")]
    NotPlayable,
    /// The discard pile has no active card (no game has been started).
    #[error("no active card on the discard pile")]
    NoActiveCard,
    /// The played card is not in the hand.
    #[error("card is not in the hand")]
    NotInHand,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Both piles are exhausted; recycling could not replenish the draw
    /// pile. The game state is unchanged.
    #[error("draw pile exhausted and nothing to recycle")]
    Exhausted,
}
