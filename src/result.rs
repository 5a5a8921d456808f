//! Outcome types reported to the presentation layer.

/// Outcome of a successful play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was played and the game continues.
    Continue,
    /// The card was played and the hand is now empty: game over, you win.
    Won,
}
