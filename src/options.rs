//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ocho::GameOptions;
///
/// let options = GameOptions::default().with_initial_hand_size(5);
/// assert_eq!(options.initial_hand_size, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards dealt into the hand by `start_game`.
    pub initial_hand_size: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_hand_size: 7,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt into the hand at game start.
    ///
    /// # Example
    ///
    /// ```
    /// use ocho::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_hand_size(10);
    /// assert_eq!(options.initial_hand_size, 10);
    /// ```
    #[must_use]
    pub const fn with_initial_hand_size(mut self, size: u8) -> Self {
        self.initial_hand_size = size;
        self
    }
}
