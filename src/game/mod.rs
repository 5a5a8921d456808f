//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::GameOptions;
use crate::pile::Pile;

mod actions;
pub mod state;

pub use state::GameState;

/// A crazy-eights-style solitaire game engine.
///
/// The engine owns the draw pile, the discard pile, and the player's hand;
/// all mutation goes through [`Game::start_game`], [`Game::draw`] and
/// [`Game::play`]. After `start_game` the three containers always hold the
/// full deck between them: `draw_count + discard_count + hand.len() == 52`.
///
/// The container fields are public so that tests and tooling can stage
/// specific layouts; mutating them directly mid-game voids the conservation
/// invariant above.
pub struct Game {
    /// Face-down pile cards are drawn from.
    pub draw_pile: Pile<Card>,
    /// Face-up pile of played cards. Only the top card is active for
    /// legality checks.
    pub discard: Pile<Card>,
    /// The player's hand.
    pub hand: Vec<Card>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed.
    ///
    /// All containers start empty; call [`Game::start_game`] to shuffle and
    /// deal.
    ///
    /// # Example
    ///
    /// ```
    /// use ocho::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.start_game();
    /// assert_eq!(game.hand().len(), 7);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            draw_pile: Pile::new(),
            discard: Pile::new(),
            hand: Vec::new(),
            options,
            state: GameState::Idle,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates and shuffles a full 52-card deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Starts a new game, discarding any prior state.
    ///
    /// Builds and shuffles the full deck, deals the configured number of
    /// cards into the hand one at a time from the top of the draw pile, and
    /// flips one further card onto the discard pile as the active card.
    pub fn start_game(&mut self) {
        let cards = Self::create_deck(&mut self.rng);

        // The last shuffled card ends up on top of the draw pile.
        self.draw_pile = Pile::new();
        for card in cards {
            self.draw_pile.push(card);
        }

        self.hand = Vec::new();
        self.discard = Pile::new();

        for _ in 0..self.options.initial_hand_size {
            if let Some(card) = self.draw_pile.pop() {
                self.hand.push(card);
            }
        }

        if let Some(card) = self.draw_pile.pop() {
            self.discard.push(card);
        }

        self.state = GameState::AwaitingMove;
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_pile.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Returns the active card: the top of the discard pile, which the next
    /// play is validated against. `None` before the first `start_game`.
    #[must_use]
    pub fn active_card(&self) -> Option<Card> {
        self.discard.peek().copied()
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }
}
