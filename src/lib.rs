//! A crazy-eights-style solitaire card game engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that manages deck construction,
//! shuffling, dealing, the draw and discard piles, move validation, and
//! recycling the discard pile back into the draw pile. It is intended to sit
//! behind a presentation layer that renders the state and dispatches the
//! player's actions.
//!
//! # Example
//!
//! ```
//! use ocho::{Game, GameOptions, PlayOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start_game();
//!
//! // Try every card in hand against the active card.
//! let playable = game
//!     .hand()
//!     .iter()
//!     .copied()
//!     .find(|card| game.active_card().is_some_and(|top| card.is_playable_on(top)));
//!
//! match playable {
//!     Some(card) => {
//!         let outcome = game.play(card).unwrap();
//!         assert_eq!(outcome, PlayOutcome::Continue);
//!     }
//!     None => {
//!         game.draw().unwrap();
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod options;
pub mod pile;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{DrawError, PlayError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use pile::Pile;
pub use result::PlayOutcome;
