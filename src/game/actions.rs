use alloc::vec::Vec;

use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::{DrawError, PlayError};
use crate::result::PlayOutcome;

use super::{Game, GameState};

impl Game {
    /// Draws one card from the draw pile into the hand and returns it.
    ///
    /// If the draw pile is empty, the discard pile (minus the active card)
    /// is first shuffled back into the draw pile.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if no card is available even after
    /// recycling, i.e. fewer than two cards exist outside the hand. The game
    /// state is left unchanged. Given engine-only mutation this requires the
    /// whole deck to be in the hand already, so the error doubles as a
    /// defensive assertion.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        if self.draw_pile.is_empty() {
            self.recycle_discard_into_draw();
        }

        match self.draw_pile.pop() {
            Some(card) => {
                self.hand.push(card);
                Ok(card)
            }
            None => {
                // The original UI only flagged the sub-case where cards sat
                // unrecycled in the discard; an empty discard stays quiet.
                if self.discard.len() > 1 {
                    log::warn!("draw pile empty but discard still holds cards");
                }
                Err(DrawError::Exhausted)
            }
        }
    }

    /// Plays a card from the hand onto the discard pile.
    ///
    /// The card must match the active card by suit or by rank. A winning
    /// play (the hand becomes empty) returns [`PlayOutcome::Won`] and moves
    /// the game to [`GameState::Won`].
    ///
    /// The hand entry is matched by value equality on (suit, rank), not by
    /// any notion of identity, so the caller may pass any equal `Card`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active card, the card is not playable
    /// on it, or the card is not in the hand. On error the hand and both
    /// piles are unchanged.
    pub fn play(&mut self, card: Card) -> Result<PlayOutcome, PlayError> {
        let top = *self.discard.peek().ok_or(PlayError::NoActiveCard)?;

        if !card.is_playable_on(top) {
            return Err(PlayError::NotPlayable);
        }

        let index = self
            .hand
            .iter()
            .position(|held| *held == card)
            .ok_or(PlayError::NotInHand)?;

        self.hand.remove(index);
        self.discard.push(card);

        if self.hand.is_empty() {
            self.state = GameState::Won;
            Ok(PlayOutcome::Won)
        } else {
            Ok(PlayOutcome::Continue)
        }
    }

    /// Shuffles the discard pile, except its top (active) card, back into
    /// the draw pile.
    ///
    /// No-op when the discard holds one card or fewer: the active card is
    /// never recycled.
    fn recycle_discard_into_draw(&mut self) {
        if self.discard.len() <= 1 {
            return;
        }

        // Set the visible card aside so it survives the recycle.
        let active = self.discard.pop();

        let mut buffer: Vec<Card> = Vec::with_capacity(self.discard.len());
        while let Some(card) = self.discard.pop() {
            buffer.push(card);
        }

        buffer.shuffle(&mut self.rng);
        for card in buffer {
            self.draw_pile.push(card);
        }

        if let Some(card) = active {
            self.discard.push(card);
        }
    }
}
