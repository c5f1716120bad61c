//! Deck construction and dealing.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, SUITS};
use crate::error::RoundError;

/// A shuffled deck of cards, consumed by dealing.
///
/// Dealt cards are removed and never return within a round. The top of the
/// deck is the end of the backing vector.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top last.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52 standard cards and shuffles them with the given RNG.
    #[must_use]
    pub fn standard(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a deck that deals exactly the given cards, in the given order.
    ///
    /// Intended for scripting deterministic rounds.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Re-randomizes the order of the remaining cards.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, RoundError> {
        self.cards.pop().ok_or(RoundError::DeckExhausted)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
