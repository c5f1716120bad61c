//! Hand representation and scoring.

use crate::card::Card;

/// A hand busts when its total exceeds this value.
pub const BUST_THRESHOLD: u8 = 21;

/// An ordered sequence of cards held by one participant.
///
/// Cards appear in draw order. The total is recomputed from the cards on
/// every read, never cached.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    ///
    /// Face values are summed with every ace at 11, then aces are softened
    /// to 1 (a reduction of 10 each) one at a time, in deterministic order,
    /// only while the total still exceeds [`BUST_THRESHOLD`]. Aces beyond
    /// those needed keep their value of 11.
    #[must_use]
    pub fn total(&self) -> u8 {
        let mut total: u8 = self
            .cards
            .iter()
            .fold(0, |sum: u8, card| sum.saturating_add(card.face_value()));

        let mut reductions: Vec<u8> = self
            .cards
            .iter()
            .filter_map(Card::reduction)
            .collect();
        reductions.sort_unstable();

        for reduction in reductions {
            if total <= BUST_THRESHOLD {
                break;
            }
            total -= reduction;
        }

        total
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.total() > BUST_THRESHOLD
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Discards all cards, for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
