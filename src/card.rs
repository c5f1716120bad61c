//! Card types and face-value rules.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// All four suits, in deck-construction order.
pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when scoring a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The card's face value before any ace reduction.
    ///
    /// Number cards count as their rank, face cards as 10, and an ace as 11.
    #[must_use]
    pub const fn face_value(&self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// The reduction available on this card, if any.
    ///
    /// An ace can be softened from 11 to 1, a reduction of 10. Every other
    /// rank has no reduction.
    #[must_use]
    pub const fn reduction(&self) -> Option<u8> {
        match self.rank {
            1 => Some(10),
            _ => None,
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
