//! A turn-based twenty-one (blackjack-style) round engine.
//!
//! The crate provides a [`Round`] type that owns the deck and the
//! participants, deals opening hands, drives each participant's turn
//! through its decision policy, tracks who remains in contention, and
//! resolves a unique winner or a tie.
//!
//! Rendering and input live outside the engine, behind [`TableObserver`]
//! and [`InputSource`].
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{NullObserver, Participant, Round};
//!
//! let participants = vec![Participant::dealer("Dealer", 0)];
//! let mut round = Round::new(participants, 42);
//! let _ = round.play(&mut NullObserver);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod observer;
pub mod participant;
pub mod policy;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use deck::Deck;
pub use error::RoundError;
pub use hand::{BUST_THRESHOLD, Hand};
pub use observer::{NullObserver, ParticipantView, TableObserver};
pub use participant::{Participant, Role, TurnState};
pub use policy::{
    Action, DEALER_STAND_AT, DealerPolicy, DecisionPolicy, ExternalPolicy, InputSource, TurnView,
};
pub use round::Round;
