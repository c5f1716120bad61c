//! Error types for round operations.

use thiserror::Error;

/// Errors that can end a round early.
///
/// There is no variant for an out-of-range decision: [`crate::Action`] is a
/// closed enum, so a policy cannot return anything but Hit or Stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A draw was requested with no cards remaining in the deck.
    ///
    /// Fatal to the current round. Not expected in normal games of two to
    /// seven participants.
    #[error("no cards remaining in the deck")]
    DeckExhausted,
}
