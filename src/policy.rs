//! Decision policies for drawing or stopping.

use crate::hand::Hand;

/// The dealer draws while its total is below this value.
pub const DEALER_STAND_AT: u8 = 17;

/// A turn action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// End the turn voluntarily.
    Stay,
}

/// Read-only view of the table given to a policy when it decides.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// The deciding participant's own hand.
    hand: &'a Hand,
}

impl<'a> TurnView<'a> {
    /// Creates a view over the deciding participant's hand.
    #[must_use]
    pub const fn new(hand: &'a Hand) -> Self {
        Self { hand }
    }

    /// The deciding participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &'a Hand {
        self.hand
    }

    /// The deciding participant's current total.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }
}

/// Chooses between hitting and staying each time a turn awaits a decision.
///
/// A policy is consulted once per decision point and must return; the round
/// blocks until it does. It cannot return an out-of-range value because
/// [`Action`] is closed.
pub trait DecisionPolicy {
    /// Picks the next action for the given table view.
    fn decide(&mut self, view: &TurnView<'_>) -> Action;
}

/// The fixed dealer rule: hit below [`DEALER_STAND_AT`], otherwise stay.
///
/// Deterministic; a soft total at or above the threshold stays.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerPolicy;

impl DecisionPolicy for DealerPolicy {
    fn decide(&mut self, view: &TurnView<'_>) -> Action {
        if view.total() < DEALER_STAND_AT {
            Action::Hit
        } else {
            Action::Stay
        }
    }
}

/// Supplies a validated choice from outside the engine.
///
/// The source must retry until it has a valid choice; the engine never sees
/// anything but a well-formed [`Action`]. The call may block the round
/// indefinitely.
pub trait InputSource {
    /// Obtains the next choice between [`Action::Hit`] and [`Action::Stay`].
    fn request_choice(&mut self) -> Action;
}

/// A policy that defers every decision to an [`InputSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalPolicy<I> {
    /// The input collaborator.
    source: I,
}

impl<I: InputSource> ExternalPolicy<I> {
    /// Wraps an input source as a decision policy.
    #[must_use]
    pub const fn new(source: I) -> Self {
        Self { source }
    }
}

impl<I: InputSource> DecisionPolicy for ExternalPolicy<I> {
    fn decide(&mut self, _view: &TurnView<'_>) -> Action {
        self.source.request_choice()
    }
}
