//! Display collaborator interface.

use crate::card::Card;

/// Snapshot of one participant's visible state, handed to an observer.
#[derive(Debug, Clone, Copy)]
pub struct ParticipantView<'a> {
    /// The participant's name.
    pub name: &'a str,
    /// The participant's cards, in draw order.
    pub cards: &'a [Card],
    /// The participant's current total.
    pub total: u8,
    /// Whether the participant is bust.
    pub busted: bool,
}

/// Receives participant snapshots for rendering.
///
/// Called after every applied decision and again for each participant at
/// round end. Purely observational; an observer never mutates round state.
pub trait TableObserver {
    /// Shows one participant's current state.
    fn show(&mut self, view: &ParticipantView<'_>);
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl TableObserver for NullObserver {
    fn show(&mut self, _view: &ParticipantView<'_>) {}
}
