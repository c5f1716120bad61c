//! Participants and the per-turn state machine.

use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::observer::{ParticipantView, TableObserver};
use crate::policy::{Action, DealerPolicy, DecisionPolicy, TurnView};

/// Participant variant. Behaviour differences live here and in the
/// injected decision policy, not in separate participant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The house. Opens with one card and plays the threshold rule.
    Dealer,
    /// A player. Opens with two cards.
    Player,
}

impl Role {
    /// Number of cards dealt to this variant in the initial deal.
    #[must_use]
    pub const fn opening_draw_count(self) -> usize {
        match self {
            Self::Dealer => 1,
            Self::Player => 2,
        }
    }
}

/// Terminal and non-terminal states of one turn.
///
/// A turn starts in `AwaitingDecision` and always ends in `Busted` or
/// `Staying`; the round controller never interrupts a turn in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The participant's policy is about to be consulted.
    AwaitingDecision,
    /// The participant drew past the bust threshold. Terminal.
    Busted,
    /// The participant ended its turn voluntarily. Terminal.
    Staying,
}

/// One entity at the table: dealer or player.
///
/// Owns its hand exclusively. Variant behaviour is injected through
/// [`Role`] and the [`DecisionPolicy`].
pub struct Participant {
    /// Display name.
    name: String,
    /// Variant tag.
    role: Role,
    /// The participant's hand, in draw order.
    hand: Hand,
    /// Whether the participant ended its last turn voluntarily.
    staying: bool,
    /// Turn order; lower acts first.
    move_priority: u8,
    /// Decision strategy consulted each time the turn awaits a decision.
    policy: Box<dyn DecisionPolicy>,
}

impl Participant {
    /// Creates a participant with an injected decision policy.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        role: Role,
        move_priority: u8,
        policy: Box<dyn DecisionPolicy>,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            hand: Hand::new(),
            staying: false,
            move_priority,
            policy,
        }
    }

    /// Creates the dealer with the fixed threshold policy.
    #[must_use]
    pub fn dealer(name: impl Into<String>, move_priority: u8) -> Self {
        Self::new(name, Role::Dealer, move_priority, Box::new(DealerPolicy))
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant tag.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Current hand total.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.hand.total()
    }

    /// Whether the participant is bust.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    /// Whether the participant ended its turn voluntarily.
    #[must_use]
    pub const fn is_staying(&self) -> bool {
        self.staying
    }

    /// Turn order; lower acts first.
    #[must_use]
    pub const fn move_priority(&self) -> u8 {
        self.move_priority
    }

    /// Snapshot for the display collaborator.
    #[must_use]
    pub fn view(&self) -> ParticipantView<'_> {
        ParticipantView {
            name: &self.name,
            cards: self.hand.cards(),
            total: self.hand.total(),
            busted: self.hand.is_busted(),
        }
    }

    /// Deals one card into the hand during the initial deal.
    pub(crate) fn receive(&mut self, deck: &mut Deck) -> Result<(), RoundError> {
        let card = deck.deal()?;
        self.hand.push(card);
        Ok(())
    }

    /// Runs this participant's turn to completion.
    ///
    /// Loops in [`TurnState::AwaitingDecision`]: consult the policy, apply
    /// a draw on Hit, re-check bust. Every Hit strictly grows the hand from
    /// a finite deck, so the loop terminates. The observer sees the hand
    /// after each applied decision.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if a Hit finds the deck empty.
    pub fn take_turn(
        &mut self,
        deck: &mut Deck,
        observer: &mut dyn TableObserver,
    ) -> Result<TurnState, RoundError> {
        let mut state = TurnState::AwaitingDecision;

        while state == TurnState::AwaitingDecision {
            let action = self.policy.decide(&TurnView::new(&self.hand));

            match action {
                Action::Hit => {
                    let card = deck.deal()?;
                    self.hand.push(card);
                    log::debug!(
                        "{} hits: {} cards, total {}",
                        self.name,
                        self.hand.len(),
                        self.hand.total()
                    );

                    if self.hand.is_busted() {
                        state = TurnState::Busted;
                    }
                }
                Action::Stay => {
                    self.staying = true;
                    state = TurnState::Staying;
                }
            }

            observer.show(&self.view());
        }

        Ok(state)
    }

    /// Discards the hand and clears the staying flag for a rematch.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.staying = false;
    }
}

impl core::fmt::Debug for Participant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("hand", &self.hand)
            .field("staying", &self.staying)
            .field("move_priority", &self.move_priority)
            .finish_non_exhaustive()
    }
}
