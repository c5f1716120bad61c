//! Round controller: dealing, turn sequencing, and winner resolution.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::observer::TableObserver;
use crate::participant::{Participant, TurnState};

/// One game of twenty-one: owns the deck and the participants, runs the
/// turns, and resolves the winner.
///
/// Participants act in ascending move priority. `in_contention` holds the
/// participants not yet bust; it only shrinks during a round.
#[derive(Debug)]
pub struct Round {
    /// The single deck feeding every draw this round.
    deck: Deck,
    /// Seeded RNG for shuffles, reused across rematches.
    rng: ChaCha8Rng,
    /// All participants, sorted by move priority.
    participants: Vec<Participant>,
    /// Indices into `participants` of those still able to win.
    in_contention: Vec<usize>,
}

impl Round {
    /// Creates a round with a freshly built deck and the given seed.
    ///
    /// Participants are sorted by move priority; ties keep their given
    /// order.
    #[must_use]
    pub fn new(participants: Vec<Participant>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::standard(&mut rng);
        Self::with_deck(participants, deck, rng)
    }

    /// Creates a round over a pre-arranged deck.
    ///
    /// Pair with [`Self::deal_openings`] instead of [`Self::initial_deal`]
    /// to keep the arranged order.
    #[must_use]
    pub fn scripted(participants: Vec<Participant>, deck: Deck) -> Self {
        Self::with_deck(participants, deck, ChaCha8Rng::seed_from_u64(0))
    }

    fn with_deck(mut participants: Vec<Participant>, deck: Deck, rng: ChaCha8Rng) -> Self {
        participants.sort_by_key(Participant::move_priority);
        let in_contention = (0..participants.len()).collect();

        Self {
            deck,
            rng,
            participants,
            in_contention,
        }
    }

    /// All participants, in move order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Participants still able to win, in move order.
    pub fn contenders(&self) -> impl Iterator<Item = &Participant> {
        self.in_contention.iter().map(|&idx| &self.participants[idx])
    }

    /// Number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Shuffles the deck, then deals every opening hand.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck runs out while
    /// dealing openings.
    pub fn initial_deal(&mut self) -> Result<(), RoundError> {
        self.deck.shuffle(&mut self.rng);
        self.deal_openings()
    }

    /// Deals every opening hand without reshuffling.
    ///
    /// Each participant receives its role's opening draw count, in move
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck runs out while
    /// dealing openings.
    pub fn deal_openings(&mut self) -> Result<(), RoundError> {
        for idx in 0..self.participants.len() {
            let count = self.participants[idx].role().opening_draw_count();
            for _ in 0..count {
                self.participants[idx].receive(&mut self.deck)?;
            }
            log::debug!(
                "dealt {} opening card(s) to {}",
                count,
                self.participants[idx].name()
            );
        }
        Ok(())
    }

    /// Runs every participant's turn, in ascending move priority.
    ///
    /// A turn that ends bust removes its participant from contention, once.
    /// When a single contender remains, the remaining turns are skipped:
    /// the last participant standing wins without playing.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if a draw finds the deck
    /// empty; the round is over.
    pub fn run_turns(&mut self, observer: &mut dyn TableObserver) -> Result<(), RoundError> {
        for idx in 0..self.participants.len() {
            if self.in_contention.len() <= 1 {
                if self.in_contention.len() == 1 {
                    log::info!("one contender remains, skipping remaining turns");
                }
                break;
            }
            if !self.in_contention.contains(&idx) {
                continue;
            }

            let state = self.participants[idx].take_turn(&mut self.deck, observer)?;

            if state == TurnState::Busted {
                log::info!(
                    "{} busts at {}",
                    self.participants[idx].name(),
                    self.participants[idx].total()
                );
                self.in_contention.retain(|&contender| contender != idx);
            }
        }
        Ok(())
    }

    /// Resolves the round.
    ///
    /// A sole contender wins outright, without total comparison. Otherwise
    /// the unique holder of the highest total wins; a tie at the highest
    /// total means no winner. An empty contention set also resolves to no
    /// winner.
    #[must_use]
    pub fn resolve_winner(&self) -> Option<&Participant> {
        if self.in_contention.len() == 1 {
            return Some(&self.participants[self.in_contention[0]]);
        }

        let max_total = self.contenders().map(Participant::total).max()?;
        let mut at_max = self.contenders().filter(|p| p.total() == max_total);

        let winner = at_max.next()?;
        if at_max.next().is_some() {
            log::info!("tie at {max_total}, no winner");
            return None;
        }

        Some(winner)
    }

    /// Plays one full round: deal, run turns, show final hands, resolve.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck runs out at any
    /// point.
    pub fn play(
        &mut self,
        observer: &mut dyn TableObserver,
    ) -> Result<Option<&Participant>, RoundError> {
        self.initial_deal()?;
        self.run_turns(observer)?;

        for participant in &self.participants {
            observer.show(&participant.view());
        }

        let winner = self.resolve_winner();
        match winner {
            Some(participant) => log::info!(
                "{} wins at {}",
                participant.name(),
                participant.total()
            ),
            None => log::info!("round ends with no winner"),
        }
        Ok(winner)
    }

    /// Resets for a rematch: fresh shuffled deck, cleared hands, everyone
    /// back in contention.
    pub fn reset(&mut self) {
        self.deck = Deck::standard(&mut self.rng);
        for participant in &mut self.participants {
            participant.reset();
        }
        self.in_contention = (0..self.participants.len()).collect();
    }
}
