//! Property tests for hand scoring.

use proptest::prelude::*;

use twentyone::{BUST_THRESHOLD, Card, Hand, Suit};

fn hand_from_ranks(ranks: &[u8]) -> Hand {
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
    let mut hand = Hand::new();
    for (i, &rank) in ranks.iter().enumerate() {
        hand.push(Card::new(suits[i % suits.len()], rank));
    }
    hand
}

proptest! {
    #[test]
    fn busted_iff_total_exceeds_threshold(ranks in prop::collection::vec(1u8..=13, 0..10)) {
        let hand = hand_from_ranks(&ranks);
        prop_assert_eq!(hand.is_busted(), hand.total() > BUST_THRESHOLD);
    }

    #[test]
    fn no_ace_total_is_face_sum(ranks in prop::collection::vec(2u8..=13, 0..10)) {
        let hand = hand_from_ranks(&ranks);
        let face_sum: u16 = hand.cards().iter().map(|c| u16::from(c.face_value())).sum();
        prop_assert_eq!(u16::from(hand.total()), face_sum);
    }

    #[test]
    fn total_is_idempotent(ranks in prop::collection::vec(1u8..=13, 0..10)) {
        let hand = hand_from_ranks(&ranks);
        prop_assert_eq!(hand.total(), hand.total());
    }

    #[test]
    fn reductions_never_raise_the_total(ranks in prop::collection::vec(1u8..=13, 0..10)) {
        let hand = hand_from_ranks(&ranks);
        let raw: u16 = hand.cards().iter().map(|c| u16::from(c.face_value())).sum();
        prop_assert!(u16::from(hand.total()) <= raw);
    }

    #[test]
    fn at_most_one_reduction_per_ace(ranks in prop::collection::vec(1u8..=13, 0..10)) {
        let hand = hand_from_ranks(&ranks);
        let raw: u16 = hand.cards().iter().map(|c| u16::from(c.face_value())).sum();
        let aces = ranks.iter().filter(|&&r| r == 1).count() as u16;
        prop_assert!(u16::from(hand.total()) >= raw.saturating_sub(10 * aces));
    }
}
