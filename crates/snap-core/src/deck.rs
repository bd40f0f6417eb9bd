//! Deck construction and shuffling.

use crate::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of cards in a standard deck
pub const DECK_SIZE: usize = 52;

/// Build the standard deck in canonical order: suit-major
/// (Clubs, Diamonds, Hearts, Spades), Ace..King within each suit.
pub fn build_ordered_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Build a standard deck under a uniform random permutation.
pub fn build_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = build_ordered_deck();
    deck.shuffle(rng);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_ordered_deck_is_canonical() {
        let deck = build_ordered_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(deck[12], Card::new(Suit::Clubs, Rank::King));
        assert_eq!(deck[13], Card::new(Suit::Diamonds, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Spades, Rank::King));

        let unique: HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_shuffled_deck_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut shuffled = build_shuffled_deck(&mut rng);
        assert_eq!(shuffled.len(), DECK_SIZE);

        shuffled.sort();
        let mut ordered = build_ordered_deck();
        ordered.sort();
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = build_shuffled_deck(&mut StdRng::seed_from_u64(42));
        let b = build_shuffled_deck(&mut StdRng::seed_from_u64(42));
        let c = build_shuffled_deck(&mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffle_spreads_first_card() {
        // Over many shuffles every card should turn up on top at least once
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.insert(build_shuffled_deck(&mut rng)[0]);
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }
}
