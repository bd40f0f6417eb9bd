//! Playing cards.
//!
//! This module contains:
//! - Suit and Rank, each with its canonical ordering
//! - Card, an immutable (suit, rank) pair

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card suits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical deck order
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Card ranks, Ace low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in canonical deck order
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];
}

/// A single playing card.
///
/// Two cards are the same card only if suit and rank both agree; for snap
/// purposes only the rank is compared (see [`Card::matches`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Whether the two cards would make a snap
    pub fn matches(&self, other: &Card) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_suit() {
        let ace_clubs = Card::new(Suit::Clubs, Rank::Ace);
        let ace_hearts = Card::new(Suit::Hearts, Rank::Ace);
        let two_hearts = Card::new(Suit::Hearts, Rank::Two);

        assert!(ace_clubs.matches(&ace_hearts));
        assert!(!ace_clubs.matches(&two_hearts));
        assert_ne!(ace_clubs, ace_hearts);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Suit::Spades, Rank::Queen).to_string(), "Queen of Spades");
    }

    #[test]
    fn test_rank_order() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::ALL.len(), 13);
    }
}
