//! Per-player card piles.
//!
//! This module contains:
//! - Pile, a last-in-first-out stack of cards
//! - PlayerState, a player's face-down and face-up piles

use crate::card::Card;
use serde::{Deserialize, Serialize};

/// Player number (1..=N, assigned at deal time)
pub type PlayerNumber = u32;

/// A stack of cards. The last element is the top of the pile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards listed bottom to top
    pub fn from_bottom_up(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Place a card on top
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take the top card
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Look at the top card without taking it
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Empty the pile, returning its cards in pop order (top first)
    pub fn take_all(&mut self) -> Vec<Card> {
        let mut taken = std::mem::take(&mut self.cards);
        taken.reverse();
        taken
    }

    /// Slide cards under the pile. `cards` is in draw order: once the
    /// current cards are used up, `cards[0]` is drawn next.
    pub fn put_under(&mut self, cards: Vec<Card>) {
        self.cards.splice(0..0, cards.into_iter().rev());
    }

    /// Cards from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Player number (1..=N)
    pub number: PlayerNumber,
    /// Cards still to be played
    pub face_down: Pile,
    /// Played cards; the top one is showing
    pub face_up: Pile,
}

impl PlayerState {
    /// Create a player with empty piles
    pub fn new(number: PlayerNumber) -> Self {
        Self {
            number,
            face_down: Pile::new(),
            face_up: Pile::new(),
        }
    }

    /// The showing card, if any
    pub fn top_card(&self) -> Option<&Card> {
        self.face_up.peek()
    }

    /// Whether the player still has cards to play
    pub fn can_play(&self) -> bool {
        !self.face_down.is_empty()
    }

    /// Whether the player holds any card at all. A player with only
    /// face-up cards is still in the game.
    pub fn holds_cards(&self) -> bool {
        !self.face_down.is_empty() || !self.face_up.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.face_down.len() + self.face_up.len()
    }

    /// Turn the top face-down card over onto the face-up pile
    pub fn play_top_card(&mut self) -> Option<Card> {
        let card = self.face_down.pop()?;
        self.face_up.push(card);
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Clubs, rank)
    }

    #[test]
    fn test_pile_is_lifo() {
        let mut pile = Pile::new();
        pile.push(card(Rank::Ace));
        pile.push(card(Rank::Two));

        assert_eq!(pile.peek(), Some(&card(Rank::Two)));
        assert_eq!(pile.pop(), Some(card(Rank::Two)));
        assert_eq!(pile.pop(), Some(card(Rank::Ace)));
        assert_eq!(pile.pop(), None);
    }

    #[test]
    fn test_take_all_returns_pop_order() {
        let mut pile = Pile::from_bottom_up(vec![
            card(Rank::Ace),
            card(Rank::Two),
            card(Rank::Three),
        ]);

        let taken = pile.take_all();
        assert_eq!(taken, vec![card(Rank::Three), card(Rank::Two), card(Rank::Ace)]);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_put_under_keeps_existing_cards_on_top() {
        let mut pile = Pile::from_bottom_up(vec![card(Rank::Two), card(Rank::Ace)]);
        pile.put_under(vec![card(Rank::Three), card(Rank::Four)]);

        let draws: Vec<Card> = std::iter::from_fn(|| pile.pop()).collect();
        assert_eq!(
            draws,
            vec![card(Rank::Ace), card(Rank::Two), card(Rank::Three), card(Rank::Four)]
        );
    }

    #[test]
    fn test_play_top_card() {
        let mut player = PlayerState::new(1);
        assert!(!player.holds_cards());
        assert_eq!(player.play_top_card(), None);

        player.face_down.push(card(Rank::King));
        assert_eq!(player.play_top_card(), Some(card(Rank::King)));
        assert!(!player.can_play());
        assert!(player.holds_cards());
        assert_eq!(player.top_card(), Some(&card(Rank::King)));
        assert_eq!(player.card_count(), 1);
    }
}
