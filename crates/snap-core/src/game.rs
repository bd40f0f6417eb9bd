//! Core game state and rules.
//!
//! This module contains the `SnapGame` aggregate, the factory that deals a
//! new game, and the in-memory rules: turn order, snap detection, snap
//! resolution and the win condition. Nothing here touches a store; see
//! [`crate::engine`] for the load/mutate/save service built on top.

use crate::card::{Card, Rank};
use crate::deck::build_shuffled_deck;
use crate::player::{PlayerNumber, PlayerState};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fewest players a game can be dealt for
pub const MIN_PLAYERS: usize = 2;

/// Variant of Snap being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    /// Single face-up pile per player, any two matching ranks snap
    SimpleSnap,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Being dealt; never visible outside the factory
    Initialising,
    /// Cards are being played
    Playing,
    /// At most one player has cards left to play
    Finished,
}

/// Errors raised while constructing a game
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Must have at least 2 players in a game, got {0}")]
    InvalidPlayerCount(usize),

    #[error("Invalid game snapshot: {0}")]
    InvalidSnapshot(String),
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapGame {
    /// Variant being played
    pub game_type: GameType,
    /// Lifecycle state
    pub state: GameState,
    /// Player whose turn it is
    pub current_turn: PlayerNumber,
    /// All players, ordered by player number
    pub players: Vec<PlayerState>,
}

impl SnapGame {
    /// Deal a new game from a freshly shuffled deck
    pub fn create<R: Rng + ?Sized>(
        game_type: GameType,
        player_count: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if player_count < MIN_PLAYERS {
            return Err(GameError::InvalidPlayerCount(player_count));
        }
        Self::deal(game_type, player_count, build_shuffled_deck(rng))
    }

    /// Deal a new game from the given deck.
    ///
    /// Cards go round-robin from player 1 in deck order, each landing on top
    /// of that player's face-down pile, until the deck is exhausted. A deck
    /// too short to give two players a card leaves the game already finished.
    pub fn deal(
        game_type: GameType,
        player_count: usize,
        deck: Vec<Card>,
    ) -> Result<Self, GameError> {
        if player_count < MIN_PLAYERS {
            return Err(GameError::InvalidPlayerCount(player_count));
        }

        let mut game = Self {
            game_type,
            state: GameState::Initialising,
            current_turn: 1,
            players: (1..=player_count as PlayerNumber)
                .map(PlayerState::new)
                .collect(),
        };

        for (i, card) in deck.into_iter().enumerate() {
            game.players[i % player_count].face_down.push(card);
        }

        game.state = GameState::Playing;
        game.update_game_status();
        Ok(game)
    }

    /// Restore a game from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }

    /// Serialize the game to a JSON snapshot
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::InvalidSnapshot(e.to_string()))
    }

    /// Get the number of players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by number
    pub fn player(&self, number: PlayerNumber) -> Option<&PlayerState> {
        let index = (number as usize).checked_sub(1)?;
        self.players.get(index)
    }

    fn player_mut(&mut self, number: PlayerNumber) -> Option<&mut PlayerState> {
        let index = (number as usize).checked_sub(1)?;
        self.players.get_mut(index)
    }

    /// A player may act only while they hold at least one card
    pub fn active_player(&self, number: PlayerNumber) -> Option<&PlayerState> {
        self.player(number).filter(|p| p.holds_cards())
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.state == GameState::Finished
    }

    /// Number of players with face-down cards left
    pub fn players_with_face_down(&self) -> usize {
        self.players.iter().filter(|p| p.can_play()).count()
    }

    /// The last player with cards to play, once the game is over
    pub fn winner(&self) -> Option<PlayerNumber> {
        if !self.is_finished() {
            return None;
        }
        self.players.iter().find(|p| p.can_play()).map(|p| p.number)
    }

    /// Every card in the game, across all piles
    pub fn all_cards(&self) -> Vec<Card> {
        self.players
            .iter()
            .flat_map(|p| p.face_down.iter().chain(p.face_up.iter()))
            .copied()
            .collect()
    }

    pub fn total_cards(&self) -> usize {
        self.players.iter().map(|p| p.card_count()).sum()
    }

    /// Ranks showing on top of two or more face-up piles, in rank order.
    ///
    /// Several ranks can match at once, e.g. a pair of Aces alongside a
    /// triple of Twos.
    pub fn matching_ranks(&self) -> Vec<Rank> {
        let tops: Vec<&Card> = self.players.iter().filter_map(|p| p.top_card()).collect();
        let mut ranks: Vec<Rank> = tops
            .iter()
            .enumerate()
            .filter(|(i, card)| {
                tops.iter()
                    .enumerate()
                    .any(|(j, other)| *i != j && card.matches(other))
            })
            .map(|(_, card)| card.rank)
            .collect();
        ranks.sort();
        ranks.dedup();
        ranks
    }

    /// Whether a snap can be called right now
    pub fn is_snap(&self) -> bool {
        self.is_playing() && !self.matching_ranks().is_empty()
    }

    /// Turn over `player`'s top face-down card
    pub fn play_top_card(&mut self, player: PlayerNumber) -> Option<Card> {
        self.player_mut(player)?.play_top_card()
    }

    /// Move the turn to the next player, in number order, who still has
    /// face-down cards. The turn stays put once fewer than two players can
    /// play.
    pub fn set_next_player(&mut self) {
        if self.players_with_face_down() < 2 {
            return;
        }

        let last = self.player_count() as PlayerNumber;
        let mut next = self.current_turn;
        loop {
            next = if next >= last { 1 } else { next + 1 };
            if self.player(next).is_some_and(|p| p.can_play()) {
                break;
            }
        }
        self.current_turn = next;
    }

    /// Give every face-up pile topped by a matching rank to `caller`.
    ///
    /// Piles are emptied in player order, each top to bottom, and the cards
    /// slide under the caller's face-down pile. Returns the number of cards
    /// collected.
    pub fn take_snap_cards(&mut self, caller: PlayerNumber) -> usize {
        if self.active_player(caller).is_none() {
            return 0;
        }

        let ranks = self.matching_ranks();
        let mut collected = Vec::new();
        for player in &mut self.players {
            let matched = player.top_card().is_some_and(|c| ranks.contains(&c.rank));
            if matched {
                collected.extend(player.face_up.take_all());
            }
        }

        let count = collected.len();
        if let Some(player) = self.player_mut(caller) {
            player.face_down.put_under(collected);
        }
        count
    }

    /// Finish the game once at most one player can still play.
    /// Returns whether the game is finished.
    pub fn update_game_status(&mut self) -> bool {
        if self.players_with_face_down() <= 1 {
            self.state = GameState::Finished;
        }
        self.is_finished()
    }
}
