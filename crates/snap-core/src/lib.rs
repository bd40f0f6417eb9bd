//! Snap - a card game engine
//!
//! This crate provides the core game logic for Snap, including:
//! - Cards and the standard 52-card deck
//! - Dealing a shuffled deck round-robin to N players
//! - The turn and play state machine, snap detection and snap resolution
//! - A store-backed engine that reports every outcome as a result code
//!
//! # Architecture
//!
//! The rules live on [`SnapGame`] and never touch storage. [`SnapEngine`]
//! wraps them in load/mutate/save calls against a [`GameStore`], so the
//! same engine runs over an in-memory slot in tests or a shared cache in
//! the simulator.
//!
//! # Modules
//!
//! - [`card`]: Suits, ranks and cards
//! - [`deck`]: Ordered and shuffled decks
//! - [`player`]: Card piles and per-player state
//! - [`game`]: Game state, dealing and rules
//! - [`actions`]: Player actions and result codes
//! - [`store`]: Storage for the active game
//! - [`engine`]: The store-backed game service
//! - [`bot`]: Random bot for driving a table

pub mod actions;
pub mod bot;
pub mod card;
pub mod deck;
pub mod engine;
pub mod game;
pub mod player;
pub mod store;

// Re-export commonly used types
pub use actions::{ActionOutcome, GameAction, PlayCardResult, SnapCallResult};
pub use bot::{Bot, BotConfig, TableView};
pub use card::{Card, Rank, Suit};
pub use deck::{build_ordered_deck, build_shuffled_deck, DECK_SIZE};
pub use engine::SnapEngine;
pub use game::{GameError, GameState, GameType, SnapGame, MIN_PLAYERS};
pub use player::{Pile, PlayerNumber, PlayerState};
pub use store::{GameStore, InMemoryStore};
