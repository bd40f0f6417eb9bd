//! Storage for the active game.
//!
//! The engine never keeps a game between calls: it loads the current game
//! before every operation and saves it back after every change. Anything
//! that can hold one game can back it.

use crate::game::SnapGame;

/// A single slot holding the active game
pub trait GameStore {
    /// Load the active game, if there is one
    fn load(&self) -> Option<SnapGame>;

    /// Replace the active game
    fn save(&mut self, game: SnapGame);
}

/// In-memory store for tests and local runs
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    game: Option<SnapGame>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `game`
    pub fn with_game(game: SnapGame) -> Self {
        Self { game: Some(game) }
    }

    /// Drop the stored game
    pub fn clear(&mut self) {
        self.game = None;
    }
}

impl GameStore for InMemoryStore {
    fn load(&self) -> Option<SnapGame> {
        self.game.clone()
    }

    fn save(&mut self, game: SnapGame) {
        self.game = Some(game);
    }
}
