//! Cache-backed game store.

use dashmap::DashMap;
use snap_core::{GameStore, SnapGame};
use std::sync::Arc;
use tracing::warn;

/// Cache key of the active game
pub const SNAP_GAME_CACHE_KEY: &str = "snap.game.active";

/// Holds the active game in a shared cache. Clones share the same cache, so
/// one handle can drive the engine while another reads the table.
#[derive(Clone, Default)]
pub struct CacheStore {
    cache: Arc<DashMap<&'static str, SnapGame>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for CacheStore {
    fn load(&self) -> Option<SnapGame> {
        let game = self.cache.get(SNAP_GAME_CACHE_KEY).map(|g| g.clone());
        if game.is_none() {
            warn!("Snap game could not be retrieved from the cache");
        }
        game
    }

    fn save(&mut self, game: SnapGame) {
        self.cache.insert(SNAP_GAME_CACHE_KEY, game);
    }
}
