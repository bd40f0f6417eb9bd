//! Random bot for driving a table of players.
//!
//! One bot stands in for the whole table. Most of the time it plays for
//! whoever's turn it is and shouts snap when a snap is showing, but now and
//! then it makes a random move on behalf of a random player, which the
//! engine is free to reject.

use crate::actions::GameAction;
use crate::engine::SnapEngine;
use crate::player::PlayerNumber;
use crate::store::GameStore;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// How the bot behaves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Chance (0.0..=1.0) of a random action by a random player
    pub misplay_chance: f64,
    /// Chance (0.0..=1.0) that a showing snap gets called
    pub snap_reaction: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            misplay_chance: 0.05,
            snap_reaction: 0.8,
        }
    }
}

/// What the bot can see of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView {
    pub player_count: usize,
    pub current_turn: Option<PlayerNumber>,
    pub is_snap: bool,
}

impl TableView {
    /// Look at the active game of `engine`
    pub fn observe<S: GameStore>(engine: &SnapEngine<S>, player_count: usize) -> Self {
        Self {
            player_count,
            current_turn: engine.get_current_turn(),
            is_snap: engine.is_snap(),
        }
    }
}

/// A bot that picks actions for the table
pub struct Bot {
    pub config: BotConfig,
    rng: StdRng,
}

impl Bot {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(config: BotConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose the next action, if there is anything to do
    pub fn choose_action(&mut self, view: &TableView) -> Option<GameAction> {
        if view.player_count == 0 {
            return None;
        }

        if self.chance(self.config.misplay_chance) {
            let player = self.random_player(view.player_count);
            return if self.chance(0.5) {
                Some(GameAction::CallSnap(player))
            } else {
                Some(GameAction::PlayCard(player))
            };
        }

        if view.is_snap && self.chance(self.config.snap_reaction) {
            return Some(GameAction::CallSnap(self.random_player(view.player_count)));
        }

        view.current_turn.map(GameAction::PlayCard)
    }

    /// True with probability `likelihood`
    fn chance(&mut self, likelihood: f64) -> bool {
        likelihood > self.rng.gen::<f64>()
    }

    fn random_player(&mut self, player_count: usize) -> PlayerNumber {
        self.rng.gen_range(1..=player_count as PlayerNumber)
    }
}
