//! Drives one game with a bot until it finishes.

use crate::config::SimConfig;
use serde::{Deserialize, Serialize};
use snap_core::{
    ActionOutcome, Bot, GameAction, GameError, GameState, GameStore, PlayerNumber, SnapEngine,
    TableView,
};
use tracing::{debug, info};

/// What happened over a simulated game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimSummary {
    pub players: usize,
    /// Bot actions attempted
    pub steps: u64,
    /// Cards successfully played
    pub cards_played: u64,
    /// Snap calls, good or bad
    pub snap_calls: u64,
    pub successful_snaps: u64,
    /// False when the step limit ran out first
    pub finished: bool,
    pub winner: Option<PlayerNumber>,
}

impl SimSummary {
    fn record(&mut self, action: GameAction, outcome: ActionOutcome) {
        self.steps += 1;
        if matches!(action, GameAction::CallSnap(_)) {
            self.snap_calls += 1;
        }
        match outcome {
            ActionOutcome::Played(r) if r.is_success() => self.cards_played += 1,
            ActionOutcome::Snapped(r) if r.is_success() => self.successful_snaps += 1,
            _ => {}
        }
    }
}

/// A single game played out by a bot
pub struct Simulation<S: GameStore> {
    config: SimConfig,
    engine: SnapEngine<S>,
    bot: Bot,
}

impl<S: GameStore> Simulation<S> {
    pub fn new(config: SimConfig, store: S) -> Self {
        let (engine, bot) = match config.seed {
            Some(seed) => (
                SnapEngine::with_seed(store, seed),
                Bot::with_seed(config.bot, seed.wrapping_add(1)),
            ),
            None => (SnapEngine::new(store), Bot::new(config.bot)),
        };

        Self {
            config,
            engine,
            bot,
        }
    }

    /// Deal a game and let the bot play it out
    pub async fn run(mut self) -> Result<SimSummary, GameError> {
        let players = self.config.players;
        self.engine.create_game(players)?;

        let mut summary = SimSummary {
            players,
            ..SimSummary::default()
        };

        while self.engine.get_state() == Some(GameState::Playing)
            && summary.steps < self.config.max_steps
        {
            let view = TableView::observe(&self.engine, players);
            let Some(action) = self.bot.choose_action(&view) else {
                break;
            };

            let outcome = self.engine.apply_action(action);
            debug!("{:?} -> {}", action, outcome);
            summary.record(action, outcome);

            if !self.config.step_delay.is_zero() {
                tokio::time::sleep(self.config.step_delay).await;
            }
        }

        let game = self.engine.snapshot();
        summary.finished = game.as_ref().is_some_and(|g| g.is_finished());
        summary.winner = game.as_ref().and_then(|g| g.winner());

        info!(
            "Game completed after {} steps, {} cards played and {} snap calls",
            summary.steps, summary.cards_played, summary.snap_calls
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CacheStore;
    use snap_core::{BotConfig, DECK_SIZE};
    use std::time::Duration;

    fn quick_config(seed: u64) -> SimConfig {
        SimConfig {
            players: 4,
            step_delay: Duration::ZERO,
            max_steps: 5_000,
            seed: Some(seed),
            bot: BotConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_run_keeps_every_card() {
        let store = CacheStore::new();
        let summary = Simulation::new(quick_config(3), store.clone())
            .run()
            .await
            .unwrap();

        assert_eq!(summary.players, 4);
        assert!(summary.steps <= 5_000);
        assert!(summary.successful_snaps <= summary.snap_calls);
        assert!(summary.cards_played + summary.snap_calls <= summary.steps);

        let game = store.load().unwrap();
        assert_eq!(game.total_cards(), DECK_SIZE);
        assert_eq!(summary.finished, game.is_finished());
        if summary.finished {
            assert_eq!(summary.winner, game.winner());
        } else {
            assert_eq!(summary.steps, 5_000);
        }
    }

    #[tokio::test]
    async fn test_seeded_runs_repeat() {
        let a = Simulation::new(quick_config(17), CacheStore::new())
            .run()
            .await
            .unwrap();
        let b = Simulation::new(quick_config(17), CacheStore::new())
            .run()
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_step_limit() {
        let config = SimConfig {
            max_steps: 3,
            ..quick_config(5)
        };
        let summary = Simulation::new(config, CacheStore::new())
            .run()
            .await
            .unwrap();

        assert_eq!(summary.steps, 3);
        assert!(!summary.finished);
    }

    #[tokio::test]
    async fn test_rejects_single_player() {
        let config = SimConfig {
            players: 1,
            ..quick_config(5)
        };
        let result = Simulation::new(config, CacheStore::new()).run().await;
        assert_eq!(result, Err(GameError::InvalidPlayerCount(1)));
    }
}
