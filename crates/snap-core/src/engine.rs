//! Store-backed game service.
//!
//! `SnapEngine` is the only way callers change a game. Each operation loads
//! the active game from the store, applies the rules from [`crate::game`],
//! and saves the game back before returning a result code. An empty store is
//! treated as "no valid game" by every operation.
//!
//! The engine does no locking of its own; callers must not run two
//! operations against the same store at once.

use crate::actions::{ActionOutcome, GameAction, PlayCardResult, SnapCallResult};
use crate::game::{GameError, GameState, GameType, SnapGame};
use crate::player::PlayerNumber;
use crate::store::GameStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// Runs games of Snap against a [`GameStore`]
pub struct SnapEngine<S: GameStore> {
    store: S,
    rng: StdRng,
}

impl<S: GameStore> SnapEngine<S> {
    /// Create an engine that shuffles from system entropy
    pub fn new(store: S) -> Self {
        Self {
            store,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose shuffles are reproducible
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self {
            store,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Deal a new game of simple snap, replacing any game in the store
    pub fn create_game(&mut self, player_count: usize) -> Result<GameState, GameError> {
        info!("Starting new snap game for {} players", player_count);

        let game = SnapGame::create(GameType::SimpleSnap, player_count, &mut self.rng)?;
        let state = game.state;
        self.store.save(game);

        debug!("Created new snap game");
        Ok(state)
    }

    /// Lifecycle state of the active game
    pub fn get_state(&self) -> Option<GameState> {
        self.store.load().map(|g| g.state)
    }

    /// Player whose turn it is in the active game
    pub fn get_current_turn(&self) -> Option<PlayerNumber> {
        self.store.load().map(|g| g.current_turn)
    }

    /// Copy of the active game, for display
    pub fn snapshot(&self) -> Option<SnapGame> {
        self.store.load()
    }

    /// Whether two or more showing cards share a rank
    pub fn is_snap(&self) -> bool {
        let is_snap = self.store.load().is_some_and(|g| g.is_snap());
        if is_snap {
            debug!("*** It's a snap ***");
        }
        is_snap
    }

    /// Turn over the top face-down card of `player`
    pub fn play_card(&mut self, player: PlayerNumber) -> PlayCardResult {
        let Some(mut game) = self.store.load() else {
            warn!("Play card attempt by player {} when game does not exist", player);
            return PlayCardResult::InvalidGameState;
        };

        let can_play = match game.active_player(player) {
            Some(p) => p.can_play(),
            None => {
                warn!("Play card attempt by invalid player {}", player);
                return PlayCardResult::InvalidPlayer;
            }
        };

        if !game.is_playing() {
            warn!(
                "Play card attempt by player {} when game in invalid state {:?}",
                player, game.state
            );
            return PlayCardResult::InvalidGameState;
        }

        if game.current_turn != player {
            warn!("Play card attempt by player {} out of turn", player);
            return PlayCardResult::OutOfTurn;
        }

        if !can_play {
            warn!("Play card attempt by player {} who has no cards left", player);
            return PlayCardResult::NoCards;
        }

        let Some(card) = game.play_top_card(player) else {
            return PlayCardResult::NoCards;
        };
        info!("{} was played by player {}", card, player);

        if game.player(player).is_some_and(|p| !p.can_play()) {
            info!("Player {} has now run out of cards to play", player);
        }

        game.set_next_player();
        self.finish_action(game);
        PlayCardResult::Success
    }

    /// Call snap for `player`. On a snap the caller collects every matching
    /// face-up pile.
    pub fn call_snap(&mut self, player: PlayerNumber) -> SnapCallResult {
        info!("!!! SNAP !!! called by player {}", player);

        let Some(mut game) = self.store.load() else {
            warn!("Bad snap call when game not in valid state");
            return SnapCallResult::GameNotValid;
        };

        if game.active_player(player).is_none() {
            warn!("Bad snap call by invalid player {}", player);
            return SnapCallResult::InvalidPlayer;
        }

        if !game.is_snap() {
            warn!("Bad snap call by player {}", player);
            return SnapCallResult::BadCall;
        }

        info!("Successful snap call by player {}", player);
        let taken = game.take_snap_cards(player);
        let held = game.player(player).map_or(0, |p| p.face_down.len());
        info!(
            "Player {} has picked up {} cards and now has {}",
            player, taken, held
        );

        self.finish_action(game);
        SnapCallResult::Won
    }

    /// Dispatch a [`GameAction`] to the matching operation
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::PlayCard(player) => ActionOutcome::Played(self.play_card(player)),
            GameAction::CallSnap(player) => ActionOutcome::Snapped(self.call_snap(player)),
        }
    }

    /// Check for a winner and persist the game
    fn finish_action(&mut self, mut game: SnapGame) {
        let was_finished = game.is_finished();
        if game.update_game_status() && !was_finished {
            match game.winner() {
                Some(winner) => info!("Game has been won by player {}", winner),
                None => info!("Game is over with no cards left to play"),
            }
        }
        self.store.save(game);
    }
}
