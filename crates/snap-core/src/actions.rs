//! Player actions and their outcomes.
//!
//! Every rejection a player can run into is an explicit result code rather
//! than an error: the caller decides what to do with it.

use crate::player::PlayerNumber;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All possible actions a player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Turn over the top face-down card
    PlayCard(PlayerNumber),
    /// Call snap on the showing cards
    CallSnap(PlayerNumber),
}

impl GameAction {
    /// The player taking the action
    pub fn player(&self) -> PlayerNumber {
        match self {
            GameAction::PlayCard(p) | GameAction::CallSnap(p) => *p,
        }
    }
}

/// Result of trying to play a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayCardResult {
    /// Card was played
    Success,
    /// It is not this player's turn
    OutOfTurn,
    /// The player has no face-down cards left
    NoCards,
    /// No current game, or the game is not being played
    InvalidGameState,
    /// Unknown player, or a player holding no cards
    InvalidPlayer,
}

impl PlayCardResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PlayCardResult::Success)
    }
}

impl fmt::Display for PlayCardResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PlayCardResult::Success => "card played",
            PlayCardResult::OutOfTurn => "not your turn",
            PlayCardResult::NoCards => "no cards left to play",
            PlayCardResult::InvalidGameState => "no game in progress",
            PlayCardResult::InvalidPlayer => "invalid player",
        };
        f.write_str(text)
    }
}

/// Result of calling snap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapCallResult {
    /// Snap was called and the caller took the cards
    Won,
    /// Snap was called but another player got there first.
    /// Reserved for arbitrating simultaneous calls; never returned today.
    Lost,
    /// There was no snap showing
    BadCall,
    /// Unknown player, or a player holding no cards
    InvalidPlayer,
    /// No current game
    GameNotValid,
}

impl SnapCallResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SnapCallResult::Won)
    }
}

impl fmt::Display for SnapCallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SnapCallResult::Won => "snap won",
            SnapCallResult::Lost => "beaten to the snap",
            SnapCallResult::BadCall => "not a snap",
            SnapCallResult::InvalidPlayer => "invalid player",
            SnapCallResult::GameNotValid => "no game in progress",
        };
        f.write_str(text)
    }
}

/// Outcome of applying a [`GameAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Played(PlayCardResult),
    Snapped(SnapCallResult),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            ActionOutcome::Played(r) => r.is_success(),
            ActionOutcome::Snapped(r) => r.is_success(),
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Played(r) => fmt::Display::fmt(r, f),
            ActionOutcome::Snapped(r) => fmt::Display::fmt(r, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_player() {
        assert_eq!(GameAction::PlayCard(3).player(), 3);
        assert_eq!(GameAction::CallSnap(1).player(), 1);
    }

    #[test]
    fn test_outcome_success() {
        assert!(ActionOutcome::Played(PlayCardResult::Success).is_success());
        assert!(!ActionOutcome::Played(PlayCardResult::OutOfTurn).is_success());
        assert!(ActionOutcome::Snapped(SnapCallResult::Won).is_success());
        assert!(!ActionOutcome::Snapped(SnapCallResult::Lost).is_success());
        assert_eq!(
            ActionOutcome::Snapped(SnapCallResult::BadCall).to_string(),
            "not a snap"
        );
    }

    #[test]
    fn test_results_serialize_by_name() {
        let json = serde_json::to_string(&PlayCardResult::NoCards).unwrap();
        assert_eq!(json, "\"NoCards\"");
    }
}
