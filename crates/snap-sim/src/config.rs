//! Simulation settings read from the environment.

use snap_core::{BotConfig, MIN_PLAYERS};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("SNAP_PLAYERS must be at least 2, got {0}")]
    TooFewPlayers(usize),
}

/// Settings for one simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of players at the table
    pub players: usize,
    /// Pause between bot actions
    pub step_delay: Duration,
    /// Give up after this many bot actions
    pub max_steps: u64,
    /// Seed for the deal and the bot; entropy when unset
    pub seed: Option<u64>,
    pub bot: BotConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: 9,
            step_delay: Duration::from_millis(200),
            max_steps: 100_000,
            seed: None,
            bot: BotConfig::default(),
        }
    }
}

impl SimConfig {
    /// Read settings from `SNAP_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for
    /// anything unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let players = parse_var(&lookup, "SNAP_PLAYERS")?.unwrap_or(defaults.players);
        if players < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(players));
        }

        let step_delay = parse_var(&lookup, "SNAP_STEP_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.step_delay);
        let max_steps = parse_var(&lookup, "SNAP_MAX_STEPS")?.unwrap_or(defaults.max_steps);
        let seed = parse_var(&lookup, "SNAP_SEED")?;

        let bot = BotConfig {
            misplay_chance: parse_chance(&lookup, "SNAP_MISPLAY_CHANCE")?
                .unwrap_or(defaults.bot.misplay_chance),
            snap_reaction: parse_chance(&lookup, "SNAP_SNAP_REACTION")?
                .unwrap_or(defaults.bot.snap_reaction),
        };

        Ok(Self {
            players,
            step_delay,
            max_steps,
            seed,
            bot,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

fn parse_chance<F>(lookup: &F, name: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let chance: Option<f64> = parse_var(lookup, name)?;
    match chance {
        Some(value) if !(0.0..=1.0).contains(&value) => {
            Err(ConfigError::OutOfRange { name, value })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SimConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.players, 9);
        assert_eq!(config.step_delay, Duration::from_millis(200));
    }

    #[test]
    fn test_overrides() {
        let config = SimConfig::from_lookup(lookup(&[
            ("SNAP_PLAYERS", "4"),
            ("SNAP_STEP_DELAY_MS", "0"),
            ("SNAP_MAX_STEPS", "500"),
            ("SNAP_SEED", " 42 "),
            ("SNAP_MISPLAY_CHANCE", "0.1"),
            ("SNAP_SNAP_REACTION", "1"),
        ]))
        .unwrap();

        assert_eq!(config.players, 4);
        assert_eq!(config.step_delay, Duration::ZERO);
        assert_eq!(config.max_steps, 500);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.bot.misplay_chance, 0.1);
        assert_eq!(config.bot.snap_reaction, 1.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            SimConfig::from_lookup(lookup(&[("SNAP_PLAYERS", "1")])),
            Err(ConfigError::TooFewPlayers(1))
        );
        assert_eq!(
            SimConfig::from_lookup(lookup(&[("SNAP_SEED", "abc")])),
            Err(ConfigError::Invalid {
                name: "SNAP_SEED",
                value: "abc".to_string()
            })
        );
        assert_eq!(
            SimConfig::from_lookup(lookup(&[("SNAP_SNAP_REACTION", "1.5")])),
            Err(ConfigError::OutOfRange {
                name: "SNAP_SNAP_REACTION",
                value: 1.5
            })
        );
    }
}
