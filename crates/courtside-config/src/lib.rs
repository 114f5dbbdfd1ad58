//! Configuration system for courtside.
//!
//! Load search configuration from TOML or YAML files to control roster
//! size, games per schedule, trial count and threading without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use courtside_config::{SearchConfig, ThreadCount};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     roster_size = 8
//!     games = 14
//!     trials = 50000
//!     random_seed = 7
//!
//!     [thread_count]
//!     count = 4
//! "#).unwrap();
//!
//! assert_eq!(config.roster_size, 8);
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.thread_count, ThreadCount::Count(4));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use courtside_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! assert_eq!(config.games, 12);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default roster size.
pub const DEFAULT_ROSTER_SIZE: usize = 6;

/// Default number of games per schedule.
pub const DEFAULT_GAMES: usize = 12;

/// Default number of sampled schedules.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Schedule search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Number of players, identified `1..=roster_size`.
    pub roster_size: usize,

    /// Games per schedule.
    pub games: usize,

    /// Number of schedules to sample and score.
    pub trials: usize,

    /// Random seed for reproducible results. Absent means OS entropy.
    pub random_seed: Option<u64>,

    /// Worker threads used to run trials.
    pub thread_count: ThreadCount,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            roster_size: DEFAULT_ROSTER_SIZE,
            games: DEFAULT_GAMES,
            trials: DEFAULT_TRIALS,
            random_seed: None,
            thread_count: ThreadCount::default(),
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn with_roster_size(mut self, roster_size: usize) -> Self {
        self.roster_size = roster_size;
        self
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }
}

/// Thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Run every trial on the calling thread.
    None,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}

#[cfg(test)]
mod tests;
