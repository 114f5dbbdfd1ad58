//! Error types for courtside

use thiserror::Error;

use crate::domain::Matchup;

/// Main error type for schedule generation.
///
/// Every variant is a local input-validation failure. They are detected at
/// the start of the operation that receives the bad input and are never
/// retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Roster too small to form two disjoint teams, or too large to
    /// enumerate.
    #[error("a roster of {players} players is not supported (at least 4 are needed to form a 2v2 matchup)")]
    InvalidRoster { players: usize },

    /// More games requested than distinct matchups exist.
    #[error("requested {requested} games but only {available} distinct matchups exist")]
    InsufficientMatchups { requested: usize, available: usize },

    /// A search must run at least one trial.
    #[error("trial count must be greater than zero")]
    InvalidTrialCount,

    /// A dedicated worker pool needs at least one thread.
    #[error("thread count must be greater than zero")]
    InvalidThreadCount,

    /// Schedule has no games.
    #[error("schedule contains no games")]
    EmptySchedule,

    /// Schedule plays the same matchup twice.
    #[error("matchup {0} appears more than once in the schedule")]
    DuplicateMatchup(Matchup),

    /// Team built from the same player twice.
    #[error("player {player} cannot team up with themselves")]
    InvalidTeam { player: u16 },

    /// Both sides of a matchup contain the same player.
    #[error("player {player} appears on both sides of the matchup")]
    OverlappingTeams { player: u16 },

    /// Textual team, matchup or schedule could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Dedicated worker pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type alias for courtside operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
