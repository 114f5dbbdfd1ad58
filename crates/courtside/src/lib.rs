//! Courtside - fair doubles volleyball schedules
//!
//! Builds a schedule of 2v2 games for a fixed roster so that everyone plays
//! about equally often and partners rotate evenly, without ever repeating a
//! matchup. The search samples many random schedules and ranks them by a
//! fairness score; it is best-effort and does not promise an optimal
//! schedule.
//!
//! # Example
//!
//! ```rust
//! use courtside::prelude::*;
//!
//! let config = SearchConfig::new()
//!     .with_roster_size(6)
//!     .with_games(12)
//!     .with_trials(500)
//!     .with_random_seed(42);
//!
//! let result = courtside::plan(&config).unwrap();
//! assert_eq!(result.len(), 500);
//!
//! let best = result.best().unwrap();
//! println!("{} scores {}", best.schedule(), best.score());
//! ```

pub use courtside_config::{ConfigError, SearchConfig, ThreadCount};
pub use courtside_core::{
    enumerate, FairnessScore, Matchup, MatchupUniverse, Player, Result, Schedule, ScheduleError,
    Team,
};
pub use courtside_scoring::{score, FairnessScorer, LoadBalance, ScoredSchedule};
pub use courtside_solver::{
    sample, search, Candidate, ScheduleSampler, ScheduleSearch, ScoreImprovement, SearchResult,
    SearchStatistics,
};

#[cfg(feature = "console")]
pub use courtside_console as console;

mod plan;
pub use plan::plan;

pub mod prelude {
    pub use super::{
        Candidate, FairnessScore, Matchup, MatchupUniverse, Player, Schedule, ScheduleError,
        ScheduleSearch, ScoredSchedule, SearchConfig, SearchResult, Team, ThreadCount,
    };
}
