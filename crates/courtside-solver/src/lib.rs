//! Courtside Solver Engine
//!
//! This crate provides the randomized schedule search:
//! - Sampling fixed-size schedules from a matchup universe
//! - Running many scored trials in parallel
//! - Ranking every trial from fairest to least fair
//! - Search statistics and the anytime improvement curve
//!
//! The search is best-effort. More trials improve the best score found in
//! expectation, but nothing guarantees that a zero-score schedule is found
//! even when one exists. Callers that need an exhaustive answer must not
//! rely on this crate for it.
//!
//! Logging levels:
//! - **INFO**: Search start/end with problem scale and summary
//! - **DEBUG**: Each new best score in sampling order
//! - **TRACE**: Every trial

pub mod result;
pub mod sampler;
pub mod search;
pub mod statistics;

pub use courtside_config::ThreadCount;
pub use result::{Candidate, SearchResult};
pub use sampler::{sample, ScheduleSampler};
pub use search::{search, ScheduleSearch};
pub use statistics::{ScoreImprovement, SearchStatistics};
