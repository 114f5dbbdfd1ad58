//! Fairness scoring for doubles schedules.
//!
//! - [`LoadBalance`] counts appearances per key and measures their spread
//! - [`FairnessScorer`] turns a [`Schedule`](courtside_core::Schedule) into a
//!   [`ScoredSchedule`]

pub mod load_balance;
pub mod scored;
pub mod scorer;

pub use load_balance::LoadBalance;
pub use scored::ScoredSchedule;
pub use scorer::{score, FairnessScorer};
