//! Courtside Core - domain types for doubles scheduling
//!
//! This crate provides the fundamental building blocks shared by every
//! other courtside crate:
//! - Players, teams, matchups and schedules
//! - The fairness score type
//! - The matchup universe for a roster
//! - The error taxonomy

pub mod domain;
pub mod error;
pub mod score;
pub mod universe;

pub use domain::{Matchup, Player, Schedule, Team};
pub use error::{Result, ScheduleError};
pub use score::FairnessScore;
pub use universe::{enumerate, MatchupUniverse, MAX_UNIVERSE_SIZE, MIN_ROSTER_SIZE};
