//! FairnessScorer - measures how evenly a schedule spreads play.
//!
//! The score is the population standard deviation of per-player
//! appearance counts plus that of per-team appearance counts. Only players
//! and teams that actually appear are counted, so a schedule that leaves
//! someone out can still score well on the players who do play.

use std::collections::HashSet;

use courtside_core::{Result, Schedule, ScheduleError};

use crate::load_balance::LoadBalance;
use crate::scored::ScoredSchedule;

/// Scores schedules. Stateless; one instance can be shared across threads.
///
/// # Example
///
/// ```
/// use courtside_core::Schedule;
/// use courtside_scoring::FairnessScorer;
///
/// let schedule: Schedule = "(1,2)v(3,4), (1,3)v(2,4), (1,4)v(2,3)".parse().unwrap();
/// let scored = FairnessScorer.score(schedule).unwrap();
///
/// // every player plays 3 times, every team once
/// assert!(scored.is_perfect());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FairnessScorer;

impl FairnessScorer {
    pub fn new() -> Self {
        FairnessScorer
    }

    /// Counts appearances and computes the fairness score.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::EmptySchedule`] for a schedule without games and
    /// [`ScheduleError::DuplicateMatchup`] when a matchup is repeated.
    pub fn score(&self, schedule: Schedule) -> Result<ScoredSchedule> {
        validate(&schedule)?;
        let players: LoadBalance<_> = schedule.players().collect();
        let teams: LoadBalance<_> = schedule.teams().collect();
        Ok(ScoredSchedule::new(schedule, players, teams))
    }
}

/// Scores `schedule` with the default [`FairnessScorer`].
pub fn score(schedule: Schedule) -> Result<ScoredSchedule> {
    FairnessScorer.score(schedule)
}

fn validate(schedule: &Schedule) -> Result<()> {
    if schedule.is_empty() {
        return Err(ScheduleError::EmptySchedule);
    }
    let mut seen = HashSet::with_capacity(schedule.len());
    for matchup in schedule {
        if !seen.insert(matchup) {
            return Err(ScheduleError::DuplicateMatchup(*matchup));
        }
    }
    Ok(())
}
