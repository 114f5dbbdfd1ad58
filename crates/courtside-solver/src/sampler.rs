//! Random schedule sampling.
//!
//! Draws `games` distinct matchups uniformly without replacement. The
//! resulting schedule keeps the order in which matchups were drawn.

use rand::Rng;

use courtside_core::{MatchupUniverse, Result, Schedule, ScheduleError};

/// Draws schedules with a fixed number of games.
///
/// # Example
///
/// ```
/// use courtside_core::MatchupUniverse;
/// use courtside_solver::ScheduleSampler;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let universe = MatchupUniverse::enumerate(6).unwrap();
/// let sampler = ScheduleSampler::new(12);
///
/// let a = sampler.sample(&universe, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
/// let b = sampler.sample(&universe, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSampler {
    games: usize,
}

impl ScheduleSampler {
    pub fn new(games: usize) -> Self {
        ScheduleSampler { games }
    }

    pub fn games(&self) -> usize {
        self.games
    }

    /// Checks that `universe` can supply this many distinct games.
    pub fn validate(&self, universe: &MatchupUniverse) -> Result<()> {
        if self.games == 0 {
            return Err(ScheduleError::EmptySchedule);
        }
        if self.games > universe.len() {
            return Err(ScheduleError::InsufficientMatchups {
                requested: self.games,
                available: universe.len(),
            });
        }
        Ok(())
    }

    /// Draws one schedule.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InsufficientMatchups`] when more games are requested
    /// than the universe holds, [`ScheduleError::EmptySchedule`] for zero games.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        universe: &MatchupUniverse,
        rng: &mut R,
    ) -> Result<Schedule> {
        self.validate(universe)?;
        let matchups = universe.matchups();
        let picked = rand::seq::index::sample(rng, matchups.len(), self.games);
        Ok(Schedule::new(picked.iter().map(|i| matchups[i]).collect()))
    }
}

/// Draws one schedule of `games` matchups from `universe`.
pub fn sample<R: Rng + ?Sized>(
    universe: &MatchupUniverse,
    games: usize,
    rng: &mut R,
) -> Result<Schedule> {
    ScheduleSampler::new(games).sample(universe, rng)
}

#[cfg(test)]
mod tests;
