//! Randomized schedule search.
//!
//! Samples and scores a fixed number of schedules, keeps all of them, and
//! ranks them from fairest to least fair. Every trial is independent, so
//! trials run on rayon workers with no shared mutable state.
//!
//! Each trial draws from its own `ChaCha8Rng`: one base seed is taken from
//! the caller's generator and the trial index selects the stream. The
//! ranking is therefore identical for any thread count.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info, trace};

use courtside_config::{SearchConfig, ThreadCount};
use courtside_core::{MatchupUniverse, Result, ScheduleError};
use courtside_scoring::FairnessScorer;

use crate::result::{Candidate, SearchResult};
use crate::sampler::ScheduleSampler;
use crate::statistics::SearchStatistics;

/// Configured schedule search.
///
/// # Example
///
/// ```
/// use courtside_core::MatchupUniverse;
/// use courtside_solver::{ScheduleSearch, ThreadCount};
///
/// let universe = MatchupUniverse::enumerate(6).unwrap();
/// let result = ScheduleSearch::new(12, 200)
///     .with_seed(7)
///     .with_thread_count(ThreadCount::None)
///     .solve(&universe)
///     .unwrap();
///
/// assert_eq!(result.len(), 200);
/// let best = result.best().unwrap();
/// assert!(result.iter().all(|c| c.score().total() >= best.score().total()));
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleSearch {
    sampler: ScheduleSampler,
    scorer: FairnessScorer,
    trials: usize,
    seed: Option<u64>,
    thread_count: ThreadCount,
}

impl ScheduleSearch {
    /// Creates a search drawing `trials` schedules of `games` games each.
    pub fn new(games: usize, trials: usize) -> Self {
        ScheduleSearch {
            sampler: ScheduleSampler::new(games),
            scorer: FairnessScorer::new(),
            trials,
            seed: None,
            thread_count: ThreadCount::Auto,
        }
    }

    /// Creates a search from configuration. The roster size is not used
    /// here; it selects the universe passed to [`solve`](Self::solve).
    pub fn from_config(config: &SearchConfig) -> Self {
        let search = ScheduleSearch::new(config.games, config.trials)
            .with_thread_count(config.thread_count);
        match config.random_seed {
            Some(seed) => search.with_seed(seed),
            None => search,
        }
    }

    /// Fixes the seed used by [`solve`](Self::solve).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    pub fn games(&self) -> usize {
        self.sampler.games()
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Runs the search with the configured seed, or OS entropy if none.
    pub fn solve(&self, universe: &MatchupUniverse) -> Result<SearchResult> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.solve_with_rng(universe, &mut rng)
    }

    /// Runs the search, drawing the base seed from `rng`.
    ///
    /// # Errors
    ///
    /// Fails before any trial runs with [`ScheduleError::InvalidTrialCount`]
    /// for zero trials, [`ScheduleError::InvalidThreadCount`] for
    /// `ThreadCount::Count(0)`, or with the sampler's validation error when
    /// the universe cannot supply the requested number of games.
    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        universe: &MatchupUniverse,
        rng: &mut R,
    ) -> Result<SearchResult> {
        if self.trials == 0 {
            return Err(ScheduleError::InvalidTrialCount);
        }
        if self.thread_count == ThreadCount::Count(0) {
            return Err(ScheduleError::InvalidThreadCount);
        }
        self.sampler.validate(universe)?;

        let base_seed: u64 = rng.random();

        info!(
            event = "search_start",
            roster_size = universe.roster_size(),
            games = self.sampler.games(),
            universe_size = universe.len(),
            trials = self.trials,
            threads = ?self.thread_count,
        );

        let start = Instant::now();
        let finished = self.run_trials(universe, base_seed, start)?;
        let statistics = SearchStatistics::from_trials(
            finished.iter().map(|(c, at)| (c.score(), *at)),
            start.elapsed(),
        );
        let mut candidates: Vec<Candidate> = finished.into_iter().map(|(c, _)| c).collect();

        // The curve is in trial order, which parallel workers do not
        // follow, so these are emitted once the batch is done. The event
        // time is the end of the run; `elapsed_ms` is when the trial itself
        // finished.
        for improvement in &statistics.improvements {
            debug!(
                event = "new_best",
                trial = improvement.trial,
                score = %improvement.score,
                elapsed_ms = improvement.elapsed.as_millis() as u64,
            );
        }

        // Stable: equal totals keep sampling order.
        candidates.sort_by(|a, b| a.score().total().total_cmp(&b.score().total()));

        info!(
            event = "search_end",
            trials = statistics.trial_count,
            score = %statistics.best_score,
            perfect_count = statistics.perfect_count,
            duration_ms = statistics.duration.as_millis() as u64,
            speed = statistics.trials_per_second() as u64,
        );

        Ok(SearchResult::new(candidates, statistics))
    }

    // Returns candidates in trial order, each with the time it finished.
    fn run_trials(
        &self,
        universe: &MatchupUniverse,
        base_seed: u64,
        start: Instant,
    ) -> Result<Vec<(Candidate, Duration)>> {
        let run = |trial: usize| -> Result<(Candidate, Duration)> {
            let candidate = self.run_trial(universe, base_seed, trial)?;
            Ok((candidate, start.elapsed()))
        };
        match self.thread_count {
            ThreadCount::None => (0..self.trials).map(run).collect(),
            ThreadCount::Auto => (0..self.trials).into_par_iter().map(run).collect(),
            ThreadCount::Count(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| ScheduleError::ThreadPool(e.to_string()))?;
                pool.install(|| (0..self.trials).into_par_iter().map(run).collect())
            }
        }
    }

    fn run_trial(
        &self,
        universe: &MatchupUniverse,
        base_seed: u64,
        trial: usize,
    ) -> Result<Candidate> {
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
        rng.set_stream(trial as u64);

        let schedule = self.sampler.sample(universe, &mut rng)?;
        let scored = self.scorer.score(schedule)?;
        trace!(event = "trial", trial, score = %scored.score());
        Ok(Candidate { trial, scored })
    }
}

/// Samples and scores `trials` schedules of `games` games, fairest first.
///
/// Runs on the global rayon pool. Given the same generator state the
/// ranking is reproducible.
pub fn search<R: Rng + ?Sized>(
    universe: &MatchupUniverse,
    games: usize,
    trials: usize,
    rng: &mut R,
) -> Result<SearchResult> {
    ScheduleSearch::new(games, trials).solve_with_rng(universe, rng)
}

#[cfg(test)]
mod tests;
