//! Search statistics.
//!
//! Summarizes one search run: how many trials ran, how fast, the spread of
//! scores, and the anytime curve of best-so-far scores in sampling order.

use std::time::Duration;

use courtside_core::FairnessScore;

/// A new best score reached at a given trial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreImprovement {
    /// Trial index in sampling order (0-based).
    pub trial: usize,
    /// Best score after this trial.
    pub score: FairnessScore,
    /// Wall time from the start of the search until this trial finished.
    pub elapsed: Duration,
}

/// Aggregate metrics for a search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchStatistics {
    /// Number of trials run.
    pub trial_count: usize,
    /// Wall time spent sampling and scoring.
    pub duration: Duration,
    pub best_score: FairnessScore,
    pub worst_score: FairnessScore,
    /// Mean of the total scores.
    pub mean_score: f64,
    /// Trials that scored exactly zero.
    pub perfect_count: usize,
    /// Running minimum, one entry per strict improvement.
    pub improvements: Vec<ScoreImprovement>,
}

impl SearchStatistics {
    /// Builds statistics from scores listed in sampling order.
    ///
    /// # Example
    ///
    /// ```
    /// use courtside_core::FairnessScore;
    /// use courtside_solver::SearchStatistics;
    /// use std::time::Duration;
    ///
    /// let scores = [1.0, 2.0, 0.5, 0.5, 0.0].map(|t| FairnessScore::new(t, 0.0));
    /// let stats = SearchStatistics::from_scores(scores, Duration::from_secs(1));
    ///
    /// assert_eq!(stats.trial_count, 5);
    /// assert_eq!(stats.perfect_count, 1);
    /// let trials: Vec<usize> = stats.improvements.iter().map(|i| i.trial).collect();
    /// assert_eq!(trials, vec![0, 2, 4]);
    /// ```
    pub fn from_scores(scores: impl IntoIterator<Item = FairnessScore>, duration: Duration) -> Self {
        Self::from_trials(scores.into_iter().map(|s| (s, Duration::ZERO)), duration)
    }

    /// Builds statistics from `(score, finished_at)` pairs in sampling order.
    ///
    /// `finished_at` is the wall time since the search started. Under a
    /// parallel run it need not increase with the trial index.
    pub fn from_trials(
        trials: impl IntoIterator<Item = (FairnessScore, Duration)>,
        duration: Duration,
    ) -> Self {
        let mut trial_count = 0;
        let mut sum = 0.0;
        let mut perfect_count = 0;
        let mut best: Option<FairnessScore> = None;
        let mut worst: Option<FairnessScore> = None;
        let mut improvements = Vec::new();

        for (trial, (score, elapsed)) in trials.into_iter().enumerate() {
            trial_count += 1;
            sum += score.total();
            if score.is_perfect() {
                perfect_count += 1;
            }
            if best.map_or(true, |b| score.total() < b.total()) {
                best = Some(score);
                improvements.push(ScoreImprovement {
                    trial,
                    score,
                    elapsed,
                });
            }
            if worst.map_or(true, |w| score.total() > w.total()) {
                worst = Some(score);
            }
        }

        let mean_score = if trial_count == 0 {
            0.0
        } else {
            sum / trial_count as f64
        };

        SearchStatistics {
            trial_count,
            duration,
            best_score: best.unwrap_or_default(),
            worst_score: worst.unwrap_or_default(),
            mean_score,
            perfect_count,
            improvements,
        }
    }

    /// Trials per second over the whole run.
    pub fn trials_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.trial_count as f64 / secs
        } else {
            0.0
        }
    }

    /// Trial at which the final best score was first reached.
    pub fn best_found_at(&self) -> Option<usize> {
        self.improvements.last().map(|i| i.trial)
    }
}
