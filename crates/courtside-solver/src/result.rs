//! Ranked search output.

use courtside_core::{FairnessScore, Schedule};
use courtside_scoring::ScoredSchedule;

use crate::statistics::SearchStatistics;

/// One scored trial, remembering when it was sampled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    /// Trial index in sampling order (0-based).
    pub trial: usize,
    pub scored: ScoredSchedule,
}

impl Candidate {
    pub fn score(&self) -> FairnessScore {
        self.scored.score()
    }

    pub fn schedule(&self) -> &Schedule {
        self.scored.schedule()
    }
}

/// Every trial of one search, fairest first.
///
/// Candidates with equal total score keep their sampling order. Nothing is
/// deduplicated: the same schedule may appear more than once if it was
/// sampled more than once. Owned by the caller once returned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchResult {
    ranked: Vec<Candidate>,
    statistics: SearchStatistics,
}

impl SearchResult {
    /// Wraps candidates that are already ranked.
    pub(crate) fn new(ranked: Vec<Candidate>, statistics: SearchStatistics) -> Self {
        SearchResult { ranked, statistics }
    }

    /// The lowest-scoring candidate.
    pub fn best(&self) -> Option<&Candidate> {
        self.ranked.first()
    }

    /// The highest-scoring candidate.
    pub fn worst(&self) -> Option<&Candidate> {
        self.ranked.last()
    }

    /// Candidate at `rank`, 0 being the best.
    pub fn get(&self, rank: usize) -> Option<&Candidate> {
        self.ranked.get(rank)
    }

    /// The best `n` candidates, or all of them if there are fewer.
    pub fn top(&self, n: usize) -> &[Candidate] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Candidates that scored exactly zero.
    pub fn perfect(&self) -> impl Iterator<Item = &Candidate> {
        self.ranked.iter().take_while(|c| c.score().is_perfect())
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.ranked.iter()
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.ranked
    }

    /// Drops trial indices and statistics, keeping the ranked schedules.
    pub fn into_schedules(self) -> Vec<ScoredSchedule> {
        self.ranked.into_iter().map(|c| c.scored).collect()
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranked.iter()
    }
}
