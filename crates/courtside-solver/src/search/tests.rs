//! Tests for the schedule search.

use super::*;
use courtside_test::seeded;
use std::collections::HashSet;

fn universe(n: usize) -> MatchupUniverse {
    MatchupUniverse::enumerate(n).unwrap()
}

fn totals(result: &SearchResult) -> Vec<f64> {
    result.iter().map(|c| c.score().total()).collect()
}

#[test]
fn test_returns_every_trial_sorted() {
    let universe = universe(6);
    let result = search(&universe, 12, 500, &mut seeded(11)).unwrap();

    assert_eq!(result.len(), 500);
    let scores = totals(&result);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));

    let trials: HashSet<usize> = result.iter().map(|c| c.trial).collect();
    assert_eq!(trials.len(), 500);
}

#[test]
fn test_every_candidate_is_a_valid_schedule() {
    let universe = universe(7);
    let result = search(&universe, 9, 100, &mut seeded(4)).unwrap();

    for candidate in &result {
        let schedule = candidate.schedule();
        assert_eq!(schedule.len(), 9);
        let distinct: HashSet<_> = schedule.iter().collect();
        assert_eq!(distinct.len(), 9);
        assert!(schedule.iter().all(|m| universe.contains(m)));
    }
}

#[test]
fn test_same_seed_same_ranking() {
    let universe = universe(6);
    let a = search(&universe, 12, 300, &mut seeded(5)).unwrap();
    let b = search(&universe, 12, 300, &mut seeded(5)).unwrap();
    assert_eq!(a.into_candidates(), b.into_candidates());
}

#[test]
fn test_ranking_independent_of_thread_count() {
    let universe = universe(6);
    let run = |threads| {
        ScheduleSearch::new(12, 250)
            .with_seed(99)
            .with_thread_count(threads)
            .solve(&universe)
            .unwrap()
            .into_candidates()
    };

    let sequential = run(ThreadCount::None);
    assert_eq!(sequential, run(ThreadCount::Auto));
    assert_eq!(sequential, run(ThreadCount::Count(2)));
}

#[test]
fn test_ties_keep_sampling_order() {
    // four players: every 3-game schedule covers the whole universe
    let universe = universe(4);
    let result = ScheduleSearch::new(3, 20)
        .with_seed(1)
        .solve(&universe)
        .unwrap();

    let trials: Vec<usize> = result.iter().map(|c| c.trial).collect();
    assert_eq!(trials, (0..20).collect::<Vec<_>>());
    assert_eq!(result.perfect().count(), 20);
    assert_eq!(result.statistics().perfect_count, 20);
}

#[test]
fn test_duplicates_are_kept() {
    // 3 matchups, 1 game: 30 trials must repeat schedules
    let universe = universe(4);
    let result = search(&universe, 1, 30, &mut seeded(8)).unwrap();
    let distinct: HashSet<_> = result.iter().map(|c| c.schedule().clone()).collect();
    assert_eq!(result.len(), 30);
    assert!(distinct.len() <= 3);
}

#[test]
fn test_statistics_match_ranking() {
    let universe = universe(6);
    let result = search(&universe, 12, 400, &mut seeded(21)).unwrap();
    let stats = result.statistics();

    assert_eq!(stats.trial_count, 400);
    assert_eq!(stats.best_score, result.best().unwrap().score());
    assert_eq!(stats.worst_score.total(), result.worst().unwrap().score().total());

    let curve: Vec<f64> = stats.improvements.iter().map(|i| i.score.total()).collect();
    assert!(curve.windows(2).all(|w| w[1] < w[0]));
    assert_eq!(stats.improvements[0].trial, 0);

    // the first candidate reaching the best total is the one ranked first
    assert_eq!(stats.best_found_at(), Some(result.best().unwrap().trial));
}

#[test]
fn test_top_and_get() {
    let universe = universe(6);
    let result = search(&universe, 12, 50, &mut seeded(2)).unwrap();

    assert_eq!(result.top(5).len(), 5);
    assert_eq!(result.top(500).len(), 50);
    assert_eq!(result.get(0), result.best());
    assert!(result.get(50).is_none());
}

#[test]
fn test_more_trials_find_better_schedules_on_average() {
    let universe = universe(6);
    let repetitions = 30;

    let mean_best = |trials: usize| {
        let sum: f64 = (0..repetitions)
            .map(|rep| {
                ScheduleSearch::new(12, trials)
                    .with_seed(1_000 + rep)
                    .with_thread_count(ThreadCount::None)
                    .solve(&universe)
                    .unwrap()
                    .statistics()
                    .best_score
                    .total()
            })
            .sum();
        sum / repetitions as f64
    };

    let one = mean_best(1);
    let ten = mean_best(10);
    let hundred = mean_best(100);
    assert!(ten <= one, "{ten} > {one}");
    assert!(hundred <= ten, "{hundred} > {ten}");
}

#[test]
fn test_zero_trials() {
    let universe = universe(6);
    let result = search(&universe, 12, 0, &mut seeded(0));
    assert_eq!(result.unwrap_err(), ScheduleError::InvalidTrialCount);
}

#[test]
fn test_too_many_games() {
    let universe = universe(5);
    let result = search(&universe, 16, 10, &mut seeded(0));
    assert_eq!(
        result.unwrap_err(),
        ScheduleError::InsufficientMatchups {
            requested: 16,
            available: 15,
        }
    );
}

#[test]
fn test_from_config() {
    let config = SearchConfig::new()
        .with_games(8)
        .with_trials(40)
        .with_random_seed(3)
        .with_thread_count(ThreadCount::None);
    let search = ScheduleSearch::from_config(&config);
    assert_eq!(search.games(), 8);
    assert_eq!(search.trials(), 40);

    let universe = universe(config.roster_size);
    let a = search.solve(&universe).unwrap();
    let b = search.solve(&universe).unwrap();
    assert_eq!(a.len(), 40);
    assert_eq!(a.into_candidates(), b.into_candidates());
}

#[test]
fn test_zero_thread_pool_is_rejected() {
    let universe = universe(6);
    let result = ScheduleSearch::new(12, 10)
        .with_seed(1)
        .with_thread_count(ThreadCount::Count(0))
        .solve(&universe);
    assert_eq!(result.unwrap_err(), ScheduleError::InvalidThreadCount);
}

#[test]
fn test_improvements_carry_finish_times() {
    let universe = universe(6);
    let result = ScheduleSearch::new(12, 300)
        .with_seed(8)
        .with_thread_count(ThreadCount::Count(2))
        .solve(&universe)
        .unwrap();
    let stats = result.statistics();

    assert!(!stats.improvements.is_empty());
    assert!(stats.improvements.iter().all(|i| i.elapsed <= stats.duration));
}
