//! Tests for schedule sampling.

use super::*;
use courtside_test::seeded;
use std::collections::HashSet;

fn universe(n: usize) -> MatchupUniverse {
    MatchupUniverse::enumerate(n).unwrap()
}

#[test]
fn test_sample_has_k_distinct_matchups_from_universe() {
    let universe = universe(6);
    let mut rng = seeded(3);
    for k in [1, 5, 12, 45] {
        let schedule = sample(&universe, k, &mut rng).unwrap();
        assert_eq!(schedule.len(), k);

        let distinct: HashSet<_> = schedule.iter().collect();
        assert_eq!(distinct.len(), k);
        assert!(schedule.iter().all(|m| universe.contains(m)));
    }
}

#[test]
fn test_same_seed_same_schedule() {
    let universe = universe(6);
    let a = sample(&universe, 12, &mut seeded(42)).unwrap();
    let b = sample(&universe, 12, &mut seeded(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    let universe = universe(6);
    let a = sample(&universe, 12, &mut seeded(1)).unwrap();
    let b = sample(&universe, 12, &mut seeded(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_repeated_calls_advance_the_rng() {
    let universe = universe(8);
    let mut rng = seeded(9);
    let a = sample(&universe, 10, &mut rng).unwrap();
    let b = sample(&universe, 10, &mut rng).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_whole_universe() {
    let universe = universe(5);
    let schedule = sample(&universe, universe.len(), &mut seeded(5)).unwrap();
    let mut drawn = schedule.into_matchups();
    drawn.sort();
    assert_eq!(drawn, universe.matchups());
}

#[test]
fn test_too_many_games() {
    let universe = universe(6);
    let result = sample(&universe, 46, &mut seeded(0));
    assert_eq!(
        result,
        Err(ScheduleError::InsufficientMatchups {
            requested: 46,
            available: 45,
        })
    );
}

#[test]
fn test_zero_games() {
    let universe = universe(6);
    assert_eq!(
        ScheduleSampler::new(0).sample(&universe, &mut seeded(0)),
        Err(ScheduleError::EmptySchedule)
    );
}
