//! End-to-end tests through the facade crate.

use courtside::prelude::*;
use courtside_test::{balanced_six_player_schedule, seeded};

#[test]
fn test_plan_ranks_every_trial() {
    let config = SearchConfig::new()
        .with_trials(300)
        .with_random_seed(17)
        .with_thread_count(ThreadCount::Count(2));

    let result = courtside::plan(&config).unwrap();
    assert_eq!(result.len(), 300);

    let totals: Vec<f64> = result.iter().map(|c| c.score().total()).collect();
    assert!(totals.windows(2).all(|w| w[0] <= w[1]));
    assert!(result.iter().all(|c| c.schedule().len() == 12));
}

#[test]
fn test_plan_is_reproducible_with_seed() {
    let config = SearchConfig::new().with_trials(100).with_random_seed(5);
    let a = courtside::plan(&config).unwrap();
    let b = courtside::plan(&config).unwrap();
    assert_eq!(a.into_schedules(), b.into_schedules());
}

#[test]
fn test_plan_rejects_small_roster() {
    let config = SearchConfig::new().with_roster_size(3);
    assert_eq!(
        courtside::plan(&config).unwrap_err(),
        ScheduleError::InvalidRoster { players: 3 }
    );
}

#[test]
fn test_plan_rejects_too_many_games() {
    let config = SearchConfig::new().with_roster_size(4).with_games(4);
    assert_eq!(
        courtside::plan(&config).unwrap_err(),
        ScheduleError::InsufficientMatchups {
            requested: 4,
            available: 3,
        }
    );
}

#[test]
fn test_plan_rejects_zero_trials() {
    let config = SearchConfig::new().with_trials(0);
    assert_eq!(
        courtside::plan(&config).unwrap_err(),
        ScheduleError::InvalidTrialCount
    );
}

#[test]
fn test_plan_rejects_empty_thread_pool() {
    let config = SearchConfig::new()
        .with_trials(10)
        .with_thread_count(ThreadCount::Count(0));
    assert_eq!(
        courtside::plan(&config).unwrap_err(),
        ScheduleError::InvalidThreadCount
    );
}

#[test]
fn test_plan_rejects_oversized_roster() {
    let config = SearchConfig::new().with_roster_size(5_000);
    assert_eq!(
        courtside::plan(&config).unwrap_err(),
        ScheduleError::InvalidRoster { players: 5_000 }
    );
}

#[test]
fn test_pipeline_pieces_compose() {
    let universe = courtside::enumerate(6).unwrap();
    assert_eq!(universe.len(), 45);

    let schedule = courtside::sample(&universe, 12, &mut seeded(1)).unwrap();
    let scored = courtside::score(schedule).unwrap();
    assert_eq!(scored.player_counts().values().sum::<usize>(), 48);
    assert_eq!(scored.team_counts().values().sum::<usize>(), 24);

    let balanced = courtside::score(balanced_six_player_schedule()).unwrap();
    assert!(balanced.score() <= scored.score());
    assert_eq!(balanced.score(), FairnessScore::ZERO);
}
