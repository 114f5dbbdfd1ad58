//! Tests for search configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        roster_size = 8
        games = 14
        trials = 2500
        random_seed = 42
        thread_count = "none"
    "#;

    let config = SearchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.roster_size, 8);
    assert_eq!(config.games, 14);
    assert_eq!(config.trials, 2500);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.thread_count, ThreadCount::None);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        roster_size: 7
        random_seed: 42
        thread_count: none
    "#;

    let config = SearchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.roster_size, 7);
    assert_eq!(config.games, DEFAULT_GAMES);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.thread_count, ThreadCount::None);
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = SearchConfig::from_toml_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.thread_count, ThreadCount::Auto);
    assert_eq!(config.random_seed, None);
}

#[test]
fn test_builder() {
    let config = SearchConfig::new()
        .with_roster_size(10)
        .with_games(20)
        .with_trials(100)
        .with_random_seed(123)
        .with_thread_count(ThreadCount::Count(3));

    assert_eq!(config.roster_size, 10);
    assert_eq!(config.games, 20);
    assert_eq!(config.trials, 100);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.thread_count, ThreadCount::Count(3));
}

#[test]
fn test_missing_file() {
    let result = SearchConfig::load("/nonexistent/search.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_invalid_toml() {
    let result = SearchConfig::from_toml_str("roster_size = \"six\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}
