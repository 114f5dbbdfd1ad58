//! Tests for the domain model.

use super::*;
use crate::error::ScheduleError;

#[test]
fn test_team_is_unordered() {
    let a = Team::of(5, 1).unwrap();
    let b = Team::of(1, 5).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.players(), [Player::new(1), Player::new(5)]);
}

#[test]
fn test_team_rejects_same_player() {
    assert_eq!(Team::of(2, 2), Err(ScheduleError::InvalidTeam { player: 2 }));
}

#[test]
fn test_team_shared_player() {
    let a = Team::of(1, 2).unwrap();
    let b = Team::of(2, 3).unwrap();
    let c = Team::of(3, 4).unwrap();
    assert_eq!(a.shared_player(&b), Some(Player::new(2)));
    assert_eq!(a.shared_player(&c), None);
}

#[test]
fn test_matchup_is_unordered() {
    let a: Matchup = "(3,4)v(1,2)".parse().unwrap();
    let b: Matchup = "(1,2)v(3,4)".parse().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.teams()[0], Team::of(1, 2).unwrap());
}

#[test]
fn test_matchup_rejects_overlap() {
    let result = Matchup::new(Team::of(1, 2).unwrap(), Team::of(1, 3).unwrap());
    assert_eq!(result, Err(ScheduleError::OverlappingTeams { player: 1 }));
}

#[test]
fn test_matchup_rejects_same_team() {
    let team = Team::of(1, 2).unwrap();
    assert!(Matchup::new(team, team).is_err());
}

#[test]
fn test_matchup_players() {
    let m: Matchup = "(2,5)v(1,6)".parse().unwrap();
    let mut players: Vec<u16> = m.players().iter().map(|p| p.id()).collect();
    players.sort_unstable();
    assert_eq!(players, vec![1, 2, 5, 6]);
    assert!(m.involves(Player::new(5)));
    assert!(!m.involves(Player::new(3)));
}

#[test]
fn test_parse_errors() {
    assert!(matches!("1,2".parse::<Team>(), Err(ScheduleError::Parse(_))));
    assert!(matches!("(1;2)".parse::<Team>(), Err(ScheduleError::Parse(_))));
    assert!(matches!("(a,2)".parse::<Team>(), Err(ScheduleError::Parse(_))));
    assert!(matches!("(1,2)(3,4)".parse::<Matchup>(), Err(ScheduleError::Parse(_))));
    assert!(matches!("[(1,2)v(3,4), (1,3)v(2".parse::<Schedule>(), Err(ScheduleError::Parse(_))));
}

#[test]
fn test_schedule_display_round_trips() {
    let text = "[(1,2)v(4,6), (1,6)v(2,4)]";
    let schedule: Schedule = text.parse().unwrap();
    assert_eq!(schedule.to_string(), text);
}

#[test]
fn test_schedule_parse_without_brackets() {
    let schedule: Schedule = "(1,2)v(3,4),(1,3)v(2,4) , (1,4)v(2,3)".parse().unwrap();
    assert_eq!(schedule.len(), 3);
}

#[test]
fn test_empty_schedule_parses() {
    let schedule: Schedule = "[]".parse().unwrap();
    assert!(schedule.is_empty());
}

#[test]
fn test_schedule_flattening() {
    let schedule: Schedule = "(1,2)v(3,4), (1,3)v(2,4)".parse().unwrap();
    assert_eq!(schedule.players().count(), 8);
    let teams: Vec<String> = schedule.teams().map(|t| t.to_string()).collect();
    assert_eq!(teams, vec!["(1,2)", "(3,4)", "(1,3)", "(2,4)"]);
}
