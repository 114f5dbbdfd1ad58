//! Schedules: ordered sequences of games.

use std::fmt;
use std::str::FromStr;

use super::{Matchup, Player, Team};
use crate::error::{Result, ScheduleError};

/// An ordered list of games for one session.
///
/// A schedule produced by sampling never repeats a matchup and is never
/// mutated afterwards. Schedules built by hand are not validated here;
/// the scorer rejects empty or repeating ones.
///
/// # Examples
///
/// ```
/// use courtside_core::Schedule;
///
/// let schedule: Schedule = "[(1,2)v(3,4), (1,3)v(2,4)]".parse().unwrap();
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.players().count(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    matchups: Vec<Matchup>,
}

impl Schedule {
    pub fn new(matchups: Vec<Matchup>) -> Self {
        Schedule { matchups }
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matchup> {
        self.matchups.iter()
    }

    /// Every player appearance, four per game, in schedule order.
    pub fn players(&self) -> impl Iterator<Item = Player> + '_ {
        self.matchups.iter().flat_map(|m| m.players())
    }

    /// Every team appearance, two per game, in schedule order.
    pub fn teams(&self) -> impl Iterator<Item = Team> + '_ {
        self.matchups.iter().flat_map(|m| m.teams())
    }

    pub fn into_matchups(self) -> Vec<Matchup> {
        self.matchups
    }
}

impl From<Vec<Matchup>> for Schedule {
    fn from(matchups: Vec<Matchup>) -> Self {
        Schedule::new(matchups)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Matchup;
    type IntoIter = std::slice::Iter<'a, Matchup>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchups.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, matchup) in self.matchups.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{matchup}")?;
        }
        f.write_str("]")
    }
}

impl FromStr for Schedule {
    type Err = ScheduleError;

    /// Parses a comma-separated list of matchups, optionally in brackets.
    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let body = compact.strip_prefix('[').unwrap_or(&compact);
        let body = body.strip_suffix(']').unwrap_or(body);

        let mut matchups = Vec::new();
        let mut current = String::new();
        let mut closed = 0;
        for c in body.chars() {
            if current.is_empty() && c == ',' {
                continue;
            }
            current.push(c);
            if c == ')' {
                closed += 1;
                if closed == 2 {
                    matchups.push(current.parse()?);
                    current.clear();
                    closed = 0;
                }
            }
        }
        if !current.is_empty() {
            return Err(ScheduleError::Parse(format!("incomplete matchup `{current}`")));
        }
        Ok(Schedule::new(matchups))
    }
}
