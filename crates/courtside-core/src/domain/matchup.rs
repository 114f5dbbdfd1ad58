//! Matchups: two disjoint teams facing each other.

use std::fmt;
use std::str::FromStr;

use super::{Player, Team};
use crate::error::{Result, ScheduleError};

/// One game: an unordered pair of teams with no player in common.
///
/// Stored with the smaller team first so that `(1,2)v(3,4)` and
/// `(3,4)v(1,2)` compare equal.
///
/// # Examples
///
/// ```
/// use courtside_core::{Matchup, Team};
///
/// let game: Matchup = "(4,6)v(1,2)".parse().unwrap();
/// assert_eq!(game.to_string(), "(1,2)v(4,6)");
/// assert!(Matchup::new(Team::of(1, 2).unwrap(), Team::of(2, 3).unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matchup {
    first: Team,
    second: Team,
}

impl Matchup {
    /// Creates a matchup, failing if the teams share a player.
    ///
    /// Two identical teams always share a player, so this also rules out a
    /// team playing itself.
    pub fn new(a: Team, b: Team) -> Result<Self> {
        if let Some(player) = a.shared_player(&b) {
            return Err(ScheduleError::OverlappingTeams {
                player: player.id(),
            });
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Ok(Matchup { first, second })
    }

    /// Returns both teams, smaller first.
    #[inline]
    pub fn teams(&self) -> [Team; 2] {
        [self.first, self.second]
    }

    /// Returns the four players on court.
    pub fn players(&self) -> [Player; 4] {
        let [a, b] = self.first.players();
        let [c, d] = self.second.players();
        [a, b, c, d]
    }

    pub fn involves(&self, player: Player) -> bool {
        self.first.contains(player) || self.second.contains(player)
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.first, self.second)
    }
}

impl FromStr for Matchup {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let (a, b) = s
            .split_once(['v', 'V'])
            .ok_or_else(|| ScheduleError::Parse(format!("matchup `{s}` must look like (a,b)v(c,d)")))?;
        Matchup::new(a.parse()?, b.parse()?)
    }
}
