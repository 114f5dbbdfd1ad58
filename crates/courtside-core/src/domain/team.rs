//! Teams: unordered pairs of distinct players.

use std::fmt;
use std::str::FromStr;

use super::Player;
use crate::error::{Result, ScheduleError};

/// Two distinct players playing on the same side of the net.
///
/// The pair is stored with the lower identifier first, so `(4,2)` and
/// `(2,4)` are the same team.
///
/// # Examples
///
/// ```
/// use courtside_core::{Player, Team};
///
/// let a = Team::of(4, 2).unwrap();
/// let b = Team::of(2, 4).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "(2,4)");
/// assert!(a.contains(Player::new(4)));
/// assert!(Team::of(3, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Team {
    low: Player,
    high: Player,
}

impl Team {
    /// Creates a team, failing if both players are the same.
    pub fn new(a: Player, b: Player) -> Result<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Team { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Team { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(ScheduleError::InvalidTeam { player: a.id() }),
        }
    }

    /// Creates a team from raw player identifiers.
    pub fn of(a: u16, b: u16) -> Result<Self> {
        Team::new(Player::new(a), Player::new(b))
    }

    /// Returns both players, lower identifier first.
    #[inline]
    pub fn players(&self) -> [Player; 2] {
        [self.low, self.high]
    }

    #[inline]
    pub fn contains(&self, player: Player) -> bool {
        self.low == player || self.high == player
    }

    /// Returns a player both teams have in common, if any.
    pub fn shared_player(&self, other: &Team) -> Option<Player> {
        self.players().into_iter().find(|p| other.contains(*p))
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.low, self.high)
    }
}

impl FromStr for Team {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ScheduleError::Parse(format!("team `{s}` must look like (p,q)")))?;
        let (a, b) = inner
            .split_once(',')
            .ok_or_else(|| ScheduleError::Parse(format!("team `{s}` needs two players")))?;
        Team::of(parse_player(a)?, parse_player(b)?)
    }
}

fn parse_player(s: &str) -> Result<u16> {
    s.trim()
        .parse()
        .map_err(|_| ScheduleError::Parse(format!("`{}` is not a player id", s.trim())))
}
