//! The matchup universe: every legal 2v2 game for a roster.
//!
//! Teams are the 2-combinations of `1..=n`. Matchups are the unordered
//! pairs of teams that share no player, so the universe always has
//! `C(n,2) * C(n-2,2) / 2` entries.

use crate::domain::{Matchup, Player, Team};
use crate::error::{Result, ScheduleError};

/// Smallest roster that can field two disjoint teams.
pub const MIN_ROSTER_SIZE: usize = 4;

/// Largest universe `enumerate` will materialize, in matchups.
///
/// Ten million matchups is about 80 MB; the largest roster that stays
/// under it has 96 players. The universe grows as `n^4 / 8`, so anything
/// past this is refused instead of attempting the allocation.
pub const MAX_UNIVERSE_SIZE: usize = 10_000_000;

/// Every legal matchup for a roster of `n` players.
///
/// Computed once and shared read-only by every sampled schedule. The
/// matchups are kept in lexicographic order so that seeded sampling is
/// reproducible.
///
/// # Examples
///
/// ```
/// use courtside_core::MatchupUniverse;
///
/// let universe = MatchupUniverse::enumerate(6).unwrap();
/// assert_eq!(universe.len(), 45);
/// assert_eq!(universe.len(), MatchupUniverse::expected_size(6));
/// assert!(MatchupUniverse::enumerate(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupUniverse {
    roster_size: usize,
    matchups: Vec<Matchup>,
}

impl MatchupUniverse {
    /// Enumerates every matchup for a roster of `roster_size` players.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRoster`] when fewer than four
    /// players are given, when player ids would not fit in a `u16`, or
    /// when the universe would exceed [`MAX_UNIVERSE_SIZE`] matchups.
    pub fn enumerate(roster_size: usize) -> Result<Self> {
        let invalid = || ScheduleError::InvalidRoster {
            players: roster_size,
        };
        if roster_size < MIN_ROSTER_SIZE || u16::try_from(roster_size).is_err() {
            return Err(invalid());
        }
        let size = Self::checked_size(roster_size)
            .filter(|&size| size <= MAX_UNIVERSE_SIZE)
            .ok_or_else(invalid)?;

        let teams = teams(roster_size)?;
        let mut matchups = Vec::new();
        matchups.try_reserve_exact(size).map_err(|_| invalid())?;
        for (i, a) in teams.iter().enumerate() {
            for b in &teams[i + 1..] {
                if a.shared_player(b).is_none() {
                    matchups.push(Matchup::new(*a, *b)?);
                }
            }
        }

        Ok(MatchupUniverse {
            roster_size,
            matchups,
        })
    }

    /// Closed-form size of the universe, `C(n,2) * C(n-2,2) / 2`.
    ///
    /// Zero for rosters too small to play. Saturates at `usize::MAX` when
    /// the count overflows; see [`checked_size`](Self::checked_size).
    pub fn expected_size(roster_size: usize) -> usize {
        Self::checked_size(roster_size).unwrap_or(usize::MAX)
    }

    /// Closed-form size of the universe, or `None` on overflow.
    pub fn checked_size(roster_size: usize) -> Option<usize> {
        if roster_size < MIN_ROSTER_SIZE {
            return Some(0);
        }
        let teams = pair_count(roster_size)?;
        let opponents = pair_count(roster_size - 2)?;
        Some(teams.checked_mul(opponents)? / 2)
    }

    pub fn roster_size(&self) -> usize {
        self.roster_size
    }

    /// Players `1..=n`.
    pub fn roster(&self) -> impl Iterator<Item = Player> {
        (1..=self.roster_size as u16).map(Player::new)
    }

    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Matchup> {
        self.matchups.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matchup> {
        self.matchups.iter()
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    pub fn contains(&self, matchup: &Matchup) -> bool {
        self.matchups.binary_search(matchup).is_ok()
    }
}

impl<'a> IntoIterator for &'a MatchupUniverse {
    type Item = &'a Matchup;
    type IntoIter = std::slice::Iter<'a, Matchup>;

    fn into_iter(self) -> Self::IntoIter {
        self.matchups.iter()
    }
}

/// Shorthand for [`MatchupUniverse::enumerate`].
pub fn enumerate(roster_size: usize) -> Result<MatchupUniverse> {
    MatchupUniverse::enumerate(roster_size)
}

/// Every team that can be formed from players `1..=n`, in lexicographic order.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidRoster`] when ids would not fit in a
/// `u16`, or the team list would exceed [`MAX_UNIVERSE_SIZE`] entries or
/// cannot be allocated.
pub fn teams(roster_size: usize) -> Result<Vec<Team>> {
    let invalid = || ScheduleError::InvalidRoster {
        players: roster_size,
    };
    let n = u16::try_from(roster_size).map_err(|_| invalid())?;
    let count = pair_count(roster_size)
        .filter(|&count| count <= MAX_UNIVERSE_SIZE)
        .ok_or_else(invalid)?;
    let mut teams = Vec::new();
    teams.try_reserve_exact(count).map_err(|_| invalid())?;
    for p in 1..=n {
        for q in p + 1..=n {
            teams.push(Team::of(p, q)?);
        }
    }
    Ok(teams)
}

/// `C(n,2)` without overflow.
fn pair_count(n: usize) -> Option<usize> {
    // One of n, n-1 is even, so halve it before multiplying.
    if n % 2 == 0 {
        (n / 2).checked_mul(n.saturating_sub(1))
    } else {
        n.checked_mul(n.saturating_sub(1) / 2)
    }
}
