//! FairnessScore - how unevenly a schedule spreads play

use std::cmp::Ordering;
use std::fmt;

/// Fairness of a schedule. Lower is better; zero is perfect.
///
/// Made of two population standard deviations: one over per-player
/// appearance counts and one over per-team appearance counts. The total is
/// their sum.
///
/// Ordering compares the total first, then the player component, using
/// IEEE total ordering so that scores can be sorted.
///
/// # Examples
///
/// ```
/// use courtside_core::FairnessScore;
///
/// let good = FairnessScore::new(0.5, 0.25);
/// let bad = FairnessScore::new(1.0, 0.0);
///
/// assert_eq!(good.total(), 0.75);
/// assert!(good < bad);
/// assert!(FairnessScore::ZERO.is_perfect());
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FairnessScore {
    player_deviation: f64,
    team_deviation: f64,
}

impl FairnessScore {
    /// The perfect score.
    pub const ZERO: FairnessScore = FairnessScore {
        player_deviation: 0.0,
        team_deviation: 0.0,
    };

    #[inline]
    pub const fn new(player_deviation: f64, team_deviation: f64) -> Self {
        FairnessScore {
            player_deviation,
            team_deviation,
        }
    }

    /// Standard deviation of per-player appearance counts.
    #[inline]
    pub const fn player_deviation(&self) -> f64 {
        self.player_deviation
    }

    /// Standard deviation of per-team appearance counts.
    #[inline]
    pub const fn team_deviation(&self) -> f64 {
        self.team_deviation
    }

    /// The scalar score used for ranking.
    #[inline]
    pub fn total(&self) -> f64 {
        self.player_deviation + self.team_deviation
    }

    /// Every player plays equally often and every team that appears does so
    /// equally often.
    #[inline]
    pub fn is_perfect(&self) -> bool {
        self.total() == 0.0
    }
}

impl Ord for FairnessScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total()
            .total_cmp(&other.total())
            .then_with(|| self.player_deviation.total_cmp(&other.player_deviation))
    }
}

impl PartialOrd for FairnessScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FairnessScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FairnessScore {}

impl fmt::Display for FairnessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} (players {:.4} + teams {:.4})",
            self.total(),
            self.player_deviation,
            self.team_deviation
        )
    }
}
