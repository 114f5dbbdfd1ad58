//! ScoredSchedule - a schedule together with its fairness breakdown.

use std::collections::BTreeMap;

use courtside_core::{FairnessScore, Player, Schedule, Team};

use crate::load_balance::LoadBalance;

/// A schedule and everything derived from it while scoring.
///
/// Owns its per-player and per-team counts. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredSchedule {
    schedule: Schedule,
    players: LoadBalance<Player>,
    teams: LoadBalance<Team>,
    score: FairnessScore,
}

impl ScoredSchedule {
    pub(crate) fn new(
        schedule: Schedule,
        players: LoadBalance<Player>,
        teams: LoadBalance<Team>,
    ) -> Self {
        let score = FairnessScore::new(players.std_dev(), teams.std_dev());
        ScoredSchedule {
            schedule,
            players,
            teams,
            score,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn score(&self) -> FairnessScore {
        self.score
    }

    /// Games played per player, for players that appear at least once.
    pub fn player_counts(&self) -> &BTreeMap<Player, usize> {
        self.players.loads()
    }

    /// Appearances per team, for teams that appear at least once.
    pub fn team_counts(&self) -> &BTreeMap<Team, usize> {
        self.teams.loads()
    }

    pub fn player_count(&self, player: Player) -> usize {
        self.players.load(&player)
    }

    pub fn team_count(&self, team: Team) -> usize {
        self.teams.load(&team)
    }

    pub fn is_perfect(&self) -> bool {
        self.score.is_perfect()
    }

    /// Roster members in `1..=roster_size` who never play in this schedule.
    ///
    /// Such schedules are valid; the score simply ignores absent players.
    pub fn missing_players(&self, roster_size: u16) -> Vec<Player> {
        (1..=roster_size)
            .map(Player::new)
            .filter(|p| self.players.load(p) == 0)
            .collect()
    }

    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }
}
