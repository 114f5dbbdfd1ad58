//! Known schedules.

use courtside_core::{Matchup, Schedule};

/// Twelve games for six players where everyone plays 8 times and each of
/// the twelve teams that appears plays exactly twice.
pub const BALANCED_SIX_PLAYER: &str = "[(1,2)v(4,6), (1,6)v(2,4), (1,3)v(4,5), (2,4)v(5,6), \
     (1,4)v(3,5), (2,3)v(4,6), (1,4)v(2,3), (1,3)v(2,5), \
     (2,5)v(3,6), (1,2)v(5,6), (3,6)v(4,5), (1,6)v(3,5)]";

/// Parses a schedule literal, panicking on malformed input.
pub fn schedule(literal: &str) -> Schedule {
    literal
        .parse()
        .unwrap_or_else(|e| panic!("bad schedule literal `{literal}`: {e}"))
}

/// Parses a single matchup literal, panicking on malformed input.
pub fn matchup(literal: &str) -> Matchup {
    literal
        .parse()
        .unwrap_or_else(|e| panic!("bad matchup literal `{literal}`: {e}"))
}

pub fn balanced_six_player_schedule() -> Schedule {
    schedule(BALANCED_SIX_PLAYER)
}
