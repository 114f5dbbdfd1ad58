//! One-call entry point from configuration to ranked schedules.

use tracing::debug;

use courtside_config::SearchConfig;
use courtside_core::{MatchupUniverse, Result};
use courtside_solver::{ScheduleSearch, SearchResult};

/// Enumerates the roster's matchups and runs the configured search.
///
/// With the `console` feature enabled, console output is initialized on
/// first use.
///
/// # Errors
///
/// Every configuration problem surfaces as the [`ScheduleError`] of the
/// step that rejects it: the roster from enumeration, the game, trial and
/// thread counts from the search.
///
/// [`ScheduleError`]: courtside_core::ScheduleError
pub fn plan(config: &SearchConfig) -> Result<SearchResult> {
    #[cfg(feature = "console")]
    courtside_console::init();

    let universe = MatchupUniverse::enumerate(config.roster_size)?;
    debug!(
        roster_size = config.roster_size,
        matchups = universe.len(),
        "matchup universe enumerated"
    );
    ScheduleSearch::from_config(config).solve(&universe)
}
