//! Domain model: players, teams, matchups and schedules.
//!
//! All types are small `Copy` values except [`Schedule`]. Teams and
//! matchups are stored in a normalized order so that structural equality
//! matches the unordered-pair semantics of the game.

mod matchup;
mod player;
mod schedule;
mod team;

#[cfg(test)]
mod tests;

pub use matchup::Matchup;
pub use player::Player;
pub use schedule::Schedule;
pub use team::Team;
