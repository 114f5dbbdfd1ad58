//! Shared test fixtures for courtside crates.
//!
//! This crate only depends on `courtside-core` so that the scoring and
//! solver crates can both use it as a dev-dependency.
//!
//! - [`fixtures`] - known schedules and schedule literal helpers
//! - [`rng`] - seeded random sources
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! courtside-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod rng;

pub use fixtures::{balanced_six_player_schedule, schedule, BALANCED_SIX_PLAYER};
pub use rng::seeded;
