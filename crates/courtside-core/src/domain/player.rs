//! Player identifiers.

use std::fmt;

/// A player on the roster, identified by a 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Player(u16);

impl Player {
    /// Creates a player with the given identifier.
    #[inline]
    pub const fn new(id: u16) -> Self {
        Player(id)
    }

    /// Returns the player identifier.
    #[inline]
    pub const fn id(self) -> u16 {
        self.0
    }
}

impl From<u16> for Player {
    fn from(id: u16) -> Self {
        Player(id)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
