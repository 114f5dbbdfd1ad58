//! Seeded random sources for reproducible tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A deterministic generator for `seed`.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
