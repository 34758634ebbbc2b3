//! Per-instance random number generation.
//!
//! Every strategy owns its own generator, created once from the configured
//! seed. Nothing in the crate touches a global generator, so two strategies
//! with different seeds can run side by side in one process.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator type owned by each search strategy.
pub type SearchRng = StdRng;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> SearchRng {
    StdRng::seed_from_u64(seed)
}
