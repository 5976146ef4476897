//! RNG trait abstraction for equation generation
//!
//! The generator never touches a global random source. Callers pass any
//! `rand::Rng` (thread rng in the game, a seeded xoshiro in tests) so every
//! generated equation is reproducible from a seed.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Random number generator trait for game content generation
pub trait GameRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random i64 in [lo, hi] (both ends inclusive)
    fn gen_i64(&mut self, lo: i64, hi: i64) -> i64;
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> GameRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_i64(&mut self, lo: i64, hi: i64) -> i64 {
        rand::Rng::gen_range(self, lo..=hi)
    }
}

/// Seeded RNG for deterministic content generation
pub fn seeded_rng(seed: u64) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(seed)
}
