//! Random source for spawn decisions, creature choice, jump triggers and
//! floater placement
//!
//! Every draw in the simulation is a uniform integer in `[0, n)`, so that is
//! the whole interface. Tests substitute scripted sources.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A uniform integer source
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, n: u32) -> u32 {
        (**self).below(n)
    }
}

/// Seeded PCG32 generator (the game's default source)
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn below(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "cannot draw from an empty range");
        if n <= 1 {
            return 0;
        }
        self.rng.random_range(0..n)
    }
}
