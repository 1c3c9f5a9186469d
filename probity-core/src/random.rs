//! The per-session random-number stream.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Random-number stream drawing the seeds of successive trials.
///
/// One source belongs to one session and is only reachable through `&mut`,
/// so properties sharing it are checked one after another.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    active_seed: u64,
}

impl RandomSource {
    /// Create a source seeded with `seed`. Zero draws a seed from entropy.
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { entropy_seed() } else { seed };
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
            active_seed: seed,
        }
    }

    /// Create a source seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(0)
    }

    /// Reseed the stream. Zero draws a seed from entropy.
    pub fn seed(&mut self, value: u64) {
        *self = Self::new(value);
    }

    /// The seed the stream was last seeded with; never zero.
    pub fn active_seed(&self) -> u64 {
        self.active_seed
    }

    /// Draw the next seed in sequence.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Draw a non-zero seed from system entropy.
pub fn entropy_seed() -> u64 {
    let mut rng = rand::thread_rng();
    loop {
        let seed: u64 = rng.gen();
        if seed != 0 {
            return seed;
        }
    }
}
