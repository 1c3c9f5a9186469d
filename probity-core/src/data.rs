//! Core data types for Probity property-based testing.

use crate::error::{ProbityError, Result};

/// Base element count for sequence generation.
///
/// A generation level `g > 0` produces `ELEMENTS_PER_STEP * (g / 100 + 1)`
/// elements.
pub const ELEMENTS_PER_STEP: usize = 10;

/// Generation level controlling value complexity.
///
/// Level 0 always yields the minimal value of a type. Higher levels yield
/// larger or more varied values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Level(pub usize);

impl Level {
    /// Create a new level.
    pub fn new(value: usize) -> Self {
        Level(value)
    }

    /// Get the inner level value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Whether this level asks for the minimal value.
    pub fn is_minimal(&self) -> bool {
        self.0 == 0
    }

    /// Number of elements a sequence generated at this level holds.
    pub fn element_count(&self) -> usize {
        if self.is_minimal() {
            0
        } else {
            ELEMENTS_PER_STEP.saturating_mul(self.0 / 100 + 1)
        }
    }

    /// The level used for the next sibling element.
    pub fn next(&self) -> Self {
        Level(self.0.wrapping_add(1))
    }
}

/// Mix a seed into a well-distributed 64-bit value.
///
/// SplitMix64 finalizer. Consecutive seeds map to decorrelated outputs, which
/// is what lets sibling elements advance their seed by one.
pub fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Draw a value in `[0, bound]` from a seed.
pub fn mix_up_to(seed: u64, bound: u64) -> u64 {
    let value = mix(seed);
    if bound == u64::MAX {
        value
    } else {
        ((value as u128 * (bound as u128 + 1)) >> 64) as u64
    }
}

/// Parameters for one check session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunParams {
    /// Number of trials each property check runs.
    pub num_property_checks: usize,

    /// Initial random seed. Zero means "draw one from system entropy".
    pub random_seed: u64,
}

impl Default for RunParams {
    fn default() -> Self {
        RunParams {
            num_property_checks: 100,
            random_seed: 0,
        }
    }
}

impl RunParams {
    /// Set the number of trials per property check.
    pub fn with_checks(mut self, checks: usize) -> Self {
        self.num_property_checks = checks;
        self
    }

    /// Set the initial random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Whether the seed has to come from system entropy.
    pub fn wants_entropy(&self) -> bool {
        self.random_seed == 0
    }

    /// Reject parameters a session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.num_property_checks == 0 {
            return Err(ProbityError::InvalidParams {
                message: "num_property_checks must be positive".to_string(),
            });
        }
        Ok(())
    }
}
