//! Deterministic PRNG based on the SplitMix64 algorithm.
//!
//! Provides a fast, seedable pseudo-random number generator suitable for
//! reproducible particle placement and permutation-table construction. Same
//! seed always produces the same sequence of values across all platforms
//! (pure integer arithmetic, no floating point in the core algorithm).

use serde::{Deserialize, Serialize};

/// SplitMix64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses Steele, Lea & Flood's finalizer constants. Unlike xorshift-family
/// generators, SplitMix64 has no all-zeros fixed point, so any seed
/// (including 0) is usable directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Weyl-sequence increment (the golden-ratio constant).
    const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Shuffles a slice in place with the Fisher–Yates algorithm.
    ///
    /// Index selection uses simple modulo reduction; at 64-bit state width
    /// the bias for small slices is negligible.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_u64() % (i as u64 + 1)) as usize;
            items.swap(i, j);
        }
    }
}
