//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in a battle (hit rolls, status skips, status
//! application, AI picks) is derived from a seed through this trait, so a
//! fixed battle seed replays an entire encounter exactly.
//!
//! # Determinism
//!
//! Implementations must be pure: the same seed always yields the same value.
//! Sequencing lives in [`crate::engine::Dice`], which mixes a running nonce
//! into the seed with [`compute_seed`].

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. One LCG step followed by an
/// xorshift and a data-dependent rotation.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `battle_seed` - Base seed fixed at battle start (for replay)
/// * `nonce` - Roll sequence number (increments every draw)
/// * `context` - Purpose of the roll, so different roll kinds never share a
///   stream even at the same nonce
pub fn compute_seed(battle_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = battle_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
