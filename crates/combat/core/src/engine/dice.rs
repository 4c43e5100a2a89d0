//! Sequenced draws over a stateless [`RngOracle`].

use crate::env::{RngOracle, compute_seed};

/// Purpose of a random draw, mixed into its seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollKind {
    /// Hit check.
    Hit = 0,
    /// A status `skip_chance` roll.
    StatusSkip = 1,
    /// Whether a skill's status effect lands.
    StatusApply = 2,
    /// Weighted skill pick.
    AiPick = 3,
}

/// Cursor over an RNG oracle: battle seed plus a running nonce.
///
/// Every draw consumes one nonce, so a battle replayed with the same seed and
/// the same decisions sees the same numbers.
#[derive(Clone, Copy)]
pub struct Dice<'a> {
    oracle: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
}

impl<'a> Dice<'a> {
    pub fn new(oracle: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            oracle,
            seed,
            nonce: 0,
        }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn roll(&mut self, kind: RollKind) -> f64 {
        let seed = compute_seed(self.seed, self.nonce, kind as u32);
        self.nonce = self.nonce.wrapping_add(1);
        self.oracle.unit(seed)
    }

    /// Uniform draw in `[0, max)`.
    pub fn uniform(&mut self, kind: RollKind, max: f64) -> f64 {
        self.roll(kind) * max
    }

    /// Number of draws made so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl core::fmt::Debug for Dice<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dice")
            .field("seed", &self.seed)
            .field("nonce", &self.nonce)
            .finish()
    }
}
