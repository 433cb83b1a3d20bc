//! Uniform random sources.
//!
//! Samplers never talk to a concrete generator; they depend on the
//! [`UniformRng`] capability, so production code can inject a seeded
//! Mersenne Twister while tests inject a scripted draw sequence.

use ps_core::{ensure, Real, Result};
use rand::RngCore;
use rand_mt::Mt19937GenRand64;

/// A source of uniform(0,1) deviates.
pub trait UniformRng {
    /// The next uniform deviate in `[0, 1)`.
    fn next_real(&mut self) -> Real;
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl UniformRng for MersenneTwisterUniformRng {
    fn next_real(&mut self) -> Real {
        // Map u64 to [0.0, 1.0)
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

/// Adapter exposing any [`rand`] generator as a [`UniformRng`].
pub struct RandUniformRng<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandUniformRng<R> {
    /// Wrap a `rand` generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> UniformRng for RandUniformRng<R> {
    fn next_real(&mut self) -> Real {
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

/// A deterministic source replaying a fixed list of draws, cycling back to
/// the start when exhausted.  Intended for tests that need exact draw
/// sequences.
pub struct ScriptedUniformRng {
    draws: Vec<Real>,
    position: usize,
}

impl ScriptedUniformRng {
    /// Create a scripted source from a non-empty list of draws in `[0, 1)`.
    pub fn new(draws: Vec<Real>) -> Result<Self> {
        ensure!(!draws.is_empty(), "scripted draw list must not be empty");
        ensure!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "scripted draws must lie in [0, 1)"
        );
        Ok(Self { draws, position: 0 })
    }
}

impl UniformRng for ScriptedUniformRng {
    fn next_real(&mut self) -> Real {
        let draw = self.draws[self.position];
        self.position = (self.position + 1) % self.draws.len();
        draw
    }
}
