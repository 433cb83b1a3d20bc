//! Bernoulli distribution.

use ps_core::{ensure, Natural, Probability, Real, Result};

/// Bernoulli distribution: a single trial succeeding with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BernoulliDistribution {
    p: Probability,
}

impl BernoulliDistribution {
    /// Create a Bernoulli distribution with success probability `p`.
    ///
    /// Fails with `InvalidArgument` unless `p` is in `[0, 1]`.
    pub fn new(p: Probability) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
        Ok(Self { p })
    }

    /// Success probability.
    pub fn p(&self) -> Probability {
        self.p
    }

    /// Probability mass function P(X = k).
    pub fn pmf(&self, k: Natural) -> Real {
        match k {
            0 => 1.0 - self.p,
            1 => self.p,
            _ => 0.0,
        }
    }

    /// Mean of the distribution (= p).
    pub fn mean(&self) -> Real {
        self.p
    }

    /// Variance of the distribution (= p(1-p)).
    pub fn variance(&self) -> Real {
        self.p * (1.0 - self.p)
    }

    /// The probability-mass array `[1-p, p]`.
    pub fn mass_function(&self) -> Vec<Real> {
        vec![1.0 - self.p, self.p]
    }
}
