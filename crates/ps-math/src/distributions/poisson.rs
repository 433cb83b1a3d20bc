//! Poisson distribution.

use ps_core::{ensure, Natural, Real, Result, Size};

/// Poisson distribution with mean `lambda`.
///
/// Mass values come from the stable recurrence
/// `term_0 = e^{-λ}`, `term_k = term_{k-1} · λ/k`, which avoids the
/// overflow-prone `λ^k / k!` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonDistribution {
    lambda: Real,
}

impl PoissonDistribution {
    /// Create a Poisson distribution with the given mean `lambda`.
    ///
    /// Fails with `InvalidArgument` unless `lambda > 0`.
    pub fn new(lambda: Real) -> Result<Self> {
        ensure!(lambda > 0.0, "lambda must be positive, got {lambda}");
        Ok(Self { lambda })
    }

    /// Mean parameter λ.
    pub fn lambda(&self) -> Real {
        self.lambda
    }

    /// Probability mass function P(X = k) = e^{-λ} λ^k / k!.
    pub fn pmf(&self, k: Natural) -> Real {
        let mut term = (-self.lambda).exp();
        for i in 1..=k {
            term *= self.lambda / i as Real;
        }
        term
    }

    /// Mean of the distribution (= λ).
    pub fn mean(&self) -> Real {
        self.lambda
    }

    /// Variance of the distribution (= λ).
    pub fn variance(&self) -> Real {
        self.lambda
    }

    /// The truncated probability-mass array, `10 · (⌊λ⌋ + 1)` entries long.
    ///
    /// The support of the Poisson distribution is unbounded; this truncation
    /// leaves a numerically negligible tail for typical λ.  The array is
    /// deliberately not renormalized, so its sum falls slightly short of 1.
    pub fn mass_function(&self) -> Vec<Real> {
        let len = 10 * (self.lambda.floor() as Size + 1);
        let mut mass = Vec::with_capacity(len);
        let mut term = (-self.lambda).exp();
        mass.push(term);
        for k in 1..len {
            term *= self.lambda / k as Real;
            mass.push(term);
        }
        mass
    }
}
