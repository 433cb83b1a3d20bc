//! Discrete uniform distribution.

use ps_core::{Natural, Real};

/// Discrete uniform distribution over the support `0..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniformDistribution {
    n: Natural,
}

impl DiscreteUniformDistribution {
    /// Create a discrete uniform distribution over `0..=n`.
    pub fn new(n: Natural) -> Self {
        Self { n }
    }

    /// Upper bound of the support.
    pub fn n(&self) -> Natural {
        self.n
    }

    /// Probability mass function P(X = k) = 1/(n+1) on the support.
    pub fn pmf(&self, k: Natural) -> Real {
        if k <= self.n {
            1.0 / (self.n as Real + 1.0)
        } else {
            0.0
        }
    }

    /// Mean of the distribution (= n/2).
    pub fn mean(&self) -> Real {
        self.n as Real / 2.0
    }

    /// Variance of the distribution (= ((n+1)² − 1) / 12).
    pub fn variance(&self) -> Real {
        let m = self.n as Real + 1.0;
        (m * m - 1.0) / 12.0
    }

    /// The probability-mass array: `n + 1` equal entries.
    pub fn mass_function(&self) -> Vec<Real> {
        vec![1.0 / (self.n as Real + 1.0); self.n as usize + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::close;
    use proptest::prelude::*;

    #[test]
    fn degenerate_support() {
        let d = DiscreteUniformDistribution::new(0);
        assert_eq!(d.mass_function(), vec![1.0]);
        assert_eq!(d.mean(), 0.0);
        assert_eq!(d.variance(), 0.0);
    }

    #[test]
    fn die_probabilities() {
        let d = DiscreteUniformDistribution::new(5);
        assert_eq!(d.mass_function().len(), 6);
        assert!(close(d.pmf(3), 1.0 / 6.0, 1e-15));
        assert_eq!(d.pmf(6), 0.0);
        assert!(close(d.mean(), 2.5, 1e-15));
        assert!(close(d.variance(), 35.0 / 12.0, 1e-12));
    }

    proptest! {
        #[test]
        fn mass_sums_to_one(n in 0u32..200) {
            let d = DiscreteUniformDistribution::new(n);
            let mass = d.mass_function();
            prop_assert_eq!(mass.len(), n as usize + 1);
            let total: Real = mass.iter().sum();
            prop_assert!(close(total, 1.0, 1e-9), "sum for n={} is {}", n, total);
        }
    }
}
