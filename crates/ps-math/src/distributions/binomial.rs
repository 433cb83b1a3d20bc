//! Binomial distribution built on the Pascal-triangle coefficient cache.

use ps_core::{ensure, BigNatural, Natural, Probability, Real, Result, Size};

use crate::combinatorics::PascalTriangle;

/// Binomial distribution with `n` trials and success probability `p`.
///
/// The coefficient row is copied out of the supplied [`PascalTriangle`] at
/// construction, so the distribution stays self-contained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialDistribution {
    n: Natural,
    p: Probability,
    coefficients: Vec<BigNatural>,
}

impl BinomialDistribution {
    /// Create a binomial distribution with `n` trials and probability `p`.
    ///
    /// `n` is clamped to the triangle's highest cached row (30 for
    /// [`PascalTriangle::new`]); `p` outside `[0, 1]` fails with
    /// `InvalidArgument`.
    pub fn new(n: Natural, p: Probability, triangle: &PascalTriangle) -> Result<Self> {
        ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
        let n = (n as Size).min(triangle.max_row());
        let coefficients = triangle
            .row(n)
            .expect("row index clamped to the triangle bound")
            .to_vec();
        Ok(Self {
            n: n as Natural,
            p,
            coefficients,
        })
    }

    /// Number of trials (after clamping).
    pub fn n(&self) -> Natural {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> Probability {
        self.p
    }

    /// Probability mass function P(X = k) = C(k of n) · p^k · (1-p)^(n-k).
    pub fn pmf(&self, k: Natural) -> Real {
        if k > self.n {
            return 0.0;
        }
        self.coefficients[k as Size] as Real
            * self.p.powi(k as i32)
            * (1.0 - self.p).powi((self.n - k) as i32)
    }

    /// Mean of the distribution (= np).
    pub fn mean(&self) -> Real {
        self.n as Real * self.p
    }

    /// Variance of the distribution (= np(1-p)).
    pub fn variance(&self) -> Real {
        self.n as Real * self.p * (1.0 - self.p)
    }

    /// The probability-mass array over the support `0..=n`.
    pub fn mass_function(&self) -> Vec<Real> {
        (0..=self.n).map(|k| self.pmf(k)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{close, max_abs_difference};
    use statrs::distribution::{Binomial, Discrete};

    #[test]
    fn rejects_out_of_range_p() {
        let triangle = PascalTriangle::new();
        assert!(BinomialDistribution::new(10, -0.5, &triangle).is_err());
        assert!(BinomialDistribution::new(10, 1.5, &triangle).is_err());
    }

    #[test]
    fn two_fair_trials() {
        let triangle = PascalTriangle::new();
        let d = BinomialDistribution::new(2, 0.5, &triangle).unwrap();
        let mass = d.mass_function();
        assert!(max_abs_difference(&mass, &[0.25, 0.5, 0.25]) < 1e-9);
    }

    #[test]
    fn n_clamps_to_triangle_bound() {
        let triangle = PascalTriangle::new();
        let d = BinomialDistribution::new(100, 0.3, &triangle).unwrap();
        assert_eq!(d.n(), 30);
        assert_eq!(d.mass_function().len(), 31);
    }

    #[test]
    fn degenerate_p_values() {
        let triangle = PascalTriangle::new();
        let heads = BinomialDistribution::new(5, 1.0, &triangle).unwrap();
        assert_eq!(heads.pmf(5), 1.0);
        assert_eq!(heads.pmf(0), 0.0);
        let tails = BinomialDistribution::new(5, 0.0, &triangle).unwrap();
        assert_eq!(tails.pmf(0), 1.0);
        assert_eq!(tails.pmf(3), 0.0);
    }

    #[test]
    fn mass_sums_to_one() {
        let triangle = PascalTriangle::new();
        for (n, p) in [(1, 0.5), (10, 0.7), (30, 0.01), (25, 0.99)] {
            let d = BinomialDistribution::new(n, p, &triangle).unwrap();
            let total: Real = d.mass_function().iter().sum();
            assert!(close(total, 1.0, 1e-9), "sum for n={n} p={p} is {total}");
        }
    }

    #[test]
    fn agrees_with_statrs() {
        let triangle = PascalTriangle::new();
        let d = BinomialDistribution::new(20, 0.3, &triangle).unwrap();
        let oracle = Binomial::new(0.3, 20).unwrap();
        for k in 0..=20u32 {
            assert!(
                close(d.pmf(k), oracle.pmf(k as u64), 1e-12),
                "pmf({k}) = {}, statrs {}",
                d.pmf(k),
                oracle.pmf(k as u64)
            );
        }
    }
}
