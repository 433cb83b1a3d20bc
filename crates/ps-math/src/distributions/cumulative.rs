//! Cumulative arrays from probability-mass arrays.

use ps_core::Real;

/// Prefix-sum a probability-mass array into its cumulative array.
///
/// Index alignment is preserved exactly: `cdf[i]` = P(X ≤ i).  The result is
/// monotonically non-decreasing and its last entry approximates 1 as closely
/// as the input mass does.  An empty input yields an empty output.
pub fn cumulative(pdf: &[Real]) -> Vec<Real> {
    let mut cdf = Vec::with_capacity(pdf.len());
    let mut running = 0.0;
    for &mass in pdf {
        running += mass;
        cdf.push(running);
    }
    cdf
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::combinatorics::PascalTriangle;
    use crate::distributions::{BernoulliDistribution, BinomialDistribution};

    #[test]
    fn empty_stays_empty() {
        assert!(cumulative(&[]).is_empty());
    }

    #[test]
    fn bernoulli_cdf() {
        let pdf = BernoulliDistribution::new(0.25).unwrap().mass_function();
        assert_eq!(cumulative(&pdf), vec![0.75, 1.0]);
    }

    #[test]
    fn binomial_cdf_is_monotone_and_ends_at_one() {
        let triangle = PascalTriangle::new();
        for (n, p) in [(5, 0.5), (10, 0.7), (30, 0.2)] {
            let pdf = BinomialDistribution::new(n, p, &triangle)
                .unwrap()
                .mass_function();
            let cdf = cumulative(&pdf);
            assert_eq!(cdf.len(), pdf.len());
            let mut previous = 0.0;
            for (i, &c) in cdf.iter().enumerate() {
                assert!(c >= previous, "not monotone at {i} for n={n} p={p}");
                previous = c;
            }
            let last = *cdf.last().unwrap();
            assert_abs_diff_eq!(last, 1.0, epsilon = 1e-6);
        }
    }
}
