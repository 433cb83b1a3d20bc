//! Discrete Kolmogorov–Smirnov goodness-of-fit test.
//!
//! Compares an empirical sample against a theoretical cumulative array over
//! the same support and accepts or rejects at significance level 0.05.  The
//! critical threshold uses the asymptotic two-sided constant; no
//! small-sample or discreteness correction is applied.

use ps_core::{ensure, Real, Result, Size};

use crate::comparison::max_abs_difference;

/// Asymptotic two-sided Kolmogorov–Smirnov critical coefficient at
/// significance level 0.05.
pub const CRITICAL_COEFFICIENT: Real = 1.36;

/// Outcome of a discrete Kolmogorov–Smirnov test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsTestResult {
    /// Maximum absolute deviation between empirical and theoretical CDFs.
    pub statistic: Real,
    /// Critical threshold `1.36 / √n` for the sample size `n`.
    pub critical_value: Real,
    /// `true` when the sample is statistically indistinguishable from the
    /// theoretical distribution at the 0.05 level.
    pub accepted: bool,
}

/// The empirical cumulative array of an integer sample over the support
/// `0..support`: entry `i` is the fraction of sample values ≤ `i`.
///
/// Values at or beyond `support` contribute to no entry.  The sample must
/// not be empty.
pub fn empirical_cdf(sample: &[Size], support: Size) -> Vec<Real> {
    debug_assert!(!sample.is_empty());
    let n = sample.len() as Real;
    let mut counts = vec![0usize; support];
    for &value in sample {
        if value < support {
            counts[value] += 1;
        }
    }
    let mut cumulated = 0;
    counts
        .into_iter()
        .map(|c| {
            cumulated += c;
            cumulated as Real / n
        })
        .collect()
}

/// Run the discrete Kolmogorov–Smirnov test of `sample` against
/// `theoretical_cdf`.
///
/// The statistic is `D = max_i |theoretical[i] − empirical[i]|`; the sample
/// is accepted when `D < 1.36 / √n`.  An empty sample or CDF fails with
/// `InvalidArgument`.
pub fn discrete_ks_test(sample: &[Size], theoretical_cdf: &[Real]) -> Result<KsTestResult> {
    ensure!(!sample.is_empty(), "sample must not be empty");
    ensure!(!theoretical_cdf.is_empty(), "theoretical CDF must not be empty");

    let empirical = empirical_cdf(sample, theoretical_cdf.len());
    let statistic = max_abs_difference(theoretical_cdf, &empirical);
    let critical_value = CRITICAL_COEFFICIENT / (sample.len() as Real).sqrt();

    Ok(KsTestResult {
        statistic,
        critical_value,
        accepted: statistic < critical_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::close;

    #[test]
    fn empirical_cdf_counts_at_or_below() {
        // sample: two 0s, one 1, one 3 (beyond support of length 3)
        let cdf = empirical_cdf(&[0, 0, 1, 3], 3);
        assert_eq!(cdf.len(), 3);
        assert!(close(cdf[0], 0.5, 1e-15));
        assert!(close(cdf[1], 0.75, 1e-15));
        assert!(close(cdf[2], 0.75, 1e-15));
    }

    #[test]
    fn exact_match_is_accepted() {
        // Empirical frequencies equal the theoretical CDF exactly: D = 0.
        let theoretical = [0.25, 0.75, 1.0];
        let sample = [0, 1, 1, 2];
        let result = discrete_ks_test(&sample, &theoretical).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!(result.accepted);
        assert!(close(result.critical_value, 1.36 / 2.0, 1e-15));
    }

    #[test]
    fn gross_mismatch_is_rejected() {
        // 100 draws all equal to 0 against a fair coin.
        let theoretical = [0.5, 1.0];
        let sample = vec![0usize; 100];
        let result = discrete_ks_test(&sample, &theoretical).unwrap();
        assert!(close(result.statistic, 0.5, 1e-15));
        assert!(close(result.critical_value, 0.136, 1e-15));
        assert!(!result.accepted);
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(discrete_ks_test(&[], &[0.5, 1.0]).is_err());
        assert!(discrete_ks_test(&[0, 1], &[]).is_err());
    }
}
