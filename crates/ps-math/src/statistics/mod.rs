//! Sample statistics and goodness-of-fit testing.

use ps_core::{Real, Size};

/// Discrete Kolmogorov–Smirnov goodness-of-fit test.
pub mod kolmogorov_smirnov;

pub use kolmogorov_smirnov::{discrete_ks_test, empirical_cdf, KsTestResult};

/// Incremental statistics accumulator over sampled outcomes.
///
/// Collects count, mean, variance, standard deviation, minimum, and maximum
/// in a single pass; handy for sanity-checking generator moments and for
/// rendering collaborators summarizing a sample.
#[derive(Debug, Clone)]
pub struct SampleStatistics {
    count: usize,
    sum: Real,
    sum_sq: Real,
    min: Real,
    max: Real,
}

impl SampleStatistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Accumulate every outcome of an integer sample.
    pub fn from_outcomes(sample: &[Size]) -> Self {
        let mut stats = Self::new();
        for &k in sample {
            stats.add(k as Real);
        }
        stats
    }

    /// Add a single observation.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    /// Number of observations.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sample mean.  Returns `None` if no observations have been added.
    pub fn mean(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as Real)
        }
    }

    /// Unbiased sample variance.  Returns `None` for fewer than 2
    /// observations.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        let mean = self.sum / n;
        Some((self.sum_sq / n - mean * mean) * n / (n - 1.0))
    }

    /// Sample standard deviation.  Returns `None` for fewer than 2
    /// observations.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(Real::sqrt)
    }

    /// Minimum observation.  Returns `None` if no observations have been
    /// added.
    pub fn minimum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Maximum observation.  Returns `None` if no observations have been
    /// added.
    pub fn maximum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }
}

impl Default for SampleStatistics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn moments_of_small_sample() {
        let stats = SampleStatistics::from_outcomes(&[1, 2, 3, 4, 5]);
        assert_eq!(stats.samples(), 5);
        assert_relative_eq!(stats.mean().unwrap(), 3.0, max_relative = 1e-12);
        assert_relative_eq!(stats.variance().unwrap(), 2.5, max_relative = 1e-12);
        assert_relative_eq!(stats.std_dev().unwrap(), 2.5f64.sqrt(), max_relative = 1e-12);
        assert_eq!(stats.minimum().unwrap(), 1.0);
        assert_eq!(stats.maximum().unwrap(), 5.0);
    }

    #[test]
    fn empty_sample_has_no_moments() {
        let stats = SampleStatistics::new();
        assert!(stats.mean().is_none());
        assert!(stats.variance().is_none());
        assert!(stats.minimum().is_none());
    }
}
