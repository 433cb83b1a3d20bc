//! # ps-math
//!
//! Mathematical core of probastats-rs: the binomial-coefficient cache,
//! probability-mass and cumulative arrays for the discrete distributions,
//! uniform random sources, and the sample statistics / goodness-of-fit
//! layer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Binomial coefficients via Pascal's recurrence.
pub mod combinatorics;

/// Floating-point comparison utilities.
pub mod comparison;

/// Discrete probability distributions.
pub mod distributions;

/// Uniform random sources.
pub mod random_numbers;

/// Sample statistics and goodness-of-fit testing.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use combinatorics::PascalTriangle;
pub use comparison::{close, close_enough, max_abs_difference};
pub use distributions::{
    cumulative, BernoulliDistribution, BinomialDistribution, DiscreteUniformDistribution,
    PoissonDistribution,
};
pub use random_numbers::{MersenneTwisterUniformRng, UniformRng};
pub use statistics::{discrete_ks_test, KsTestResult, SampleStatistics};
