//! # probastats
//!
//! Discrete distribution sampling and goodness-of-fit testing.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ps-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! probastats = "0.1"
//! ```
//!
//! ```rust
//! use probastats::math::combinatorics::PascalTriangle;
//! use probastats::math::distributions::{cumulative, BinomialDistribution};
//! use probastats::math::random_numbers::ScriptedUniformRng;
//! use probastats::methods::sampling::{IntegerSampler, InverseTransformSampler};
//!
//! let triangle = PascalTriangle::new();
//! assert_eq!(triangle.coefficient(3, 6), 20);
//!
//! let coin_pair = BinomialDistribution::new(2, 0.5, &triangle).unwrap();
//! let cdf = cumulative(&coin_pair.mass_function());
//! assert_eq!(cdf, vec![0.25, 0.75, 1.0]);
//!
//! let rng = ScriptedUniformRng::new(vec![0.5]).unwrap();
//! let mut sampler = InverseTransformSampler::new(&cdf, rng).unwrap();
//! assert_eq!(sampler.produce(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ps_core as core;

/// Combinatorics, distributions, random sources, and statistics.
pub use ps_math as math;

/// Sampling methods: inverse transform and direct Poisson generators.
pub use ps_methods as methods;
