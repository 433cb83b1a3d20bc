//! Discrete probability distributions.
//!
//! Each distribution validates its parameters at construction and exposes
//! its probability-mass array through `mass_function()`; [`cumulative`]
//! turns any mass array into the matching cumulative array.

pub mod bernoulli;
pub mod binomial;
pub mod cumulative;
pub mod poisson;
pub mod uniform;

pub use bernoulli::BernoulliDistribution;
pub use binomial::BinomialDistribution;
pub use cumulative::cumulative;
pub use poisson::PoissonDistribution;
pub use uniform::DiscreteUniformDistribution;
