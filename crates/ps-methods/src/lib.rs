//! # ps-methods
//!
//! Sampling methods for the discrete distributions in `ps-math`:
//! inverse-transform sampling through a cumulative array and two direct
//! Poisson generators that need no cumulative table.
//!
//! # Modules
//!
//! * [`sampling`] — the `IntegerSampler` capability, CDF inversion, and the
//!   Poisson generators

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Integer samplers: inverse transform and direct Poisson generators.
pub mod sampling;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use sampling::{
    invert_cdf, IntegerSampler, InverseTransformSampler, InversionPoissonSampler,
    KnuthPoissonSampler,
};
