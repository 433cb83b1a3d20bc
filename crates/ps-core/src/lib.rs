//! # ps-core
//!
//! Core types and error definitions for probastats-rs.
//!
//! This crate provides the building blocks shared across the workspace –
//! primitive type aliases and the error type with its `ensure!` / `fail!`
//! convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A probability in [0, 1].
pub type Probability = Real;

/// Non-negative integer type used for distribution parameters and outcomes.
pub type Natural = u32;

/// Large non-negative integer, wide enough for exact combinatorial counts.
pub type BigNatural = u64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
