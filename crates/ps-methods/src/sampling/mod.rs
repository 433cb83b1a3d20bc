//! Integer samplers.
//!
//! All three samplers implement the one [`IntegerSampler`] capability, so
//! the Kolmogorov–Smirnov tester validates any of them uniformly:
//!
//! * [`InverseTransformSampler`] — maps uniform draws through a cumulative
//!   array
//! * [`KnuthPoissonSampler`] — Knuth's product-of-uniforms Poisson generator
//! * [`InversionPoissonSampler`] — single-draw cumulative-term Poisson
//!   generator

use ps_core::{ensure, Real, Result, Size};
use ps_math::random_numbers::UniformRng;

// ─── IntegerSampler ───────────────────────────────────────────────────────────

/// A producer of i.i.d. non-negative integer outcomes.
pub trait IntegerSampler {
    /// Draw a single outcome.
    fn produce(&mut self) -> Size;

    /// Draw `size` independent outcomes.
    ///
    /// Fails with `InvalidArgument` when `size` is zero.
    fn sample(&mut self, size: Size) -> Result<Vec<Size>> {
        ensure!(size > 0, "sample size must be positive");
        Ok((0..size).map(|_| self.produce()).collect())
    }
}

// ─── Inverse-transform sampling ───────────────────────────────────────────────

/// Map one uniform draw through a cumulative array: the first index `i`
/// with `cdf[i] > p` (strictly greater, so boundary mass stays with the
/// lower outcome), or the last index when accumulated floating error leaves
/// the tail short of the draw.
///
/// `cdf` must not be empty.
pub fn invert_cdf(cdf: &[Real], p: Real) -> Size {
    debug_assert!(!cdf.is_empty());
    for (i, &c) in cdf.iter().enumerate() {
        if c > p {
            return i;
        }
    }
    cdf.len() - 1
}

/// Samples any discrete distribution given its cumulative array and a
/// uniform source.
pub struct InverseTransformSampler<'a, R: UniformRng> {
    cdf: &'a [Real],
    rng: R,
}

impl<'a, R: UniformRng> InverseTransformSampler<'a, R> {
    /// Create a sampler over `cdf`, which must not be empty.
    pub fn new(cdf: &'a [Real], rng: R) -> Result<Self> {
        ensure!(!cdf.is_empty(), "cumulative array must not be empty");
        Ok(Self { cdf, rng })
    }
}

impl<R: UniformRng> IntegerSampler for InverseTransformSampler<'_, R> {
    fn produce(&mut self) -> Size {
        invert_cdf(self.cdf, self.rng.next_real())
    }
}

// ─── Direct Poisson generators ────────────────────────────────────────────────

/// Knuth's product-of-uniforms Poisson generator.
///
/// Multiplies fresh uniform draws into a running product until it drops to
/// `e^{-λ}`; the number of draws, less one, is Poisson(λ)-distributed.  Each
/// outcome consumes an expected λ+1 draws.  For large λ (roughly above 700)
/// `e^{-λ}` underflows to zero and the produced values degrade; this is a
/// known limitation of the algorithm, not detected as an error.
pub struct KnuthPoissonSampler<R: UniformRng> {
    lambda: Real,
    exp_minus_lambda: Real,
    rng: R,
}

impl<R: UniformRng> KnuthPoissonSampler<R> {
    /// Create a generator for Poisson(λ).  Fails with `InvalidArgument`
    /// unless `lambda > 0`.
    pub fn new(lambda: Real, rng: R) -> Result<Self> {
        ensure!(lambda > 0.0, "lambda must be positive, got {lambda}");
        Ok(Self {
            lambda,
            exp_minus_lambda: (-lambda).exp(),
            rng,
        })
    }

    /// Mean parameter λ.
    pub fn lambda(&self) -> Real {
        self.lambda
    }
}

impl<R: UniformRng> IntegerSampler for KnuthPoissonSampler<R> {
    fn produce(&mut self) -> Size {
        let mut k: Size = 0;
        let mut product: Real = 1.0;
        // product starts above e^{-λ} for any λ > 0, so k ≥ 1 on exit
        while product > self.exp_minus_lambda {
            k += 1;
            product *= self.rng.next_real();
        }
        k - 1
    }
}

/// Single-draw Poisson generator by inversion of the cumulative series.
///
/// Draws one uniform and walks the term recurrence `term_k = term_{k-1}·λ/k`
/// until the accumulated mass reaches the draw.  Term by term this matches
/// the truncated Poisson mass/cumulative construction, so the two agree on
/// which outcome absorbs any given draw.
pub struct InversionPoissonSampler<R: UniformRng> {
    lambda: Real,
    rng: R,
}

impl<R: UniformRng> InversionPoissonSampler<R> {
    /// Create a generator for Poisson(λ).  Fails with `InvalidArgument`
    /// unless `lambda > 0`.
    pub fn new(lambda: Real, rng: R) -> Result<Self> {
        ensure!(lambda > 0.0, "lambda must be positive, got {lambda}");
        Ok(Self { lambda, rng })
    }

    /// Mean parameter λ.
    pub fn lambda(&self) -> Real {
        self.lambda
    }
}

impl<R: UniformRng> IntegerSampler for InversionPoissonSampler<R> {
    fn produce(&mut self) -> Size {
        let mut term = (-self.lambda).exp();
        let mut cumulated = term;
        let mut k: Size = 0;
        let u = self.rng.next_real();
        while u > cumulated {
            k += 1;
            term *= self.lambda / k as Real;
            cumulated += term;
        }
        k
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
