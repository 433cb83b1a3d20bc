//! Binomial coefficients cached via Pascal's recurrence.
//!
//! The triangle is built once, row by row, and is read-only afterwards, so a
//! shared reference can be handed to every component that needs binomial
//! densities.

use ps_core::{BigNatural, Size};

/// Default upper bound on the triangle's row index.
pub const MAX_ROW: Size = 30;

/// A cache of binomial coefficients C(k of n) for rows 0..=`max_row`.
///
/// Row `n` holds the `n + 1` coefficients of `(a + b)^n`.  Values are exact
/// integers: row 30 peaks at C(15 of 30) = 155_117_520, well inside `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PascalTriangle {
    rows: Vec<Vec<BigNatural>>,
}

impl PascalTriangle {
    /// Build the triangle up to the default bound of [`MAX_ROW`] rows.
    pub fn new() -> Self {
        Self::with_max_row(MAX_ROW)
    }

    /// Build the triangle up to a custom row index.
    pub fn with_max_row(max_row: Size) -> Self {
        let mut rows: Vec<Vec<BigNatural>> = Vec::with_capacity(max_row + 1);
        rows.push(vec![1]);
        for n in 1..=max_row {
            let previous = &rows[n - 1];
            let mut row = vec![0; n + 1];
            row[0] = 1;
            row[n] = 1;
            for k in 1..n {
                row[k] = previous[k - 1] + previous[k];
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// The highest row index held by the cache.
    pub fn max_row(&self) -> Size {
        self.rows.len() - 1
    }

    /// The binomial coefficient C(k of n): the number of ways to choose `k`
    /// items out of `n`.
    ///
    /// Lookups outside the cache (`k > n` or `n > max_row`) yield 0 rather
    /// than an error; boundary arithmetic in the binomial density relies on
    /// this.
    pub fn coefficient(&self, k: Size, n: Size) -> BigNatural {
        if k > n || n > self.max_row() {
            0
        } else {
            self.rows[n][k]
        }
    }

    /// A single row of coefficients, for presentation or density building.
    pub fn row(&self, n: Size) -> Option<&[BigNatural]> {
        self.rows.get(n).map(Vec::as_slice)
    }

    /// Iterate over all cached rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[BigNatural]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl Default for PascalTriangle {
    fn default() -> Self {
        Self::new()
    }
}
