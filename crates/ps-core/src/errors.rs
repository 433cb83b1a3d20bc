//! Error types for probastats-rs.
//!
//! The whole workspace reports failures through a single `thiserror`-derived
//! enum.  Parameter validation goes through the `ensure!` macro, which
//! produces an [`Error::InvalidArgument`]; unconditional failures go through
//! `fail!`.

use thiserror::Error;

/// The top-level error type used throughout probastats-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A caller-supplied parameter violated its contract
    /// (e.g. a probability outside [0, 1] or an empty sample).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout probastats-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a caller-supplied condition.
///
/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ps_core::ensure;
/// fn probability(p: f64) -> ps_core::Result<f64> {
///     ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
///     Ok(p)
/// }
/// assert!(probability(0.5).is_ok());
/// assert!(probability(1.5).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Fail immediately with a runtime error.
///
/// # Example
/// ```
/// use ps_core::fail;
/// fn always_err() -> ps_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(x: f64) -> Result<f64> {
        crate::ensure!(x > 0.0, "x must be positive, got {x}");
        Ok(x)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(positive(2.0), Ok(2.0));
        assert_eq!(
            positive(-1.0),
            Err(Error::InvalidArgument("x must be positive, got -1".into()))
        );
    }

    #[test]
    fn display_messages() {
        let e = Error::InvalidArgument("lambda must be positive".into());
        assert_eq!(e.to_string(), "invalid argument: lambda must be positive");
    }
}
