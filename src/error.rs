//! Error types for polysimplify operations.

use thiserror::Error;

/// Errors raised by the validated configuration path.
///
/// The simplification algorithms themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// Tolerance is negative, infinite, or NaN.
    #[error("invalid tolerance {value}: must be finite and non-negative")]
    InvalidTolerance {
        /// The rejected tolerance, widened to `f64`.
        value: f64,
    },
}
