//! Simplification settings.

use crate::error::SimplifyError;
use num_traits::Float;

/// How much work to spend on a simplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    /// Radial-distance pre-filter followed by Douglas-Peucker.
    ///
    /// Loses slightly more detail than [`Quality::High`] but is much faster
    /// on dense input.
    #[default]
    Fast,
    /// Douglas-Peucker only.
    High,
}

impl From<bool> for Quality {
    fn from(high_quality: bool) -> Self {
        if high_quality {
            Quality::High
        } else {
            Quality::Fast
        }
    }
}

/// Tolerance and quality for [`simplify_with`](super::simplify_with).
///
/// # Example
///
/// ```
/// use polysimplify::{simplify_with, Point, Quality, SimplifyOptions};
///
/// let options = SimplifyOptions::checked(0.5)?.with_quality(Quality::High);
/// let points = vec![
///     Point::new_2d(0.0, 0.0),
///     Point::new_2d(1.0, 0.1),
///     Point::new_2d(2.0, 0.0),
/// ];
/// assert_eq!(simplify_with(&points, &options).len(), 2);
/// # Ok::<(), polysimplify::SimplifyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyOptions<F = f64> {
    /// Maximum allowed linear deviation.
    pub tolerance: F,
    pub quality: Quality,
}

impl<F: Float> SimplifyOptions<F> {
    /// Creates options with the given tolerance and [`Quality::Fast`].
    ///
    /// The tolerance is not validated; see [`checked`](Self::checked).
    #[inline]
    pub fn new(tolerance: F) -> Self {
        Self {
            tolerance,
            quality: Quality::Fast,
        }
    }

    /// Creates options, rejecting a negative, infinite, or NaN tolerance.
    pub fn checked(tolerance: F) -> Result<Self, SimplifyError> {
        if !tolerance.is_finite() || tolerance < F::zero() {
            return Err(SimplifyError::InvalidTolerance {
                value: tolerance.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self::new(tolerance))
    }

    /// Returns a copy with the given quality.
    #[inline]
    pub fn with_quality(self, quality: Quality) -> Self {
        Self { quality, ..self }
    }

    #[inline]
    pub fn high_quality(&self) -> bool {
        self.quality == Quality::High
    }

    /// The tolerance squared, which is what the algorithms compare against.
    #[inline]
    pub fn squared_tolerance(&self) -> F {
        self.tolerance * self.tolerance
    }
}

impl<F: Float> Default for SimplifyOptions<F> {
    fn default() -> Self {
        Self::new(F::one())
    }
}
