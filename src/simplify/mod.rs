//! Polyline simplification.
//!
//! [`simplify`] is the usual entry point. It squares the tolerance once and
//! either runs Douglas-Peucker directly (high quality) or runs the cheap
//! radial-distance filter first and Douglas-Peucker on what survives.

mod douglas_peucker;
mod options;
mod radial;

pub use douglas_peucker::{douglas_peucker_indices, simplify_douglas_peucker};
pub use options::{Quality, SimplifyOptions};
pub use radial::{radial_distance_indices, simplify_radial_distance};

use crate::primitives::Point;
use num_traits::Float;

/// Simplifies a polyline to within `tolerance`.
///
/// Inputs with 2 or fewer points are returned unchanged. The first and last
/// points are always kept and the output never has more points than the
/// input.
///
/// A negative tolerance is not rejected; it is squared like any other value.
/// Use [`SimplifyOptions::checked`] to validate untrusted input.
///
/// # Arguments
///
/// * `points` - The input polyline
/// * `tolerance` - Maximum allowed linear deviation
/// * `high_quality` - Skip the radial pre-filter and run Douglas-Peucker only
///
/// # Example
///
/// ```
/// use polysimplify::{simplify, Point};
///
/// let points: Vec<Point> = [(0.0, 0.0), (1.0, 0.1), (2.0, -0.1), (3.0, 5.0), (4.0, 6.0)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
///
/// let simplified = simplify(&points, 1.0, false);
/// assert_eq!(simplified.first(), points.first());
/// assert_eq!(simplified.last(), points.last());
/// assert!(simplified.len() < points.len());
/// ```
pub fn simplify<F: Float>(points: &[Point<F>], tolerance: F, high_quality: bool) -> Vec<Point<F>> {
    simplify_indices(points, tolerance, high_quality)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Like [`simplify`], but returns indices into `points`.
pub fn simplify_indices<F: Float>(points: &[Point<F>], tolerance: F, high_quality: bool) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let squared_tolerance = tolerance * tolerance;
    let quality = Quality::from(high_quality);

    let indices = match quality {
        Quality::High => douglas_peucker_indices(points, squared_tolerance),
        Quality::Fast => {
            let radial = radial_distance_indices(points, squared_tolerance);
            let filtered: Vec<Point<F>> = radial.iter().map(|&i| points[i]).collect();
            douglas_peucker_indices(&filtered, squared_tolerance)
                .into_iter()
                .map(|i| radial[i])
                .collect()
        }
    };

    log::trace!(
        "simplified {} -> {} points (tolerance {}, {:?})",
        n,
        indices.len(),
        tolerance.to_f64().unwrap_or(f64::NAN),
        quality
    );

    indices
}

/// Runs [`simplify`] with the settings in `options`.
#[inline]
pub fn simplify_with<F: Float>(points: &[Point<F>], options: &SimplifyOptions<F>) -> Vec<Point<F>> {
    simplify(points, options.tolerance, options.high_quality())
}
