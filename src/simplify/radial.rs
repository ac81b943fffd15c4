//! Radial distance simplification.
//!
//! A fast O(n) pre-filter that drops points lying within a fixed radius of
//! the last kept point. On dense input it discards most near-duplicates
//! before the more expensive Douglas-Peucker pass runs.

use crate::distance::square_distance;
use crate::primitives::Point;
use num_traits::Float;

/// Simplifies a polyline by removing points too close to the last kept point.
///
/// Walks the points in order, keeping a point only when its squared distance
/// to the most recently kept point is strictly greater than
/// `squared_tolerance`. The first point is always kept, and the last input
/// point is appended even when it fell within tolerance.
///
/// # Arguments
///
/// * `points` - The input polyline
/// * `squared_tolerance` - Square of the minimum spacing between kept points
///
/// # Returns
///
/// A new vector containing the simplified polyline. Inputs with 0 or 1
/// points are returned unchanged.
///
/// # Example
///
/// ```
/// use polysimplify::{simplify_radial_distance, Point};
///
/// let points = vec![
///     Point::new_2d(0.0, 0.0),
///     Point::new_2d(0.1, 0.0),  // Too close, removed
///     Point::new_2d(0.2, 0.0),  // Too close, removed
///     Point::new_2d(1.0, 0.0),  // Far enough, kept
///     Point::new_2d(1.05, 0.0), // Too close, removed
///     Point::new_2d(2.0, 0.0),  // Far enough, kept
/// ];
///
/// let simplified = simplify_radial_distance(&points, 0.5 * 0.5);
/// assert_eq!(simplified.len(), 3);
/// ```
pub fn simplify_radial_distance<F: Float>(points: &[Point<F>], squared_tolerance: F) -> Vec<Point<F>> {
    radial_distance_indices(points, squared_tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Returns indices of points to keep after radial simplification.
///
/// Useful when per-point attributes (timestamps, elevations) have to follow
/// the simplified geometry.
///
/// The final point is appended by position: it is added whenever the last
/// kept index is not the last input index, even if the two points are equal
/// in value.
pub fn radial_distance_indices<F: Float>(points: &[Point<F>], squared_tolerance: F) -> Vec<usize> {
    let n = points.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let mut indices = Vec::with_capacity(n / 2 + 1);

    // Always keep first point
    indices.push(0);
    let mut last_kept = 0;

    for (i, point) in points.iter().enumerate().skip(1) {
        if square_distance(point, &points[last_kept]) > squared_tolerance {
            indices.push(i);
            last_kept = i;
        }
    }

    if last_kept != n - 1 {
        indices.push(n - 1);
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_basic() {
        let points = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(0.1, 0.0),
            Point::new_2d(0.2, 0.0),
            Point::new_2d(1.0, 0.0),
            Point::new_2d(1.05, 0.0),
            Point::new_2d(2.0, 0.0),
        ];

        let simplified = simplify_radial_distance(&points, 0.25);

        assert_eq!(simplified, vec![points[0], points[3], points[5]]);
    }

    #[test]
    fn test_radial_empty_and_single() {
        let empty: Vec<Point<f64>> = vec![];
        assert!(simplify_radial_distance(&empty, 1.0).is_empty());

        let single = vec![Point::new_2d(4.0, 2.0)];
        assert_eq!(simplify_radial_distance(&single, 1.0), single);
    }

    #[test]
    fn test_radial_two_identical_points() {
        // The second point is never retained by distance, but it is the last
        // input element and is appended by position.
        let points = vec![Point::new_2d(1.0, 1.0), Point::new_2d(1.0, 1.0)];
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 1]);
        assert_eq!(simplify_radial_distance(&points, 1.0), points);
    }

    #[test]
    fn test_radial_last_equal_in_value_to_kept_point() {
        // The last point equals the kept point at index 2 by value, but is a
        // different element, so it is still appended.
        let points = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(0.1, 0.0),
            Point::new_2d(5.0, 0.0),
            Point::new_2d(5.0, 0.0),
        ];
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 2, 3]);
    }

    #[test]
    fn test_radial_keeps_last_point_when_within_tolerance() {
        let points = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(0.01, 0.0),
            Point::new_2d(0.02, 0.0),
        ];
        let simplified = simplify_radial_distance(&points, 1.0);
        assert_eq!(simplified, vec![points[0], points[2]]);
    }

    #[test]
    fn test_radial_does_not_duplicate_kept_last_point() {
        let points = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(2.0, 0.0),
            Point::new_2d(4.0, 0.0),
        ];
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 1, 2]);
    }

    #[test]
    fn test_radial_is_strictly_greater() {
        // Distance exactly equal to the tolerance is not enough to keep a point.
        let points = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(1.0, 0.0),
            Point::new_2d(2.0, 0.0),
            Point::new_2d(2.5, 0.0),
        ];
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 2, 3]);
    }

    #[test]
    fn test_radial_cluster_collapses_into_first() {
        let points = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(0.3, 0.2),
            Point::new_2d(-0.2, 0.4),
            Point::new_2d(0.1, -0.45),
            Point::new_2d(0.4, 0.1),
            Point::new_2d(10.0, 10.0),
        ];
        let simplified = simplify_radial_distance(&points, 1.0);
        assert_eq!(simplified, vec![points[0], points[5]]);
    }

    #[test]
    fn test_radial_measures_from_last_kept_point() {
        let points = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(0.7, 0.0),
            Point::new_2d(1.4, 0.0), // 1.4 from the first point, kept
            Point::new_2d(2.1, 0.0), // 0.7 from the kept point, dropped
            Point::new_2d(2.8, 0.0),
        ];
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 2, 4]);
    }

    #[test]
    fn test_radial_3d() {
        let points = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.5),
            Point::new(0.0, 0.0, 3.0),
        ];
        assert_eq!(radial_distance_indices(&points, 1.0), vec![0, 2]);
    }

    #[test]
    fn test_radial_f32() {
        let points: Vec<Point<f32>> = vec![
            Point::new_2d(0.0, 0.0),
            Point::new_2d(0.1, 0.0),
            Point::new_2d(1.0, 0.0),
        ];
        assert_eq!(simplify_radial_distance(&points, 0.25).len(), 2);
    }
}
