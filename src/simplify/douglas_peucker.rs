//! Douglas-Peucker polyline simplification.
//!
//! Splits the polyline at the point farthest from the chord joining the
//! range's endpoints, and keeps splitting until every remaining interior
//! point lies within tolerance of its local chord.
//!
//! Ranges are tracked as index pairs into the input slice and processed from
//! an explicit work stack, so adversarial inputs cannot exhaust the call
//! stack.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::distance::segment_square_distance;
use crate::primitives::Point;
use num_traits::Float;

/// Simplifies a polyline using the Douglas-Peucker algorithm.
///
/// Returns a new vector containing only the points that remain after
/// simplification. The first and last points are always preserved.
///
/// # Arguments
///
/// * `points` - The input polyline as a slice of points
/// * `squared_tolerance` - Square of the maximum allowed deviation. Interior
///   points whose squared distance to their chord is at most this value are
///   removed.
///
/// # Returns
///
/// A new vector with the simplified polyline. Inputs with 0 or 1 points
/// are returned unchanged.
///
/// # Example
///
/// ```
/// use polysimplify::{simplify_douglas_peucker, Point};
///
/// let points = vec![
///     Point::new_2d(0.0, 0.0),
///     Point::new_2d(1.0, 0.1), // Close to the chord, removed
///     Point::new_2d(2.0, 0.0),
///     Point::new_2d(3.0, 2.0), // Far from the chord, kept
///     Point::new_2d(4.0, 0.0),
/// ];
///
/// let simplified = simplify_douglas_peucker(&points, 0.5 * 0.5);
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn simplify_douglas_peucker<F: Float>(points: &[Point<F>], squared_tolerance: F) -> Vec<Point<F>> {
    douglas_peucker_indices(points, squared_tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// The indices are in increasing order. If the input has at least 2 points,
/// index 0 and the last index are always present.
pub fn douglas_peucker_indices<F: Float>(points: &[Point<F>], squared_tolerance: F) -> Vec<usize> {
    let n = points.len();
    if n < 2 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut ranges = vec![(0, n - 1)];
    while let Some((start, end)) = ranges.pop() {
        if let Some((pivot, distance)) = find_pivot(points, start, end) {
            if distance > squared_tolerance {
                keep[pivot] = true;
                ranges.push((pivot, end));
                ranges.push((start, pivot));
            }
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect()
}

/// Finds the interior point of `points[start..=end]` farthest from the chord.
///
/// Points equal in value to either endpoint are not candidates. On ties the
/// later index wins. Returns `None` when no candidate exists.
fn find_pivot<F: Float>(points: &[Point<F>], start: usize, end: usize) -> Option<(usize, F)> {
    let first = &points[start];
    let last = &points[end];

    let mut best_distance = F::zero();
    let mut pivot = None;

    for (i, point) in points.iter().enumerate().take(end).skip(start + 1) {
        if point == first || point == last {
            continue;
        }

        let distance = segment_square_distance(point, first, last);
        if distance >= best_distance {
            best_distance = distance;
            pivot = Some(i);
        }
    }

    pivot.map(|i| (i, best_distance))
}
