//! Squared distance primitives.
//!
//! Every comparison in the simplifiers is made between squared magnitudes,
//! so no square root is taken anywhere on the hot path.

use crate::primitives::{Point, Segment};
use num_traits::Float;

/// Squared Euclidean distance between two points.
///
/// # Example
///
/// ```
/// use polysimplify::{square_distance, Point};
///
/// let a = Point::new_2d(0.0, 0.0);
/// let b = Point::new_2d(3.0, 4.0);
/// assert_eq!(square_distance(&a, &b), 25.0);
/// ```
#[inline]
pub fn square_distance<F: Float>(a: &Point<F>, b: &Point<F>) -> F {
    a.distance_squared(*b)
}

/// Squared distance from `point` to the segment `[start, end]`.
///
/// The projection parameter is clamped on the high side only: a point
/// projecting beyond `end` is measured against `end`, but a point projecting
/// before `start` is measured against the extended line. Pivot selection in
/// Douglas-Peucker depends on this exact behavior.
///
/// If `start == end` this is the squared distance to `start`.
///
/// # Example
///
/// ```
/// use polysimplify::{segment_square_distance, Point};
///
/// let start = Point::new_2d(0.0, 0.0);
/// let end = Point::new_2d(10.0, 0.0);
///
/// // Beyond the end: measured against `end`.
/// assert_eq!(segment_square_distance(&Point::new_2d(13.0, 4.0), &start, &end), 25.0);
/// // Before the start: measured against the extended line.
/// assert_eq!(segment_square_distance(&Point::new_2d(-3.0, 4.0), &start, &end), 16.0);
/// ```
#[inline]
pub fn segment_square_distance<F: Float>(point: &Point<F>, start: &Point<F>, end: &Point<F>) -> F {
    Segment::new(*start, *end).square_distance_to_point(*point)
}
