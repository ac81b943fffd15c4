//! Line segment used as the chord during simplification.

use super::{Point, Vec3};
use num_traits::Float;

/// A line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<F = f64> {
    pub start: Point<F>,
    pub end: Point<F>,
}

impl<F: Float> Segment<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point<F>, end: Point<F>) -> Self {
        Self { start, end }
    }

    /// Returns the displacement from start to end.
    #[inline]
    pub fn direction(self) -> Vec3<F> {
        self.end - self.start
    }

    /// Returns `true` if start and end are exactly the same point.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.direction().is_zero()
    }

    /// Scalar projection of `p` onto the segment's supporting line.
    ///
    /// `t = 0` at `start`, `t = 1` at `end`. The value is not clamped.
    /// Returns `None` for a degenerate segment.
    #[inline]
    pub fn projection_parameter(self, p: Point<F>) -> Option<F> {
        let d = self.direction();
        if d.is_zero() {
            return None;
        }
        Some((p - self.start).dot(d) / d.magnitude_squared())
    }

    /// The point on the segment's line that `p` is measured against.
    ///
    /// Projections past `end` (`t > 1`) snap to `end`. Projections before
    /// `start` (`t < 0`) are *not* clamped and stay on the extended line.
    /// A degenerate segment measures against `start`.
    pub fn reference_point(self, p: Point<F>) -> Point<F> {
        match self.projection_parameter(p) {
            None => self.start,
            Some(t) if t > F::one() => self.end,
            Some(t) => self.start + self.direction() * t,
        }
    }

    /// Squared distance from `p` to [`reference_point`](Self::reference_point).
    #[inline]
    pub fn square_distance_to_point(self, p: Point<F>) -> F {
        p.distance_squared(self.reference_point(p))
    }
}

impl<F: Float> From<(Point<F>, Point<F>)> for Segment<F> {
    fn from((start, end): (Point<F>, Point<F>)) -> Self {
        Self::new(start, end)
    }
}
