//! Point type shared by 2D and 3D polylines.

use super::Vec3;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A point with x, y, and z coordinates.
///
/// A 2D point is simply a `Point` whose `z` is zero; see [`Point::new_2d`].
/// Equality is exact component-wise comparison with no epsilon.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<F = f64> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point<F> {
    /// Creates a new 3D point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a 2D point, i.e. a point with `z = 0`.
    #[inline]
    pub fn new_2d(x: F, y: F) -> Self {
        Self { x, y, z: F::zero() }
    }

    /// Creates a point at the origin (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    #[inline]
    pub fn x(&self) -> F {
        self.x
    }

    #[inline]
    pub fn y(&self) -> F {
        self.y
    }

    #[inline]
    pub fn z(&self) -> F {
        self.z
    }

    /// Returns the coordinates as an `(x, y, z)` tuple.
    #[inline]
    pub fn coords(&self) -> (F, F, F) {
        (self.x, self.y, self.z)
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (other - self).magnitude_squared()
    }
}

// Point - Point = Vec3
impl<F: Float> Sub for Point<F> {
    type Output = Vec3<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec3<F> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

// Point + Vec3 = Point
impl<F: Float> Add<Vec3<F>> for Point<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec3<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }
}

impl<F: Float> Default for Point<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new_2d(x, y)
    }
}

impl<F: Float> From<(F, F, F)> for Point<F> {
    fn from((x, y, z): (F, F, F)) -> Self {
        Self::new(x, y, z)
    }
}
