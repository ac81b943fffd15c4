//! polysimplify - Polyline simplification
//!
//! Reduces the number of vertices in a 2D or 3D polyline while keeping its
//! shape within a distance tolerance. Two reductions are provided: a
//! single-pass radial-distance filter and Douglas-Peucker refinement.
//! [`simplify`] composes them.
//!
//! All comparisons use squared distances. A 2D polyline is a polyline whose
//! points have `z = 0`.
//!
//! ```
//! use polysimplify::{simplify, Point};
//!
//! let track = vec![
//!     Point::new_2d(0.0, 0.0),
//!     Point::new_2d(1.0, 0.05),
//!     Point::new_2d(2.0, 0.0),
//!     Point::new_2d(3.0, 4.0),
//! ];
//! let simplified = simplify(&track, 0.5, true);
//! assert_eq!(simplified, vec![track[0], track[2], track[3]]);
//! ```

pub mod distance;
pub mod error;
pub mod primitives;
pub mod simplify;

pub use distance::{segment_square_distance, square_distance};
pub use error::SimplifyError;
pub use primitives::{Point, Segment, Vec3};
pub use simplify::{
    douglas_peucker_indices, radial_distance_indices, simplify, simplify_douglas_peucker,
    simplify_indices, simplify_radial_distance, simplify_with, Quality, SimplifyOptions,
};
