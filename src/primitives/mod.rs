//! Floating-point geometric primitives.

mod point;
mod segment;
mod vec3;

pub use point::Point;
pub use segment::Segment;
pub use vec3::Vec3;
