#![warn(missing_docs)]

//! Math types for the raybox intersector.
//!
//! Thin wrappers around nalgebra providing the point and vector types
//! used by the ray/box predicate, plus the [`Aabb3`] box type.

mod aabb;

pub use aabb::{Aabb3, InvalidBounds};

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Component-wise reciprocal of a vector.
///
/// Zero components map to a signed infinity, matching IEEE division.
#[inline]
pub fn recip(v: &Vec3) -> Vec3 {
    Vec3::new(1.0 / v.x, 1.0 / v.y, 1.0 / v.z)
}
