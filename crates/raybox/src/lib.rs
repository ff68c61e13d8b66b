#![warn(missing_docs)]

//! Slab-method ray/AABB intersection.
//!
//! This crate answers one question very fast: does a ray, or a bounded
//! segment of it, pass through an axis-aligned box, and at which
//! parameters does it enter and leave? It is meant to sit inside
//! acceleration and mesh-classification code that calls it millions of
//! times, so the test itself is a pure function over `Copy` values.
//!
//! # Architecture
//!
//! - [`intersect`] - the slab test on raw ray components and flat bounds
//! - [`Ray`] - ray with its precomputed inverse direction and signs
//! - [`RayBoxOptions`] - infinite vs. segment mode and end tolerance
//! - [`RayBoxIntersection`] - hit flag plus entry/exit parameters
//! - [`filter`] - index filtering over a slice of boxes
//!
//! # Example
//!
//! ```
//! use raybox::{Ray, RayBoxOptions};
//! use raybox_math::{Aabb3, Point3, Vec3};
//!
//! let aabb = Aabb3::from_bounds([0.0, 0.0, 0.0, 2.0, 2.0, 2.0]);
//! let ray = Ray::new(Point3::new(-1.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
//!
//! let hit = ray.intersect_aabb(&aabb, &RayBoxOptions::default());
//! assert_eq!(hit.hit(), Some((1.0, 3.0)));
//!
//! // As a segment of length 1 the ray stops exactly on the x = 0 face.
//! let seg = RayBoxOptions::segment();
//! assert!(ray.intersect_aabb(&aabb, &seg).is_intersection);
//! assert!(!ray.intersect_aabb(&aabb, &seg.with_ray_ends(false)).is_intersection);
//! ```

pub mod error;
pub mod filter;
mod intersect;
mod options;
mod ray;

pub use error::{RayBoxError, Result};
pub use filter::{candidates, par_candidates};
pub use intersect::{intersect, RayBoxIntersection};
pub use options::{RayBoxOptions, DEFAULT_EPS_RAY_ENDS};
pub use ray::Ray;
