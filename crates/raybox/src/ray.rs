//! Ray representation.

use raybox_math::{recip, Aabb3, Point3, Vec3};

use crate::error::{RayBoxError, Result};
use crate::intersect::{intersect, RayBoxIntersection};
use crate::options::RayBoxOptions;

/// A ray in 3D space: `origin + t * direction`.
///
/// The direction is kept as given, so `t = 1` is one full direction
/// length from the origin. That is the far end of a segment in
/// [`RayBoxOptions::segment`] mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray, not necessarily unit length.
    pub direction: Vec3,
    /// Precomputed reciprocal of direction components for fast AABB tests.
    pub inv_direction: Vec3,
    /// Sign of direction components.
    pub direction_is_negative: [bool; 3],
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        let inv = recip(&direction);
        // Sign of the reciprocal so that -0.0 reads as negative.
        let direction_is_negative = [inv.x < 0.0, inv.y < 0.0, inv.z < 0.0];
        Self {
            origin,
            direction,
            inv_direction: inv,
            direction_is_negative,
        }
    }

    /// Create a new ray, rejecting zero or non-finite directions.
    pub fn try_new(origin: Point3, direction: Vec3) -> Result<Self> {
        let len = direction.norm();
        if len == 0.0 || !len.is_finite() {
            tracing::warn!(?direction, "rejecting degenerate ray direction");
            return Err(RayBoxError::DegenerateDirection { direction });
        }
        Ok(Self::new(origin, direction))
    }

    /// Assemble a ray from caller-precomputed parts.
    ///
    /// `inv_direction` is trusted to be the reciprocal of `direction`.
    pub fn from_parts(
        origin: Point3,
        direction: Vec3,
        inv_direction: Vec3,
        direction_is_negative: [bool; 3],
    ) -> Self {
        Self {
            origin,
            direction,
            inv_direction,
            direction_is_negative,
        }
    }

    /// Ray from `start` with `t = 1` at `end`.
    pub fn segment(start: Point3, end: Point3) -> Self {
        Self::new(start, end - start)
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// The same segment traversed backwards, starting at `t = 1`.
    pub fn reversed(&self) -> Self {
        Self::new(self.origin + self.direction, -self.direction)
    }

    /// Test ray-AABB intersection using the slab method.
    ///
    /// See [`intersect`] for the parametrization of the result.
    #[inline]
    pub fn intersect_aabb(&self, aabb: &Aabb3, options: &RayBoxOptions) -> RayBoxIntersection {
        intersect(
            &self.origin,
            &self.direction,
            &self.inv_direction,
            &self.direction_is_negative,
            &aabb.bounds(),
            options,
        )
    }

    /// Test against `[xmin, ymin, zmin, xmax, ymax, zmax]`, rejecting
    /// bounds with `min > max` on any axis.
    pub fn try_intersect_bounds(
        &self,
        bounds: [f64; 6],
        options: &RayBoxOptions,
    ) -> Result<RayBoxIntersection> {
        let aabb = Aabb3::try_from_bounds(bounds)?;
        Ok(self.intersect_aabb(&aabb, options))
    }
}
