//! Axis-aligned bounding box.
//!
//! Boxes are stored as min/max corners. The flat six-value layout
//! `[xmin, ymin, zmin, xmax, ymax, zmax]` is what callers usually hold
//! and is accepted by [`Aabb3::from_bounds`].

use thiserror::Error;

use crate::Point3;

/// A box whose min corner exceeds its max corner on some axis.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid bounds on axis {axis}: min {min} > max {max}")]
pub struct InvalidBounds {
    /// Axis index (0 = x, 1 = y, 2 = z).
    pub axis: usize,
    /// Minimum coordinate on that axis.
    pub min: f64,
    /// Maximum coordinate on that axis.
    pub max: f64,
}

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from `[xmin, ymin, zmin, xmax, ymax, zmax]`.
    ///
    /// The bounds are not checked. See [`Aabb3::try_from_bounds`].
    pub fn from_bounds(bounds: [f64; 6]) -> Self {
        Self {
            min: Point3::new(bounds[0], bounds[1], bounds[2]),
            max: Point3::new(bounds[3], bounds[4], bounds[5]),
        }
    }

    /// Create an AABB from `[xmin, ymin, zmin, xmax, ymax, zmax]`,
    /// rejecting boxes with `min > max` on any axis.
    pub fn try_from_bounds(bounds: [f64; 6]) -> Result<Self, InvalidBounds> {
        let aabb = Self::from_bounds(bounds);
        for axis in 0..3 {
            let (min, max) = (aabb.min[axis], aabb.max[axis]);
            // NaN fails this too.
            if !(min <= max) {
                return Err(InvalidBounds { axis, min, max });
            }
        }
        Ok(aabb)
    }

    /// Flat `[xmin, ymin, zmin, xmax, ymax, zmax]` representation.
    pub fn bounds(&self) -> [f64; 6] {
        [
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        ]
    }

    /// Test if a point lies inside or on the boundary.
    pub fn contains_point(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Expand the AABB by a tolerance in all directions.
    pub fn expand(&mut self, tol: f64) {
        self.min.x -= tol;
        self.min.y -= tol;
        self.min.z -= tol;
        self.max.x += tol;
        self.max.y += tol;
        self.max.z += tol;
    }
}

impl From<[f64; 6]> for Aabb3 {
    fn from(bounds: [f64; 6]) -> Self {
        Self::from_bounds(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bounds_layout() {
        let aabb = Aabb3::from_bounds([0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(aabb.min, Point3::new(0.0, 1.0, 2.0));
        assert_eq!(aabb.max, Point3::new(3.0, 4.0, 5.0));
        assert_eq!(aabb.bounds(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let converted: Aabb3 = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0].into();
        assert_eq!(converted, aabb);
    }

    #[test]
    fn test_try_from_bounds_rejects_inverted_axis() {
        let err = Aabb3::try_from_bounds([0.0, 2.0, 0.0, 1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err.axis, 1);
        assert_eq!(err.min, 2.0);
        assert_eq!(err.max, 1.0);

        assert!(Aabb3::try_from_bounds([0.0, 0.0, f64::NAN, 1.0, 1.0, 1.0]).is_err());
        // Flat boxes are fine.
        assert!(Aabb3::try_from_bounds([0.0, 0.0, 1.0, 1.0, 1.0, 1.0]).is_ok());
    }

    #[test]
    fn test_contains_point_boundary() {
        let aabb = Aabb3::from_bounds([0.0, 0.0, 0.0, 2.0, 2.0, 2.0]);
        assert!(aabb.contains_point(&Point3::new(1.0, 1.0, 1.0)));
        assert!(aabb.contains_point(&Point3::new(2.0, 0.0, 1.0)));
        assert!(!aabb.contains_point(&Point3::new(2.0 + 1e-9, 1.0, 1.0)));
    }

    #[test]
    fn test_expand() {
        let mut aabb = Aabb3::from_bounds([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        aabb.expand(0.5);
        approx::assert_relative_eq!(aabb.min.x, -0.5);
        approx::assert_relative_eq!(aabb.max.z, 1.5);
    }
}
