//! Slab-method ray/AABB intersection.
//!
//! The box is the product of three intervals, one per axis. Each axis
//! narrows a running `[t_min, t_max]` parameter interval, and the ray hits
//! the box when the interval is non-empty after all three axes.
//!
//! Distances are computed along the unit direction so that the segment
//! range and the end tolerance are in length units, then converted back
//! to the caller's parametrization (`origin + t * direction`) on return.

use raybox_math::{Point3, Vec3};

use crate::options::RayBoxOptions;

/// Outcome of a ray/box test.
///
/// `t_min` and `t_max` are always filled in, in the ray's own
/// parametrization, but are only meaningful when `is_intersection` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayBoxIntersection {
    /// Whether the ray (or segment) meets the box.
    pub is_intersection: bool,
    /// Entry parameter.
    pub t_min: f64,
    /// Exit parameter.
    pub t_max: f64,
}

impl RayBoxIntersection {
    /// `Some((t_min, t_max))` on a hit.
    #[inline]
    pub fn hit(&self) -> Option<(f64, f64)> {
        self.is_intersection.then_some((self.t_min, self.t_max))
    }
}

/// Test a ray against a box given as `[xmin, ymin, zmin, xmax, ymax, zmax]`.
///
/// `inv_direction` must hold the component-wise reciprocal of `direction`
/// (infinite where a component is zero). `direction_is_negative` is part of
/// the usual precomputed ray triple but is not needed here: the entry/exit
/// ordering is resolved per axis by comparison.
///
/// `direction` must be non-zero. A zero direction yields non-finite
/// parameters rather than an error. Box bounds are not checked; `min > max`
/// on an axis gives an unspecified answer. See [`Ray::try_intersect_bounds`]
/// for a checked entry point.
///
/// [`Ray::try_intersect_bounds`]: crate::Ray::try_intersect_bounds
///
/// ```
/// use raybox::{intersect, RayBoxOptions};
/// use raybox_math::{Point3, Vec3};
///
/// let dir = Vec3::new(1.0, 0.0, 0.0);
/// let inv = Vec3::new(1.0, f64::INFINITY, f64::INFINITY);
/// let hit = intersect(
///     &Point3::new(-1.0, 1.0, 1.0),
///     &dir,
///     &inv,
///     &[false; 3],
///     &[0.0, 0.0, 0.0, 2.0, 2.0, 2.0],
///     &RayBoxOptions::default(),
/// );
/// assert_eq!(hit.hit(), Some((1.0, 3.0)));
/// ```
#[inline]
pub fn intersect(
    origin: &Point3,
    direction: &Vec3,
    inv_direction: &Vec3,
    _direction_is_negative: &[bool; 3],
    bbox: &[f64; 6],
    options: &RayBoxOptions,
) -> RayBoxIntersection {
    let length = direction.norm();
    let dir = direction / length;
    let inv_dir = inv_direction * length;

    let (mut t_min, mut t_max) = if options.is_infinite_ray {
        (f64::NEG_INFINITY, f64::INFINITY)
    } else {
        let zero = options.signed_tolerance();
        (-zero, length + zero)
    };

    for axis in 0..3 {
        let (lo, hi) = (bbox[axis], bbox[axis + 3]);
        let o = origin[axis];

        if dir[axis] != 0.0 {
            let t1 = (lo - o) * inv_dir[axis];
            let t2 = (hi - o) * inv_dir[axis];
            if t1 < t2 {
                t_min = t1.max(t_min);
                t_max = t2.min(t_max);
            } else {
                t_min = t2.max(t_min);
                t_max = t1.min(t_max);
            }
            // The last axis is settled by the final comparison.
            if axis < 2 && t_min > t_max {
                return rescale(false, t_min, t_max, length);
            }
        } else if o < lo || o > hi {
            // Parallel to this slab and outside it.
            return rescale(false, t_min, t_max, length);
        }
    }

    rescale(t_min <= t_max, t_min, t_max, length)
}

#[inline]
fn rescale(is_intersection: bool, t_min: f64, t_max: f64, length: f64) -> RayBoxIntersection {
    RayBoxIntersection {
        is_intersection,
        t_min: t_min / length,
        t_max: t_max / length,
    }
}
