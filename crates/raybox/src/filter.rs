//! Candidate filtering over a list of boxes.
//!
//! A linear pass that keeps the indices of boxes a ray touches, used to
//! cut a candidate set down before exact intersection work. Boxes are
//! visited in order; no spatial structure is built.

use rayon::prelude::*;

use raybox_math::Aabb3;

use crate::options::RayBoxOptions;
use crate::ray::Ray;

/// Indices of the boxes hit by `ray`, in input order.
pub fn candidates(ray: &Ray, boxes: &[Aabb3], options: &RayBoxOptions) -> Vec<usize> {
    let hits: Vec<usize> = boxes
        .iter()
        .enumerate()
        .filter(|(_, aabb)| ray.intersect_aabb(aabb, options).is_intersection)
        .map(|(idx, _)| idx)
        .collect();
    tracing::trace!(boxes = boxes.len(), hits = hits.len(), "filtered candidates");
    hits
}

/// Parallel [`candidates`]. Same result, same order.
pub fn par_candidates(ray: &Ray, boxes: &[Aabb3], options: &RayBoxOptions) -> Vec<usize> {
    let hits: Vec<usize> = boxes
        .par_iter()
        .enumerate()
        .filter(|(_, aabb)| ray.intersect_aabb(aabb, options).is_intersection)
        .map(|(idx, _)| idx)
        .collect();
    tracing::trace!(boxes = boxes.len(), hits = hits.len(), "filtered candidates in parallel");
    hits
}
