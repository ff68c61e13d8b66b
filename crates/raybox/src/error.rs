//! Error types for ray and option construction.

use raybox_math::{InvalidBounds, Vec3};
use thiserror::Error;

/// Errors raised while building rays, boxes, or options.
///
/// The intersection test itself never fails; these only come from the
/// checked constructors.
#[derive(Error, Debug)]
pub enum RayBoxError {
    /// Option values out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Ray direction is zero or not finite.
    #[error("degenerate ray direction: {direction:?}")]
    DegenerateDirection {
        /// The rejected direction.
        direction: Vec3,
    },

    /// Box bounds with `min > max`.
    #[error(transparent)]
    InvalidBounds(#[from] InvalidBounds),

    /// Options document failed to parse.
    #[error("failed to parse options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for raybox construction.
pub type Result<T> = std::result::Result<T, RayBoxError>;
