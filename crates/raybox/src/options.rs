//! Intersection options.
//!
//! Options are assembled once by the caller and passed by reference to
//! every test, so nothing is inspected per call beyond three plain fields.

use serde::{Deserialize, Serialize};

use crate::error::{RayBoxError, Result};

/// Default tolerance at segment ends.
pub const DEFAULT_EPS_RAY_ENDS: f64 = 1e-10;

/// How a ray is bounded and how its ends are treated.
///
/// Every field has a default, so a partially specified options document
/// deserializes without error:
///
/// ```
/// use raybox::RayBoxOptions;
///
/// let opts = RayBoxOptions::from_json(r#"{ "is_infinite_ray": false }"#).unwrap();
/// assert!(!opts.is_infinite_ray);
/// assert!(opts.is_include_ray_ends);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayBoxOptions {
    /// Treat the ray as an unbounded line, `t` in `(-inf, inf)`.
    /// When false the ray is the segment `t` in `[0, 1]`.
    pub is_infinite_ray: bool,
    /// Whether segment endpoints count as hits. Ignored for infinite rays.
    pub is_include_ray_ends: bool,
    /// Tolerance applied at both segment ends.
    pub eps_ray_ends: f64,
}

impl Default for RayBoxOptions {
    fn default() -> Self {
        Self {
            is_infinite_ray: true,
            is_include_ray_ends: true,
            eps_ray_ends: DEFAULT_EPS_RAY_ENDS,
        }
    }
}

impl RayBoxOptions {
    /// Unbounded line (the default).
    pub fn infinite() -> Self {
        Self::default()
    }

    /// Segment `t` in `[0, 1]` with ends included.
    pub fn segment() -> Self {
        Self {
            is_infinite_ray: false,
            ..Self::default()
        }
    }

    /// Set whether segment ends count as hits.
    pub fn with_ray_ends(mut self, include: bool) -> Self {
        self.is_include_ray_ends = include;
        self
    }

    /// Set the segment-end tolerance.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps_ray_ends = eps;
        self
    }

    /// Signed tolerance that widens (ends included) or narrows (ends
    /// excluded) the segment range at both ends.
    #[inline]
    pub fn signed_tolerance(&self) -> f64 {
        if self.is_include_ray_ends {
            self.eps_ray_ends
        } else {
            -self.eps_ray_ends
        }
    }

    /// Validate options.
    pub fn validate(&self) -> Result<()> {
        if !self.eps_ray_ends.is_finite() || self.eps_ray_ends < 0.0 {
            tracing::warn!(eps = self.eps_ray_ends, "rejecting ray-end tolerance");
            return Err(RayBoxError::InvalidOptions(format!(
                "eps_ray_ends must be finite and non-negative, got {}",
                self.eps_ray_ends
            )));
        }
        Ok(())
    }

    /// Parse options from JSON, defaulting missing fields, then validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        tracing::debug!(?options, "parsed ray-box options");
        options.validate()?;
        Ok(options)
    }
}
