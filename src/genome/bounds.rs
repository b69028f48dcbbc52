//! Sampling bounds for path points
//!
//! This module provides the per-axis coordinate ranges that random points are
//! drawn from, both at population initialization and during mutation.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::EvolutionError;
use crate::genome::point::Point3D;

/// Bounds for a single axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl Bounds {
    /// Create new bounds
    ///
    /// # Panics
    /// Panics if min > max
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min <= max,
            "Invalid bounds: min ({}) must be <= max ({})",
            min,
            max
        );
        Self { min, max }
    }

    /// Create symmetric bounds centered at 0
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check that both ends are finite and ordered, and that the range can be
    /// sampled without overflowing
    pub fn validate(&self, axis: &str) -> Result<(), EvolutionError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "{} bounds must be finite, got [{}, {}]",
                axis, self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(EvolutionError::Configuration(format!(
                "{} bounds are inverted: min ({}) > max ({})",
                axis, self.min, self.max
            )));
        }
        // Uniform sampling scales the range by 1 / (1 - EPSILON)
        if !(self.range() / (1.0 - f64::EPSILON)).is_finite() {
            return Err(EvolutionError::Configuration(format!(
                "{} bounds span too wide a range to sample: [{}, {}]",
                axis, self.min, self.max
            )));
        }
        Ok(())
    }

    fn distribution(&self) -> Uniform<f64> {
        Uniform::new_inclusive(self.min, self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::symmetric(10.0)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Axis-aligned box that random path points are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SamplingBounds {
    pub x: Bounds,
    pub y: Bounds,
    pub z: Bounds,
}

impl SamplingBounds {
    /// Create bounds from per-axis ranges
    pub fn new(x: Bounds, y: Bounds, z: Bounds) -> Self {
        Self { x, y, z }
    }

    /// Same range on every axis
    pub fn cube(bounds: Bounds) -> Self {
        Self::new(bounds, bounds, bounds)
    }

    /// Symmetric cube `[-half_width, half_width]^3`
    pub fn symmetric(half_width: f64) -> Self {
        Self::cube(Bounds::symmetric(half_width))
    }

    /// Check if a point lies inside the box
    pub fn contains(&self, point: &Point3D) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y) && self.z.contains(point.z)
    }

    /// Validate every axis
    pub fn validate(&self) -> Result<(), EvolutionError> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.z.validate("z")
    }

    /// Draw a point with each coordinate uniform in its axis range
    ///
    /// Bounds must be valid; see [`SamplingBounds::validate`].
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point3D {
        Point3D::new(
            self.x.distribution().sample(rng),
            self.y.distribution().sample(rng),
            self.z.distribution().sample(rng),
        )
    }
}
