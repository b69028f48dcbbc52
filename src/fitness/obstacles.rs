//! Obstacle field
//!
//! Point obstacles surrounded by a single safety radius. The field is
//! immutable for the duration of a run and shared read-only by every fitness
//! evaluation.

use serde::{Deserialize, Serialize};

use crate::error::EvolutionError;
use crate::genome::path::PathEncoding;
use crate::genome::point::Point3D;

/// Default safety radius around each obstacle
pub const DEFAULT_SAFETY_RADIUS: f64 = 1.0;

/// A set of point obstacles with a shared safety radius
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Obstacle positions
    pub obstacles: Vec<Point3D>,
    /// Minimum allowed distance from any obstacle
    pub safety_radius: f64,
}

impl ObstacleField {
    /// Create a field from obstacle positions and a safety radius
    pub fn new(obstacles: Vec<Point3D>, safety_radius: f64) -> Self {
        Self {
            obstacles,
            safety_radius,
        }
    }

    /// A field with no obstacles
    pub fn empty() -> Self {
        Self::new(Vec::new(), DEFAULT_SAFETY_RADIUS)
    }

    /// Number of obstacles
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Check if the field has no obstacles
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// True iff `point` is strictly closer than the safety radius to any obstacle
    pub fn intersects(&self, point: &Point3D) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| point.distance(obstacle) < self.safety_radius)
    }

    /// True iff any waypoint of `path` intersects an obstacle
    pub fn intersects_path(&self, path: &PathEncoding) -> bool {
        path.points().iter().any(|p| self.intersects(p))
    }

    /// Distance from `point` to the nearest safety sphere surface
    ///
    /// Negative inside a safety sphere. `None` when the field is empty.
    pub fn clearance(&self, point: &Point3D) -> Option<f64> {
        self.obstacles
            .iter()
            .map(|obstacle| point.distance(obstacle) - self.safety_radius)
            .min_by(f64::total_cmp)
    }

    /// Smallest clearance over all waypoints of `path`
    pub fn path_clearance(&self, path: &PathEncoding) -> Option<f64> {
        path.points()
            .iter()
            .filter_map(|p| self.clearance(p))
            .min_by(f64::total_cmp)
    }

    /// Check radius and obstacle coordinates
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if !self.safety_radius.is_finite() || self.safety_radius < 0.0 {
            return Err(EvolutionError::Configuration(format!(
                "Safety radius must be finite and non-negative, got {}",
                self.safety_radius
            )));
        }
        if let Some((i, p)) = self
            .obstacles
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite())
        {
            return Err(EvolutionError::Configuration(format!(
                "Obstacle {} has non-finite coordinates {:?}",
                i, p
            )));
        }
        Ok(())
    }
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new(
            vec![
                Point3D::new(5.0, 5.0, 5.0),
                Point3D::new(3.0, 2.0, 3.0),
                Point3D::new(-4.0, -4.0, -4.0),
            ],
            DEFAULT_SAFETY_RADIUS,
        )
    }
}
