//! Trajectory export
//!
//! Serializes a planned path together with the obstacle field it was planned
//! against, so an external plotter can render both.

use serde::{Deserialize, Serialize};

use crate::diagnostics::EvolutionResult;
use crate::error::EvoResult;
use crate::fitness::obstacles::ObstacleField;
use crate::fitness::score::FitnessScore;
use crate::genome::point::Point3D;

/// Plot-ready view of a planned path
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryExport {
    /// Waypoints in traversal order
    pub path: Vec<Point3D>,
    /// Obstacle positions
    pub obstacles: Vec<Point3D>,
    /// Safety radius drawn around each obstacle
    pub safety_radius: f64,
    /// Score of the path
    pub score: FitnessScore,
    /// Smallest distance from any waypoint to a safety sphere surface
    pub min_clearance: Option<f64>,
}

impl TrajectoryExport {
    /// Build an export from a run result and the field it ran against
    pub fn new(result: &EvolutionResult, field: &ObstacleField) -> Self {
        Self {
            path: result.best_path.points().to_vec(),
            obstacles: field.obstacles.clone(),
            safety_radius: field.safety_radius,
            score: result.best_score,
            min_clearance: field.path_clearance(&result.best_path),
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> EvoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> EvoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
