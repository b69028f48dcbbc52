//! Fitness traits
//!
//! This module defines the fitness evaluation trait and the path-length
//! evaluator used by the planner.

use crate::fitness::obstacles::ObstacleField;
use crate::fitness::score::FitnessScore;
use crate::genome::path::PathEncoding;

/// Fitness evaluation trait
///
/// Implementations must be deterministic: scoring the same path twice yields
/// the same result. Selection and replacement rely on this.
pub trait Fitness: Send + Sync {
    /// Score a path (lower = better)
    fn score(&self, path: &PathEncoding) -> FitnessScore;
}

impl<F: Fitness + ?Sized> Fitness for &F {
    fn score(&self, path: &PathEncoding) -> FitnessScore {
        (**self).score(path)
    }
}

/// Total path length with a hard collision constraint
///
/// Any waypoint inside an obstacle's safety radius makes the path
/// `Infeasible`; otherwise the score is the sum of the segment lengths.
#[derive(Clone, Debug, Default)]
pub struct PathLengthFitness {
    obstacles: ObstacleField,
}

impl PathLengthFitness {
    /// Create an evaluator over the given obstacle field
    pub fn new(obstacles: ObstacleField) -> Self {
        Self { obstacles }
    }

    /// The obstacle field consulted for collisions
    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }
}

impl Fitness for PathLengthFitness {
    fn score(&self, path: &PathEncoding) -> FitnessScore {
        if self.obstacles.intersects_path(path) {
            return FitnessScore::Infeasible;
        }
        FitnessScore::Feasible(path.length())
    }
}
