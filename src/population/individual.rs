//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a path with its score.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::fitness::score::FitnessScore;
use crate::fitness::traits::Fitness;
use crate::genome::path::PathEncoding;

/// An individual in the population
///
/// Scores are computed once when the individual is created. Fitness is
/// deterministic, so the cached score always equals a fresh evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The path of this individual
    pub path: PathEncoding,
    /// The path's score
    pub score: FitnessScore,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl Individual {
    /// Create an individual with a known score
    pub fn new(path: PathEncoding, score: FitnessScore) -> Self {
        Self {
            path,
            score,
            birth_generation: 0,
        }
    }

    /// Score a path and wrap it
    pub fn evaluated<Fit: Fitness + ?Sized>(path: PathEncoding, fitness: &Fit) -> Self {
        let score = fitness.score(&path);
        Self::new(path, score)
    }

    /// Set the birth generation
    pub fn with_generation(mut self, generation: usize) -> Self {
        self.birth_generation = generation;
        self
    }

    /// Get a reference to the path
    pub fn path(&self) -> &PathEncoding {
        &self.path
    }

    /// Take the path out of this individual
    pub fn into_path(self) -> PathEncoding {
        self.path
    }

    /// Check if this individual is strictly better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.score.is_better_than(&other.score)
    }

    /// Check if this individual's path is collision-free
    pub fn is_feasible(&self) -> bool {
        self.score.is_feasible()
    }

    /// Age of this individual (generations since birth)
    pub fn age(&self, current_generation: usize) -> usize {
        current_generation.saturating_sub(self.birth_generation)
    }

    /// Ordering by score only (lower first)
    pub fn cmp_by_score(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}
