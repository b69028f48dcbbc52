//! Diagnostics and statistics
//!
//! This module provides statistics collection for planner runs and the
//! result type handed back to callers.

pub mod export;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fitness::score::FitnessScore;
use crate::genome::path::PathEncoding;
use crate::population::population::Population;

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (0 = initial population)
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Best score in this generation
    pub best_score: FitnessScore,
    /// Worst score in this generation
    pub worst_score: FitnessScore,
    /// Mean path length over feasible individuals
    pub mean_feasible_length: Option<f64>,
    /// Number of collision-free individuals
    pub feasible_count: usize,
    /// Time spent producing this generation (ms)
    pub elapsed_ms: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population(population: &Population, generation: usize, evaluations: usize) -> Self {
        Self {
            generation,
            evaluations,
            best_score: population.best_score().unwrap_or(FitnessScore::Infeasible),
            worst_score: population
                .worst()
                .map(|i| i.score)
                .unwrap_or(FitnessScore::Infeasible),
            mean_feasible_length: population.mean_feasible_length(),
            feasible_count: population.feasible_count(),
            elapsed_ms: 0.0,
        }
    }

    /// Set the generation wall time
    pub fn with_elapsed(mut self, duration: Duration) -> Self {
        self.elapsed_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get the history of best scores
    pub fn best_score_history(&self) -> Vec<FitnessScore> {
        self.generations.iter().map(|g| g.best_score).collect()
    }

    /// First generation whose population contained a feasible path
    pub fn first_feasible_generation(&self) -> Option<usize> {
        self.generations
            .iter()
            .find(|g| g.feasible_count > 0)
            .map(|g| g.generation)
    }

    /// Human-readable one-paragraph summary
    pub fn summary(&self) -> String {
        let final_best = self
            .generations
            .last()
            .map(|g| g.best_score.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let first_feasible = self
            .first_feasible_generation()
            .map(|g| g.to_string())
            .unwrap_or_else(|| "never".to_string());

        format!(
            "Evolution Summary:\n  Generations recorded: {}\n  Final best score: {}\n  First feasible generation: {}\n  Runtime: {:.2}ms",
            self.num_generations(),
            final_best,
            first_feasible,
            self.total_runtime_ms
        )
    }
}

/// Result of a planner run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Fittest path of the final population
    pub best_path: PathEncoding,
    /// Score of that path
    pub best_score: FitnessScore,
    /// Number of generations executed
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// Run statistics
    pub stats: EvolutionStats,
    /// Population after the last generation
    pub final_population: Population,
}

impl EvolutionResult {
    /// Create a new result
    pub fn new(
        best_path: PathEncoding,
        best_score: FitnessScore,
        generations: usize,
        evaluations: usize,
    ) -> Self {
        Self {
            best_path,
            best_score,
            generations,
            evaluations,
            stats: EvolutionStats::default(),
            final_population: Population::default(),
        }
    }

    /// Attach run statistics
    pub fn with_stats(mut self, stats: EvolutionStats) -> Self {
        self.stats = stats;
        self
    }

    /// Attach the final population
    pub fn with_population(mut self, population: Population) -> Self {
        self.final_population = population;
        self
    }

    /// Check if the best path avoids every obstacle
    pub fn is_feasible(&self) -> bool {
        self.best_score.is_feasible()
    }
}

pub mod prelude {
    pub use super::export::*;
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::point::Point3D;
    use crate::population::individual::Individual;

    fn path() -> PathEncoding {
        PathEncoding::from_points(vec![Point3D::origin(), Point3D::new(1.0, 0.0, 0.0)])
    }

    fn stats_for(scores: &[FitnessScore], generation: usize) -> GenerationStats {
        let population: Population = scores
            .iter()
            .map(|s| Individual::new(path(), *s))
            .collect();
        GenerationStats::from_population(&population, generation, 10 * (generation + 1))
    }

    #[test]
    fn test_generation_stats_from_population() {
        let stats = stats_for(
            &[
                FitnessScore::Feasible(4.0),
                FitnessScore::Infeasible,
                FitnessScore::Feasible(2.0),
            ],
            3,
        );
        assert_eq!(stats.generation, 3);
        assert_eq!(stats.evaluations, 40);
        assert_eq!(stats.best_score, FitnessScore::Feasible(2.0));
        assert_eq!(stats.worst_score, FitnessScore::Infeasible);
        assert_eq!(stats.mean_feasible_length, Some(3.0));
        assert_eq!(stats.feasible_count, 2);
    }

    #[test]
    fn test_generation_stats_with_elapsed() {
        let stats = stats_for(&[FitnessScore::Feasible(1.0)], 0)
            .with_elapsed(Duration::from_millis(250));
        assert!((stats.elapsed_ms - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_evolution_stats_history() {
        let mut stats = EvolutionStats::new();
        stats.record(stats_for(&[FitnessScore::Infeasible], 0));
        stats.record(stats_for(&[FitnessScore::Infeasible], 1));
        stats.record(stats_for(&[FitnessScore::Feasible(5.0)], 2));

        assert_eq!(stats.num_generations(), 3);
        assert_eq!(
            stats.best_score_history(),
            vec![
                FitnessScore::Infeasible,
                FitnessScore::Infeasible,
                FitnessScore::Feasible(5.0)
            ]
        );
        assert_eq!(stats.first_feasible_generation(), Some(2));

        let summary = stats.summary();
        assert!(summary.contains("Generations recorded: 3"));
        assert!(summary.contains("First feasible generation: 2"));
    }

    #[test]
    fn test_evolution_stats_never_feasible() {
        let mut stats = EvolutionStats::new();
        stats.record(stats_for(&[FitnessScore::Infeasible], 0));
        assert_eq!(stats.first_feasible_generation(), None);
        assert!(stats.summary().contains("never"));
    }

    #[test]
    fn test_evolution_result() {
        let result = EvolutionResult::new(path(), FitnessScore::Feasible(1.0), 10, 550);
        assert!(result.is_feasible());
        assert_eq!(result.stats.num_generations(), 0);
        assert!(result.final_population.is_empty());

        let infeasible = EvolutionResult::new(path(), FitnessScore::Infeasible, 10, 550);
        assert!(!infeasible.is_feasible());
    }
}
