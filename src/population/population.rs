//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fitness::score::FitnessScore;
use crate::fitness::traits::Fitness;
use crate::genome::bounds::SamplingBounds;
use crate::genome::path::PathEncoding;
use crate::population::individual::Individual;

/// A population of scored individuals
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Current generation number
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a random population of `size` paths with `path_length` points each
    pub fn random<R, Fit>(
        size: usize,
        path_length: usize,
        bounds: &SamplingBounds,
        fitness: &Fit,
        rng: &mut R,
    ) -> Self
    where
        R: Rng,
        Fit: Fitness + ?Sized,
    {
        let paths: Vec<PathEncoding> = (0..size)
            .map(|_| PathEncoding::random(path_length, bounds, rng))
            .collect();
        Self::from_individuals(evaluate(paths, fitness, 0))
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Get the best individual (lowest score, first found on ties)
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().min_by(|a, b| a.cmp_by_score(b))
    }

    /// Get the worst individual (highest score)
    pub fn worst(&self) -> Option<&Individual> {
        self.individuals.iter().max_by(|a, b| a.cmp_by_score(b))
    }

    /// Sort the population by score (best first, infeasible last)
    ///
    /// The sort is stable, so equal scores keep their relative order.
    pub fn sort_by_fitness(&mut self) {
        sort_by_score(&mut self.individuals);
    }

    /// Count individuals with collision-free paths
    pub fn feasible_count(&self) -> usize {
        self.individuals.iter().filter(|i| i.is_feasible()).count()
    }

    /// Mean length over feasible individuals
    pub fn mean_feasible_length(&self) -> Option<f64> {
        let lengths: Vec<f64> = self
            .individuals
            .iter()
            .filter_map(|i| i.score.length())
            .collect();

        if lengths.is_empty() {
            None
        } else {
            Some(lengths.iter().sum::<f64>() / lengths.len() as f64)
        }
    }

    /// Best score in the population
    pub fn best_score(&self) -> Option<FitnessScore> {
        self.best().map(|i| i.score)
    }
}

/// Stable ascending sort by score
pub fn sort_by_score(individuals: &mut [Individual]) {
    individuals.sort_by(|a, b| a.cmp_by_score(b));
}

/// Score a batch of paths sequentially
pub fn evaluate<Fit>(paths: Vec<PathEncoding>, fitness: &Fit, generation: usize) -> Vec<Individual>
where
    Fit: Fitness + ?Sized,
{
    paths
        .into_iter()
        .map(|path| Individual::evaluated(path, fitness).with_generation(generation))
        .collect()
}

/// Score a batch of paths in parallel (requires `parallel` feature)
///
/// Output order matches input order.
#[cfg(feature = "parallel")]
pub fn evaluate_parallel<Fit>(
    paths: Vec<PathEncoding>,
    fitness: &Fit,
    generation: usize,
) -> Vec<Individual>
where
    Fit: Fitness + ?Sized,
{
    paths
        .into_par_iter()
        .map(|path| Individual::evaluated(path, fitness).with_generation(generation))
        .collect()
}

/// Sequential fallback for parallel evaluation (when `parallel` feature is disabled)
#[cfg(not(feature = "parallel"))]
pub fn evaluate_parallel<Fit>(
    paths: Vec<PathEncoding>,
    fitness: &Fit,
    generation: usize,
) -> Vec<Individual>
where
    Fit: Fitness + ?Sized,
{
    evaluate(paths, fitness, generation)
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
