//! Operator traits
//!
//! This module defines the core operator traits for the path planner.

use rand::Rng;

use crate::error::OperatorResult;
use crate::genome::path::PathEncoding;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    ///
    /// Returns the index of the selected individual.
    fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create offspring.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &PathEncoding,
        parent2: &PathEncoding,
        rng: &mut R,
    ) -> OperatorResult<(PathEncoding, PathEncoding)>;
}

/// Mutation operator trait
///
/// Applies random changes to a path.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to a path in place
    fn mutate<R: Rng>(&self, path: &mut PathEncoding, rng: &mut R);

    /// Get the probability that a single application changes the path
    fn mutation_probability(&self) -> f64 {
        1.0
    }
}

/// Replacement policy trait
///
/// Folds a scored offspring batch into the current population, producing the
/// next population.
pub trait ReplacementPolicy: Send + Sync {
    /// Merge `offspring` into `current`; the result has `current.len()` members
    fn replace(&self, current: Population, offspring: Vec<Individual>) -> Population;
}
