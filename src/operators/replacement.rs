//! Replacement policies
//!
//! This module provides sorted worst-by-best replacement.

use crate::operators::traits::ReplacementPolicy;
use crate::population::individual::Individual;
use crate::population::population::{sort_by_score, Population};

/// Sorted replacement
///
/// Sorts the current population and the offspring batch by score, then
/// overwrites the worst `k` members of the population with the best `k`
/// offspring, where `k` is the batch size (capped at the population size).
/// A full-size batch therefore replaces the whole population, while a smaller
/// batch only displaces the worst-ranked slots.
#[derive(Clone, Debug, Default)]
pub struct SortedReplacement;

impl SortedReplacement {
    /// Create a new sorted replacement policy
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for SortedReplacement {
    fn replace(&self, current: Population, mut offspring: Vec<Individual>) -> Population {
        let generation = current.generation();
        let size = current.len();
        let incoming = offspring.len().min(size);

        let mut survivors = current.into_individuals();
        sort_by_score(&mut survivors);
        sort_by_score(&mut offspring);

        survivors.truncate(size - incoming);
        survivors.extend(offspring.into_iter().take(incoming));

        let mut next = Population::from_individuals(survivors);
        next.set_generation(generation);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::score::FitnessScore;
    use crate::genome::path::PathEncoding;
    use crate::genome::point::Point3D;

    fn individual(tag: f64, score: FitnessScore) -> Individual {
        Individual::new(
            PathEncoding::from_points(vec![Point3D::new(tag, 0.0, 0.0)]),
            score,
        )
    }

    fn tags(population: &Population) -> Vec<f64> {
        population.iter().map(|i| i.path[0].x).collect()
    }

    fn current() -> Population {
        Population::from_individuals(vec![
            individual(1.0, FitnessScore::Feasible(5.0)),
            individual(2.0, FitnessScore::Infeasible),
            individual(3.0, FitnessScore::Feasible(1.0)),
            individual(4.0, FitnessScore::Feasible(3.0)),
        ])
    }

    #[test]
    fn test_full_batch_replaces_everything() {
        let offspring = vec![
            individual(10.0, FitnessScore::Feasible(9.0)),
            individual(11.0, FitnessScore::Infeasible),
            individual(12.0, FitnessScore::Feasible(2.0)),
            individual(13.0, FitnessScore::Feasible(7.0)),
        ];

        let next = SortedReplacement::new().replace(current(), offspring);
        assert_eq!(next.len(), 4);
        assert_eq!(tags(&next), vec![12.0, 13.0, 10.0, 11.0]);
    }

    #[test]
    fn test_partial_batch_replaces_worst_slots() {
        let offspring = vec![
            individual(10.0, FitnessScore::Feasible(0.5)),
            individual(11.0, FitnessScore::Feasible(8.0)),
        ];

        let next = SortedReplacement::new().replace(current(), offspring);
        assert_eq!(next.len(), 4);
        // Best two survivors (scores 1 and 3) stay, the infeasible one and
        // the score-5 one are displaced.
        assert_eq!(tags(&next), vec![3.0, 4.0, 10.0, 11.0]);
    }

    #[test]
    fn test_oversized_batch_keeps_best_offspring() {
        let offspring: Vec<Individual> = (0..6)
            .map(|i| individual(20.0 + i as f64, FitnessScore::Feasible(10.0 - i as f64)))
            .collect();

        let next = SortedReplacement::new().replace(current(), offspring);
        assert_eq!(next.len(), 4);
        assert_eq!(tags(&next), vec![25.0, 24.0, 23.0, 22.0]);
    }

    #[test]
    fn test_empty_batch_keeps_population() {
        let next = SortedReplacement::new().replace(current(), Vec::new());
        assert_eq!(next.len(), 4);
        assert_eq!(tags(&next), vec![3.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn test_generation_is_carried_over() {
        let mut pop = current();
        pop.set_generation(7);
        let next = SortedReplacement::new().replace(pop, Vec::new());
        assert_eq!(next.generation(), 7);
    }
}
