//! Selection operators
//!
//! This module provides tournament selection over scored individuals.

use rand::seq::index;
use rand::Rng;

use crate::operators::traits::SelectionOperator;
use crate::population::individual::Individual;

/// Tournament selection operator
///
/// Draws `tournament_size` distinct individuals uniformly at random and
/// returns the one with the lowest score. Each call is an independent draw
/// from the whole population.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }

    /// Create binary tournament selection (size = 2)
    pub fn binary() -> Self {
        Self::new(2)
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::binary()
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "Population cannot be empty");

        let tournament_size = self.tournament_size.min(population.len());

        // Distinct contestants, without replacement
        let contestants = index::sample(rng, population.len(), tournament_size);

        contestants
            .into_iter()
            .min_by(|&a, &b| population[a].cmp_by_score(&population[b]))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::score::FitnessScore;
    use crate::genome::path::PathEncoding;
    use crate::genome::point::Point3D;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn individual(i: usize, score: FitnessScore) -> Individual {
        Individual::new(
            PathEncoding::from_points(vec![Point3D::new(i as f64, 0.0, 0.0)]),
            score,
        )
    }

    fn create_population(scores: &[FitnessScore]) -> Vec<Individual> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| individual(i, *s))
            .collect()
    }

    #[test]
    fn test_binary_tournament_two_members_picks_lower() {
        let mut rng = StdRng::seed_from_u64(0);
        let population =
            create_population(&[FitnessScore::Feasible(9.0), FitnessScore::Feasible(4.0)]);
        let selection = TournamentSelection::binary();

        for _ in 0..100 {
            assert_eq!(selection.select(&population, &mut rng), 1);
        }
    }

    #[test]
    fn test_feasible_beats_infeasible() {
        let mut rng = StdRng::seed_from_u64(5);
        let population =
            create_population(&[FitnessScore::Infeasible, FitnessScore::Feasible(1e9)]);
        let selection = TournamentSelection::binary();

        for _ in 0..100 {
            assert_eq!(selection.select(&population, &mut rng), 1);
        }
    }

    #[test]
    fn test_all_infeasible_still_selects() {
        let mut rng = StdRng::seed_from_u64(9);
        let population = create_population(&[FitnessScore::Infeasible; 4]);
        let selection = TournamentSelection::binary();

        for _ in 0..50 {
            assert!(selection.select(&population, &mut rng) < 4);
        }
    }

    #[test]
    fn test_worst_never_wins_binary_tournament() {
        let mut rng = StdRng::seed_from_u64(21);
        let scores: Vec<FitnessScore> = (0..10).map(|i| FitnessScore::Feasible(i as f64)).collect();
        let population = create_population(&scores);
        let selection = TournamentSelection::binary();

        // Contestants are distinct, so the single worst individual always loses.
        for _ in 0..500 {
            assert_ne!(selection.select(&population, &mut rng), 9);
        }
    }

    #[test]
    fn test_selection_pressure() {
        let mut rng = StdRng::seed_from_u64(1);
        let scores: Vec<FitnessScore> = (0..10).map(|i| FitnessScore::Feasible(i as f64)).collect();
        let population = create_population(&scores);
        let selection = TournamentSelection::binary();

        let mut counts = [0usize; 10];
        for _ in 0..5000 {
            counts[selection.select(&population, &mut rng)] += 1;
        }

        // Better individuals are selected more often
        assert!(counts[0] > counts[5]);
        assert!(counts[5] > counts[8]);
    }

    #[test]
    fn test_single_member_population() {
        let mut rng = StdRng::seed_from_u64(2);
        let population = create_population(&[FitnessScore::Feasible(1.0)]);
        assert_eq!(TournamentSelection::binary().select(&population, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "Population cannot be empty")]
    fn test_empty_population_panics() {
        let mut rng = StdRng::seed_from_u64(2);
        TournamentSelection::binary().select(&[], &mut rng);
    }

    #[test]
    #[should_panic(expected = "Tournament size must be at least 1")]
    fn test_zero_tournament_size() {
        TournamentSelection::new(0);
    }
}
