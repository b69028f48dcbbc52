//! Mutation operators
//!
//! This module provides the point-reset mutation for paths.

use rand::Rng;

use crate::genome::bounds::SamplingBounds;
use crate::genome::path::PathEncoding;
use crate::operators::traits::MutationOperator;

/// Point-reset mutation
///
/// With the configured probability, replaces one uniformly chosen waypoint
/// with a fresh point drawn from the sampling bounds. Otherwise the path is
/// left untouched. At most one waypoint changes per application.
#[derive(Clone, Debug)]
pub struct PointResetMutation {
    /// Probability that an application fires
    pub probability: f64,
    /// Where replacement points are drawn from
    pub bounds: SamplingBounds,
}

impl PointResetMutation {
    /// Create a new point-reset mutation
    ///
    /// # Panics
    /// Panics if `probability` is outside [0, 1]
    pub fn new(probability: f64, bounds: SamplingBounds) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        Self {
            probability,
            bounds,
        }
    }

    /// Replace one random waypoint unconditionally, returning its index
    ///
    /// Returns `None` for an empty path.
    pub fn reset_random_point<R: Rng>(
        &self,
        path: &mut PathEncoding,
        rng: &mut R,
    ) -> Option<usize> {
        if path.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..path.len());
        path.replace_point(index, self.bounds.sample(rng));
        Some(index)
    }
}

impl Default for PointResetMutation {
    fn default() -> Self {
        Self::new(0.1, SamplingBounds::default())
    }
}

impl MutationOperator for PointResetMutation {
    fn mutate<R: Rng>(&self, path: &mut PathEncoding, rng: &mut R) {
        if rng.gen::<f64>() < self.probability {
            self.reset_random_point(path, rng);
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bounds::Bounds;
    use crate::genome::point::Point3D;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn far_path(len: usize) -> PathEncoding {
        // Outside the sampling box, so any reset point is distinguishable
        (0..len)
            .map(|i| Point3D::new(100.0 + i as f64, 100.0, 100.0))
            .collect()
    }

    fn changed_points(a: &PathEncoding, b: &PathEncoding) -> usize {
        a.points()
            .iter()
            .zip(b.points())
            .filter(|(x, y)| x != y)
            .count()
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let mutation = PointResetMutation::new(0.0, SamplingBounds::default());
        let original = far_path(10);

        for _ in 0..200 {
            let mut path = original.clone();
            mutation.mutate(&mut path, &mut rng);
            assert_eq!(path, original);
        }
    }

    #[test]
    fn test_certain_mutation_changes_exactly_one_point() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = SamplingBounds::cube(Bounds::new(-1.0, 1.0));
        let mutation = PointResetMutation::new(1.0, bounds);
        let original = far_path(10);

        for _ in 0..200 {
            let mut path = original.clone();
            mutation.mutate(&mut path, &mut rng);
            assert_eq!(path.len(), 10);
            assert_eq!(changed_points(&original, &path), 1);
            let new_point = path
                .points()
                .iter()
                .find(|p| !original.points().contains(p))
                .unwrap();
            assert!(bounds.contains(new_point));
        }
    }

    #[test]
    fn test_mutation_changes_at_most_one_point() {
        let mut rng = StdRng::seed_from_u64(2);
        let mutation = PointResetMutation::new(0.5, SamplingBounds::default());
        let original = far_path(6);

        let mut fired = 0;
        for _ in 0..400 {
            let mut path = original.clone();
            mutation.mutate(&mut path, &mut rng);
            let changed = changed_points(&original, &path);
            assert!(changed <= 1);
            fired += changed;
        }
        // Roughly half of the applications fire
        assert!(fired > 120 && fired < 280, "fired {} times", fired);
    }

    #[test]
    fn test_reset_random_point_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let mutation = PointResetMutation::default();
        let original = far_path(4);
        let mut path = original.clone();

        let index = mutation.reset_random_point(&mut path, &mut rng).unwrap();
        assert!(index < 4);
        assert_ne!(path[index], original[index]);

        let mut empty = PathEncoding::from_points(Vec::new());
        assert_eq!(mutation.reset_random_point(&mut empty, &mut rng), None);
    }

    #[test]
    fn test_default_probability() {
        assert_eq!(PointResetMutation::default().mutation_probability(), 0.1);
    }

    #[test]
    #[should_panic(expected = "Probability must be in [0, 1]")]
    fn test_invalid_probability() {
        PointResetMutation::new(1.5, SamplingBounds::default());
    }
}
