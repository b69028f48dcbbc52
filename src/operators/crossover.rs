//! Crossover operators
//!
//! This module provides single-point crossover for paths.

use rand::Rng;

use crate::error::{OperatorError, OperatorResult};
use crate::genome::path::PathEncoding;
use crate::operators::traits::CrossoverOperator;

/// One-point crossover for paths
///
/// Draws a cut `k` uniformly from `1..len` and swaps the tails, so each child
/// always carries waypoints from both parents.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }

    /// Recombine at an explicit cut point
    ///
    /// Child 1 is `parent1[..cut] ++ parent2[cut..]`, child 2 is
    /// `parent2[..cut] ++ parent1[cut..]`.
    pub fn crossover_at(
        &self,
        parent1: &PathEncoding,
        parent2: &PathEncoding,
        cut: usize,
    ) -> OperatorResult<(PathEncoding, PathEncoding)> {
        let n = parent1.len();
        if n != parent2.len() {
            return OperatorResult::Failed(OperatorError::CrossoverFailed(format!(
                "Parent lengths do not match: {} vs {}",
                n,
                parent2.len()
            )));
        }
        if cut == 0 || cut >= n {
            return OperatorResult::Failed(OperatorError::CrossoverFailed(format!(
                "Cut point {} outside 1..{}",
                cut, n
            )));
        }

        let (head1, tail1) = parent1.points().split_at(cut);
        let (head2, tail2) = parent2.points().split_at(cut);

        let child1 = head1.iter().chain(tail2).copied().collect();
        let child2 = head2.iter().chain(tail1).copied().collect();

        OperatorResult::Success((child1, child2))
    }
}

impl CrossoverOperator for OnePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &PathEncoding,
        parent2: &PathEncoding,
        rng: &mut R,
    ) -> OperatorResult<(PathEncoding, PathEncoding)> {
        let n = parent1.len();
        if n < 2 {
            return OperatorResult::Failed(OperatorError::CrossoverFailed(format!(
                "Paths need at least 2 points for a cut, got {}",
                n
            )));
        }

        let cut = rng.gen_range(1..n);
        self.crossover_at(parent1, parent2, cut)
    }
}
