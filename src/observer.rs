//! Progress observers
//!
//! The planner surfaces `(generation, best_score)` to an observer at a fixed
//! cadence. Observers only watch; they cannot influence the run.

use crate::fitness::score::FitnessScore;

/// Receives periodic progress reports from a running planner
pub trait GenerationObserver {
    /// Called with the generation index and the best score after that generation
    fn on_report(&mut self, generation: usize, best_score: FitnessScore);
}

impl<F> GenerationObserver for F
where
    F: FnMut(usize, FitnessScore),
{
    fn on_report(&mut self, generation: usize, best_score: FitnessScore) {
        self(generation, best_score)
    }
}

/// Discards every report
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_report(&mut self, _generation: usize, _best_score: FitnessScore) {}
}

/// Logs every report through `tracing` at info level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GenerationObserver for TracingObserver {
    fn on_report(&mut self, generation: usize, best_score: FitnessScore) {
        tracing::info!(
            generation,
            best_score = %best_score,
            feasible = best_score.is_feasible(),
            "Generation report"
        );
    }
}
