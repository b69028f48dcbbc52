//! Generational path planner
//!
//! This module implements the evolution loop: initialize a random population,
//! then for a fixed number of generations select parents, recombine, mutate,
//! score the offspring and fold them back into the population.

use std::time::Instant;

use rand::Rng;

use crate::algorithms::config::PathPlannerConfig;
use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::obstacles::ObstacleField;
use crate::fitness::traits::PathLengthFitness;
use crate::genome::path::PathEncoding;
use crate::observer::{GenerationObserver, TracingObserver};
use crate::operators::crossover::OnePointCrossover;
use crate::operators::mutation::PointResetMutation;
use crate::operators::replacement::SortedReplacement;
use crate::operators::selection::TournamentSelection;
use crate::operators::traits::{
    CrossoverOperator, MutationOperator, ReplacementPolicy, SelectionOperator,
};
use crate::population::individual::Individual;
use crate::population::population::{self as batch, Population};

/// Genetic-algorithm path planner
///
/// Owns the configuration, the fitness evaluator and one operator per stage.
/// The defaults are binary tournament selection, one-point crossover,
/// point-reset mutation and sorted replacement; each can be swapped with the
/// `with_*` methods.
pub struct PathPlanner<
    S = TournamentSelection,
    C = OnePointCrossover,
    M = PointResetMutation,
    P = SortedReplacement,
> {
    config: PathPlannerConfig,
    fitness: PathLengthFitness,
    selection: S,
    crossover: C,
    mutation: M,
    replacement: P,
}

impl PathPlanner {
    /// Validate `config` and build a planner with the default operators
    pub fn new(config: PathPlannerConfig) -> EvoResult<Self> {
        config.validate()?;

        let fitness = PathLengthFitness::new(config.obstacle_field());
        let mutation = PointResetMutation::new(config.mutation_probability, config.bounds);

        Ok(Self {
            config,
            fitness,
            selection: TournamentSelection::binary(),
            crossover: OnePointCrossover::new(),
            mutation,
            replacement: SortedReplacement::new(),
        })
    }
}

impl<S, C, M, P> PathPlanner<S, C, M, P> {
    /// Replace the selection operator
    pub fn with_selection<NewS>(self, selection: NewS) -> PathPlanner<NewS, C, M, P>
    where
        NewS: SelectionOperator,
    {
        PathPlanner {
            config: self.config,
            fitness: self.fitness,
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
            replacement: self.replacement,
        }
    }

    /// Replace the crossover operator
    pub fn with_crossover<NewC>(self, crossover: NewC) -> PathPlanner<S, NewC, M, P>
    where
        NewC: CrossoverOperator,
    {
        PathPlanner {
            config: self.config,
            fitness: self.fitness,
            selection: self.selection,
            crossover,
            mutation: self.mutation,
            replacement: self.replacement,
        }
    }

    /// Replace the mutation operator
    pub fn with_mutation<NewM>(self, mutation: NewM) -> PathPlanner<S, C, NewM, P>
    where
        NewM: MutationOperator,
    {
        PathPlanner {
            config: self.config,
            fitness: self.fitness,
            selection: self.selection,
            crossover: self.crossover,
            mutation,
            replacement: self.replacement,
        }
    }

    /// Replace the replacement policy
    pub fn with_replacement<NewP>(self, replacement: NewP) -> PathPlanner<S, C, M, NewP>
    where
        NewP: ReplacementPolicy,
    {
        PathPlanner {
            config: self.config,
            fitness: self.fitness,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            replacement,
        }
    }

    /// The run configuration
    pub fn config(&self) -> &PathPlannerConfig {
        &self.config
    }

    /// The fitness evaluator
    pub fn fitness(&self) -> &PathLengthFitness {
        &self.fitness
    }

    /// The obstacle field paths are planned against
    pub fn obstacles(&self) -> &ObstacleField {
        self.fitness.obstacles()
    }
}

impl<S, C, M, P> PathPlanner<S, C, M, P>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    P: ReplacementPolicy,
{
    /// Run the planner, logging progress reports through `tracing`
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        self.run_with_observer(rng, &mut TracingObserver)
    }

    /// Run the planner, sending progress reports to `observer`
    pub fn run_with_observer<R, O>(&self, rng: &mut R, observer: &mut O) -> EvoResult<EvolutionResult>
    where
        R: Rng,
        O: GenerationObserver + ?Sized,
    {
        let start_time = Instant::now();
        let config = &self.config;

        tracing::info!(
            population_size = config.population_size,
            generations = config.generations,
            path_length = config.path_length,
            obstacles = config.obstacles.len(),
            mutation_probability = self.mutation.mutation_probability(),
            "Starting path planner"
        );

        // Initialize population
        let mut population = Population::random(
            config.population_size,
            config.path_length,
            &config.bounds,
            &self.fitness,
            rng,
        );

        let mut stats = EvolutionStats::new();
        let mut evaluations = population.len();
        stats.record(GenerationStats::from_population(&population, 0, evaluations));

        for generation in 0..config.generations {
            let gen_start = Instant::now();

            // Offspring are fully produced and scored before the population
            // is touched.
            let offspring = self.breed(population.individuals(), rng);
            let offspring = self.evaluate(offspring, generation + 1);
            evaluations += offspring.len();

            population = self.replacement.replace(population, offspring);
            population.set_generation(generation + 1);

            let best_score = population
                .best_score()
                .ok_or(EvolutionError::EmptyPopulation)?;

            tracing::debug!(
                generation,
                best_score = %best_score,
                feasible = population.feasible_count(),
                "Generation complete"
            );

            if config.report_interval > 0 && generation % config.report_interval == 0 {
                observer.on_report(generation, best_score);
            }

            stats.record(
                GenerationStats::from_population(&population, generation + 1, evaluations)
                    .with_elapsed(gen_start.elapsed()),
            );
        }

        stats.set_runtime(start_time.elapsed());

        let best = population
            .best()
            .ok_or(EvolutionError::EmptyPopulation)?
            .clone();

        if best.is_feasible() {
            tracing::info!(best_score = %best.score, evaluations, "Path planner finished");
        } else {
            tracing::warn!(evaluations, "Path planner finished without a feasible path");
        }

        Ok(
            EvolutionResult::new(best.path, best.score, config.generations, evaluations)
                .with_stats(stats)
                .with_population(population),
        )
    }

    /// Produce exactly `population_size` offspring paths from `parents`
    fn breed<R: Rng>(&self, parents: &[Individual], rng: &mut R) -> Vec<PathEncoding> {
        let target = self.config.population_size;
        let mut offspring = Vec::with_capacity(target + 1);

        while offspring.len() < target {
            let parent1 = &parents[self.selection.select(parents, rng)].path;
            let parent2 = &parents[self.selection.select(parents, rng)].path;

            let (mut child1, mut child2) =
                if rng.gen::<f64>() < self.config.crossover_probability {
                    match self.crossover.crossover(parent1, parent2, rng).into_result() {
                        Ok(children) => children,
                        Err(err) => {
                            tracing::warn!(error = %err, "Crossover failed, passing parents through");
                            (parent1.clone(), parent2.clone())
                        }
                    }
                } else {
                    (parent1.clone(), parent2.clone())
                };

            self.mutation.mutate(&mut child1, rng);
            self.mutation.mutate(&mut child2, rng);

            offspring.push(child1);
            offspring.push(child2);
        }

        // Odd population sizes produce one surplus child
        offspring.truncate(target);
        offspring
    }

    fn evaluate(&self, paths: Vec<PathEncoding>, generation: usize) -> Vec<Individual> {
        if self.config.parallel_evaluation {
            batch::evaluate_parallel(paths, &self.fitness, generation)
        } else {
            batch::evaluate(paths, &self.fitness, generation)
        }
    }
}

/// Run the planner with `config` and return the fittest path
///
/// Progress reports are logged through `tracing`.
pub fn run<R: Rng>(config: PathPlannerConfig, rng: &mut R) -> EvoResult<PathEncoding> {
    run_with_observer(config, rng, &mut TracingObserver)
}

/// Run the planner with `config`, reporting progress to `observer`, and return
/// the fittest path
pub fn run_with_observer<R, O>(
    config: PathPlannerConfig,
    rng: &mut R,
    observer: &mut O,
) -> EvoResult<PathEncoding>
where
    R: Rng,
    O: GenerationObserver + ?Sized,
{
    let result = PathPlanner::new(config)?.run_with_observer(rng, observer)?;
    Ok(result.best_path)
}
