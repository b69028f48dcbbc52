//! Planner configuration
//!
//! Every run parameter lives in [`PathPlannerConfig`]. Configs can be built in
//! code, through [`PathPlannerBuilder`], or parsed from JSON; partial JSON
//! documents fall back to the defaults for missing fields.

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::fitness::obstacles::{ObstacleField, DEFAULT_SAFETY_RADIUS};
use crate::genome::bounds::SamplingBounds;
use crate::genome::point::Point3D;

/// Configuration for the path planner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPlannerConfig {
    /// Population size (N)
    pub population_size: usize,
    /// Number of generations to run (G)
    pub generations: usize,
    /// Waypoints per path (L)
    pub path_length: usize,
    /// Probability that an individual entering the new generation is mutated
    pub mutation_probability: f64,
    /// Probability that a parent pairing is recombined
    pub crossover_probability: f64,
    /// Box that waypoints are sampled from
    pub bounds: SamplingBounds,
    /// Obstacle positions
    pub obstacles: Vec<Point3D>,
    /// Minimum allowed distance from any obstacle
    pub safety_radius: f64,
    /// Report progress every this many generations (0 disables reporting)
    pub report_interval: usize,
    /// Whether to evaluate offspring in parallel
    pub parallel_evaluation: bool,
}

impl Default for PathPlannerConfig {
    fn default() -> Self {
        let field = ObstacleField::default();
        Self {
            population_size: 50,
            generations: 100,
            path_length: 10,
            mutation_probability: 0.1,
            crossover_probability: 0.8,
            bounds: SamplingBounds::default(),
            obstacles: field.obstacles,
            safety_radius: DEFAULT_SAFETY_RADIUS,
            report_interval: 10,
            parallel_evaluation: true,
        }
    }
}

impl PathPlannerConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> PathPlannerBuilder {
        PathPlannerBuilder::new()
    }

    /// Parse a config from JSON, then validate it
    pub fn from_json_str(json: &str) -> EvoResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> EvoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The obstacle field described by this config
    pub fn obstacle_field(&self) -> ObstacleField {
        ObstacleField::new(self.obstacles.clone(), self.safety_radius)
    }

    /// Reject configurations the planner cannot run
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size < 2 {
            return Err(EvolutionError::Configuration(format!(
                "Population size must be at least 2 for tournament selection, got {}",
                self.population_size
            )));
        }
        if self.path_length < 2 {
            return Err(EvolutionError::Configuration(format!(
                "Path length must be at least 2 for crossover, got {}",
                self.path_length
            )));
        }
        check_probability("Mutation probability", self.mutation_probability)?;
        check_probability("Crossover probability", self.crossover_probability)?;
        self.bounds.validate()?;
        self.obstacle_field().validate()
    }
}

fn check_probability(name: &str, value: f64) -> EvoResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EvolutionError::Configuration(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )))
    }
}

/// Builder for [`PathPlannerConfig`]
#[derive(Clone, Debug, Default)]
pub struct PathPlannerBuilder {
    config: PathPlannerConfig,
}

impl PathPlannerBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the number of generations
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the number of waypoints per path
    pub fn path_length(mut self, length: usize) -> Self {
        self.config.path_length = length;
        self
    }

    /// Set the mutation probability
    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.config.mutation_probability = probability;
        self
    }

    /// Set the crossover probability
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.config.crossover_probability = probability;
        self
    }

    /// Set the waypoint sampling bounds
    pub fn bounds(mut self, bounds: SamplingBounds) -> Self {
        self.config.bounds = bounds;
        self
    }

    /// Set the obstacle positions
    pub fn obstacles(mut self, obstacles: Vec<Point3D>) -> Self {
        self.config.obstacles = obstacles;
        self
    }

    /// Set the safety radius
    pub fn safety_radius(mut self, radius: f64) -> Self {
        self.config.safety_radius = radius;
        self
    }

    /// Set obstacles and radius from a field
    pub fn obstacle_field(mut self, field: ObstacleField) -> Self {
        self.config.obstacles = field.obstacles;
        self.config.safety_radius = field.safety_radius;
        self
    }

    /// Set the reporting cadence (0 disables reporting)
    pub fn report_interval(mut self, interval: usize) -> Self {
        self.config.report_interval = interval;
        self
    }

    /// Enable or disable parallel evaluation
    pub fn parallel_evaluation(mut self, enabled: bool) -> Self {
        self.config.parallel_evaluation = enabled;
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> EvoResult<PathPlannerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
