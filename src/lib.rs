//! # evo-path
//!
//! Genetic-algorithm path planning in 3D space.
//!
//! A path is a fixed-length sequence of waypoints. Paths that bring any
//! waypoint within the safety radius of an obstacle are infeasible; among the
//! rest, shorter is better. The planner evolves a population of random paths
//! with tournament selection, one-point crossover and point-reset mutation.
//!
//! ## Core Concepts
//!
//! - **Paths as Genomes**: Each individual is an ordered list of [`Point3D`](genome::point::Point3D) waypoints
//! - **Ordered Scores**: [`FitnessScore`](fitness::score::FitnessScore) ranks every feasible path ahead of every infeasible one
//! - **Pluggable Operators**: Selection, crossover, mutation and replacement are traits
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use evo_path::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let config = PathPlannerConfig::builder()
//!     .population_size(50)
//!     .generations(100)
//!     .path_length(10)
//!     .obstacles(vec![Point3D::new(5.0, 5.0, 5.0)])
//!     .safety_radius(1.0)
//!     .build()?;
//!
//! let result = PathPlanner::new(config)?.run(&mut rng)?;
//! println!("best score: {}", result.best_score);
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod observer;
pub mod operators;
pub mod population;

pub use algorithms::path_planner::{run, run_with_observer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::observer::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
