//! Planning algorithms
//!
//! This module provides the generational path planner and its configuration.

pub mod config;
pub mod path_planner;

pub mod prelude {
    pub use super::config::{PathPlannerBuilder, PathPlannerConfig};
    pub use super::path_planner::PathPlanner;
}
