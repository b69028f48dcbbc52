//! Fitness evaluation
//!
//! This module provides the score type, the obstacle field and the fitness
//! evaluator built on top of them.

pub mod obstacles;
pub mod score;
pub mod traits;

pub mod prelude {
    pub use super::obstacles::*;
    pub use super::score::*;
    pub use super::traits::*;
}
