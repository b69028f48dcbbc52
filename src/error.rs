//! Error types for evo-path
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Config or trajectory (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

impl From<serde_json::Error> for EvolutionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

/// Result of an operator application
#[derive(Debug, Clone)]
pub enum OperatorResult<G> {
    /// Operation succeeded
    Success(G),
    /// Operation failed unrecoverably
    Failed(OperatorError),
}

impl<G> OperatorResult<G> {
    /// Returns the genome if successful, None if failed
    pub fn genome(self) -> Option<G> {
        match self {
            Self::Success(g) => Some(g),
            Self::Failed(_) => None,
        }
    }

    /// Returns true if the operation was successful
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Converts into a standard `Result`
    pub fn into_result(self) -> Result<G, OperatorError> {
        match self {
            Self::Success(g) => Ok(g),
            Self::Failed(e) => Err(e),
        }
    }
}
