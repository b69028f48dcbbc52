//! Fitness score type
//!
//! Scores are minimized. A path that enters any obstacle's safety radius is
//! `Infeasible`, which ranks below every feasible length. The ordering is total
//! so populations can be sorted without special cases.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Score of a candidate path (lower is better)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "status", content = "length", rename_all = "snake_case")]
pub enum FitnessScore {
    /// Collision-free path with the given total length
    Feasible(f64),
    /// Path violates an obstacle safety radius
    Infeasible,
}

impl FitnessScore {
    /// Check if this score belongs to a collision-free path
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    /// Path length if feasible
    pub fn length(&self) -> Option<f64> {
        match self {
            Self::Feasible(length) => Some(*length),
            Self::Infeasible => None,
        }
    }

    /// Convert to f64 for statistics, mapping `Infeasible` to +inf
    pub fn to_f64(&self) -> f64 {
        self.length().unwrap_or(f64::INFINITY)
    }

    /// Check if this score is strictly better (lower) than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }
}

impl Ord for FitnessScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Feasible(a), Self::Feasible(b)) => a.total_cmp(b),
            (Self::Feasible(_), Self::Infeasible) => Ordering::Less,
            (Self::Infeasible, Self::Feasible(_)) => Ordering::Greater,
            (Self::Infeasible, Self::Infeasible) => Ordering::Equal,
        }
    }
}

impl PartialOrd for FitnessScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FitnessScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FitnessScore {}

impl fmt::Display for FitnessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feasible(length) => write!(f, "{:.4}", length),
            Self::Infeasible => write!(f, "infeasible"),
        }
    }
}
