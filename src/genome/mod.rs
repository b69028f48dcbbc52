//! Genome types
//!
//! This module provides the path representation: points, sampling bounds and
//! the path encoding itself.

pub mod bounds;
pub mod path;
pub mod point;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::path::*;
    pub use super::point::*;
}
