//! mixgen-stats - Statistics for generated point clouds
//!
//! - **Summary**: mean, variance, min/max, median and MAD per axis
//! - **Occupancy**: nearest-center assignment and empirical mixture weights

pub mod occupancy;
pub mod summary;

pub use occupancy::*;
pub use summary::*;

use thiserror::Error;

/// Error type for statistics on point clouds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("At least one center is required")]
    NoCenters,

    #[error("Expected {expected} weights, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Weights must have a positive sum, got {0}")]
    InvalidWeights(f64),
}

pub type StatsResult<T> = Result<T, StatsError>;
