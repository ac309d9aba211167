//! Error types for mixgen-core
//!
//! Every variant describes a caller input problem. Validation runs before any
//! sampling, so an error never comes with partial output.

use thiserror::Error;

/// Main error type for dataset generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixtureError {
    /// A layout dimension is below the minimum the layout needs
    #[error("Invalid {name}: {value} (must be >= {min})")]
    InvalidDimension {
        name: &'static str,
        value: usize,
        min: usize,
    },

    /// Variance was negative, non-finite, or given as a list of the wrong length
    #[error("Invalid variance: {reason}")]
    InvalidVariance { reason: String },

    /// `sample_weights` length does not match the component count
    #[error("Incorrect number of sample weights: expected {expected}, got {actual}")]
    WeightLengthMismatch { expected: usize, actual: usize },

    /// Weights contain a negative or non-finite entry, or sum to zero
    #[error("Invalid sample weights: {reason}")]
    InvalidWeights { reason: String },

    /// Requested sample count was zero
    #[error("Invalid sample count: {0} (must be > 0)")]
    InvalidSampleCount(usize),

    /// A geometric parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Configuration document failed to parse
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for generation operations
pub type MixtureResult<T> = Result<T, MixtureError>;

/// Validation utilities shared by the layout configs
pub mod validation {
    use super::*;

    /// Validate that a dimension is at least `min`
    pub fn validate_dimension(name: &'static str, value: usize, min: usize) -> MixtureResult<()> {
        if value < min {
            return Err(MixtureError::InvalidDimension { name, value, min });
        }
        Ok(())
    }

    /// Validate that at least one sample is requested
    pub fn validate_sample_count(samples: usize) -> MixtureResult<()> {
        if samples == 0 {
            return Err(MixtureError::InvalidSampleCount(samples));
        }
        Ok(())
    }

    /// Validate a finite, non-negative extent (width, height, radius)
    pub fn validate_extent(name: &'static str, value: f64) -> MixtureResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(MixtureError::InvalidParameter {
                name,
                reason: format!("must be finite and >= 0, got {}", value),
            });
        }
        Ok(())
    }

    /// Validate a finite, strictly positive value
    pub fn validate_positive(name: &'static str, value: f64) -> MixtureResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(MixtureError::InvalidParameter {
                name,
                reason: format!("must be finite and > 0, got {}", value),
            });
        }
        Ok(())
    }

    /// Validate a finite value of any sign
    pub fn validate_finite(name: &'static str, value: f64) -> MixtureResult<()> {
        if !value.is_finite() {
            return Err(MixtureError::InvalidParameter {
                name,
                reason: format!("must be finite, got {}", value),
            });
        }
        Ok(())
    }
}
