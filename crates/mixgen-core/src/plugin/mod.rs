//! Name-keyed generator front-end.
//!
//! Lets callers drive the three datasets through loosely typed keyword
//! parameters (as a UI or script would) instead of the typed configs.
//!
//! # Key Components
//!
//! - [`DataGenerator`]: the trait every dataset generator implements
//! - [`GeneratorParams`]: runtime parameters, checked against [`ParameterSpec`]s
//! - [`GeneratedData`]: columnar output (`x`, `y`, `component`)
//! - [`GeneratorRegistry`]: lookup of the built-in generators by id
//!
//! # Example
//!
//! ```
//! use mixgen_core::plugin::{GeneratorParams, GeneratorRegistry};
//!
//! let registry = GeneratorRegistry::new();
//! let generator = registry.get("mixture-circle").unwrap();
//!
//! let mut params = GeneratorParams::new();
//! params.set_int("modes", 4);
//! params.set_int("samples", 100);
//! params.set_int("random_state", 0);
//!
//! let data = generator.generate(&params).unwrap();
//! assert_eq!(data.point_count, 100);
//! ```

pub mod generators;
pub mod params;
pub mod registry;

pub use params::{
    GeneratorParams, ParameterConstraints, ParameterSpec, ParameterType, ParameterValue,
};
pub use registry::GeneratorRegistry;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::error::MixtureError;
use crate::sampler::LabeledSampleSet;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generator not found: {0}")]
    NotFound(String),

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Parameter type mismatch for '{name}': expected {expected}")]
    TypeMismatch { name: String, expected: String },

    #[error("Generation failed: {0}")]
    Generation(#[from] MixtureError),
}

/// Which layout a generator produces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    Grid,
    Circle,
    Spiral,
}

impl LayoutKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            LayoutKind::Grid => "Grid",
            LayoutKind::Circle => "Circle",
            LayoutKind::Spiral => "Spiral",
        }
    }
}

/// Metadata describing a data generator
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorMetadata {
    /// Unique identifier (e.g., "mixture-grid")
    pub id: String,

    /// Human-readable name
    pub name: String,

    pub layout: LayoutKind,

    pub description: String,

    pub parameters: Vec<ParameterSpec>,
}

/// Axis-aligned 2D bounding box of generated data
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoundingBox {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    /// Tight box around the rows of a `n x 2` array; `None` when empty
    pub fn from_points(points: &Array2<f64>) -> Option<Self> {
        if points.nrows() == 0 {
            return None;
        }
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for row in points.rows() {
            for axis in 0..2 {
                min[axis] = min[axis].min(row[axis]);
                max[axis] = max[axis].max(row[axis]);
            }
        }
        Some(Self { min, max })
    }
}

/// Description of a single output field
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub description: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Output from a generator
#[derive(Clone, Debug)]
pub struct GeneratedData {
    /// Column data keyed by field name
    pub columns: HashMap<String, Vec<f64>>,

    pub point_count: usize,

    pub bounds: Option<BoundingBox>,

    /// Additional metadata about the generation
    pub metadata: HashMap<String, String>,
}

impl GeneratedData {
    /// Split a labeled sample set into `x`, `y` and `component` columns
    pub fn from_labeled(set: &LabeledSampleSet) -> Self {
        let x = set.points.column(0).to_vec();
        let y = set.points.column(1).to_vec();
        let component = set.components.iter().map(|&c| c as f64).collect();

        let mut columns = HashMap::new();
        columns.insert("x".to_string(), x);
        columns.insert("y".to_string(), y);
        columns.insert("component".to_string(), component);

        Self {
            columns,
            point_count: set.len(),
            bounds: BoundingBox::from_points(&set.points),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn get_column(&self, name: &str) -> Option<&Vec<f64>> {
        self.columns.get(name)
    }

    /// Rebuild the `n x 2` point array from the `x` and `y` columns
    pub fn to_array(&self) -> Option<Array2<f64>> {
        let x = self.columns.get("x")?;
        let y = self.columns.get("y")?;
        let flat: Vec<f64> = x.iter().zip(y.iter()).flat_map(|(&a, &b)| [a, b]).collect();
        Array2::from_shape_vec((x.len().min(y.len()), 2), flat).ok()
    }
}

/// The trait all dataset generators implement.
///
/// Generators hold no state; everything comes from the parameters, so a
/// recorded parameter set with a seed reproduces the same data.
pub trait DataGenerator: Send + Sync {
    fn metadata(&self) -> &GeneratorMetadata;

    /// Output fields, in column order
    fn schema(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("x").with_description("X coordinate"),
            FieldDescriptor::new("y").with_description("Y coordinate"),
            FieldDescriptor::new("component").with_description("Component index (0-based)"),
        ]
    }

    /// Generate data with the given parameters
    fn generate(&self, params: &GeneratorParams) -> Result<GeneratedData, GeneratorError>;

    /// Check parameter names, types and constraints
    fn validate_params(&self, params: &GeneratorParams) -> Result<(), GeneratorError> {
        params.validate(&self.metadata().parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_layout_kind() {
        assert_eq!(LayoutKind::Spiral.display_name(), "Spiral");
    }

    #[test]
    fn test_bounding_box() {
        let points = array![[0.0, 1.0], [-2.0, 3.0], [4.0, -1.0]];
        let bbox = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bbox.min, [-2.0, -1.0]);
        assert_eq!(bbox.max, [4.0, 3.0]);
        assert!(BoundingBox::from_points(&Array2::zeros((0, 2))).is_none());
    }

    #[test]
    fn test_generated_data_columns() {
        let set = LabeledSampleSet {
            points: array![[1.0, 2.0], [3.0, 4.0]],
            components: vec![0, 2],
        };
        let data = GeneratedData::from_labeled(&set).with_metadata("generator", "test");

        assert_eq!(data.point_count, 2);
        assert_eq!(data.get_column("x"), Some(&vec![1.0, 3.0]));
        assert_eq!(data.get_column("component"), Some(&vec![0.0, 2.0]));
        assert_eq!(data.to_array(), Some(set.points.clone()));
        assert_eq!(data.metadata.get("generator"), Some(&"test".to_string()));
    }

    #[test]
    fn test_error_from_mixture_error() {
        let err: GeneratorError = MixtureError::InvalidSampleCount(0).into();
        assert!(err.to_string().contains("Invalid sample count"));
    }
}
