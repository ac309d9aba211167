//! Parameter types for generator configuration.
//!
//! Generators declare their parameters as [`ParameterSpec`]s with a type,
//! a default and optional constraints. Callers pass a [`GeneratorParams`]
//! map, which is checked against the specs before any config is built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::GeneratorError;
use crate::noise::Variance;

/// Specification for a generator parameter
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Internal parameter name (e.g., "rows")
    pub name: String,

    /// Display label (e.g., "Rows")
    pub label: String,

    pub param_type: ParameterType,

    pub default_value: ParameterValue,

    pub constraints: Option<ParameterConstraints>,

    pub description: Option<String>,
}

/// Type of a parameter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterType {
    /// 64-bit floating point
    Float,

    /// 64-bit signed integer
    Int,

    /// Scalar or list of one or two floats
    Variance,

    /// Optional list of non-negative proportions
    Weights,

    /// Optional integer seed
    Seed,

    /// Choice from a list of options
    Choice { options: Vec<String> },
}

impl ParameterType {
    /// Get a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterType::Float => "float",
            ParameterType::Int => "int",
            ParameterType::Variance => "float or list of 1-2 floats",
            ParameterType::Weights => "list of floats or none",
            ParameterType::Seed => "int or none",
            ParameterType::Choice { .. } => "choice",
        }
    }

    /// Check if a value is compatible with this type
    pub fn is_compatible_with(&self, value: &ParameterValue) -> bool {
        match (self, value) {
            (ParameterType::Float, ParameterValue::Float(_)) => true,
            (ParameterType::Float, ParameterValue::Int(_)) => true,
            (ParameterType::Int, ParameterValue::Int(_)) => true,
            (ParameterType::Variance, ParameterValue::Float(_)) => true,
            (ParameterType::Variance, ParameterValue::Int(_)) => true,
            (ParameterType::Variance, ParameterValue::Vec(_)) => true,
            (ParameterType::Weights, ParameterValue::Vec(_)) => true,
            (ParameterType::Weights, ParameterValue::None) => true,
            (ParameterType::Seed, ParameterValue::Int(v)) => *v >= 0,
            (ParameterType::Seed, ParameterValue::None) => true,
            (ParameterType::Choice { options }, ParameterValue::String(s)) => options.contains(s),
            _ => false,
        }
    }
}

/// Runtime parameter value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Float(f64),
    Int(i64),
    String(String),
    Vec(Vec<f64>),
    None,
}

impl ParameterValue {
    /// Try to extract as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParameterValue::Float(v) => Some(*v),
            ParameterValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to extract as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParameterValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            ParameterValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec(&self) -> Option<&[f64]> {
        match self {
            ParameterValue::Vec(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ParameterValue::None)
    }
}

/// Constraints on numeric parameter values
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterConstraints {
    /// Inclusive lower bound
    pub min: Option<f64>,
    /// Inclusive upper bound
    pub max: Option<f64>,
    /// Exclusive lower bound
    pub above: Option<f64>,
}

impl ParameterConstraints {
    pub fn none() -> Self {
        Self {
            min: None,
            max: None,
            above: None,
        }
    }

    pub fn min(min: f64) -> Self {
        Self {
            min: Some(min),
            ..Self::none()
        }
    }

    /// Strictly greater than zero
    pub fn positive() -> Self {
        Self {
            above: Some(0.0),
            ..Self::none()
        }
    }

    /// Validate a value against these constraints
    pub fn validate(&self, value: &ParameterValue) -> Result<(), String> {
        if let Some(v) = value.as_float() {
            if let Some(min) = self.min {
                if v < min {
                    return Err(format!("Value {} is below minimum {}", v, min));
                }
            }
            if let Some(max) = self.max {
                if v > max {
                    return Err(format!("Value {} is above maximum {}", v, max));
                }
            }
            if let Some(above) = self.above {
                if v <= above {
                    return Err(format!("Value {} must be greater than {}", v, above));
                }
            }
        }
        Ok(())
    }
}

/// Container for runtime parameter values
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GeneratorParams {
    values: HashMap<String, ParameterValue>,
}

impl GeneratorParams {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn set_float(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), ParameterValue::Float(value));
    }

    pub fn set_int(&mut self, name: impl Into<String>, value: i64) {
        self.values.insert(name.into(), ParameterValue::Int(value));
    }

    pub fn set_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), ParameterValue::String(value.into()));
    }

    pub fn set_vec(&mut self, name: impl Into<String>, value: Vec<f64>) {
        self.values.insert(name.into(), ParameterValue::Vec(value));
    }

    /// Explicitly set a parameter to "none" (uniform weights, entropy seed)
    pub fn set_none(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), ParameterValue::None);
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn get_float_or(&self, name: &str, default: f64) -> f64 {
        self.values
            .get(name)
            .and_then(|v| v.as_float())
            .unwrap_or(default)
    }

    /// Get a count parameter, rejecting negative values
    pub fn get_count_or(&self, name: &str, default: usize) -> Result<usize, GeneratorError> {
        match self.values.get(name).and_then(|v| v.as_int()) {
            Some(v) => usize::try_from(v).map_err(|_| GeneratorError::InvalidParameter {
                name: name.to_string(),
                reason: format!("{} is not a valid count", v),
            }),
            None => Ok(default),
        }
    }

    pub fn get_string_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.values
            .get(name)
            .and_then(|v| v.as_string())
            .unwrap_or(default)
    }

    /// Variance as a scalar or list; falls back to `default`
    pub fn get_variance_or(&self, name: &str, default: Variance) -> Variance {
        match self.values.get(name) {
            Some(ParameterValue::Vec(v)) => Variance::List(v.clone()),
            Some(value) => value.as_float().map(Variance::Scalar).unwrap_or(default),
            None => default,
        }
    }

    /// Optional weight list; absent and `None` both mean uniform
    pub fn get_weights(&self, name: &str) -> Option<Vec<f64>> {
        self.values
            .get(name)
            .and_then(|v| v.as_vec())
            .map(<[f64]>::to_vec)
    }

    /// Optional seed; absent and `None` both mean entropy
    pub fn get_seed(&self, name: &str) -> Option<u64> {
        self.values
            .get(name)
            .and_then(|v| v.as_int())
            .and_then(|v| u64::try_from(v).ok())
    }

    /// Fill in missing parameters with defaults from specs
    pub fn fill_defaults(&mut self, specs: &[ParameterSpec]) {
        for spec in specs {
            if !self.values.contains_key(&spec.name) {
                self.values
                    .insert(spec.name.clone(), spec.default_value.clone());
            }
        }
    }

    /// Validate parameters against specs; names not in `specs` are rejected
    pub fn validate(&self, specs: &[ParameterSpec]) -> Result<(), GeneratorError> {
        for name in self.values.keys() {
            if !specs.iter().any(|s| &s.name == name) {
                return Err(GeneratorError::UnknownParameter(name.clone()));
            }
        }

        for spec in specs {
            if let Some(value) = self.values.get(&spec.name) {
                if !spec.param_type.is_compatible_with(value) {
                    return Err(GeneratorError::TypeMismatch {
                        name: spec.name.clone(),
                        expected: spec.param_type.type_name().to_string(),
                    });
                }

                if let Some(constraints) = &spec.constraints {
                    constraints
                        .validate(value)
                        .map_err(|reason| GeneratorError::InvalidParameter {
                            name: spec.name.clone(),
                            reason,
                        })?;
                }
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.values)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let values = serde_json::from_str(json)?;
        Ok(Self { values })
    }
}

impl ParameterSpec {
    fn with_type(
        name: impl Into<String>,
        label: impl Into<String>,
        param_type: ParameterType,
        default_value: ParameterValue,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            param_type,
            default_value,
            constraints: None,
            description: None,
        }
    }

    pub fn float(name: impl Into<String>, label: impl Into<String>, default: f64) -> Self {
        Self::with_type(name, label, ParameterType::Float, ParameterValue::Float(default))
    }

    pub fn int(name: impl Into<String>, label: impl Into<String>, default: i64) -> Self {
        Self::with_type(name, label, ParameterType::Int, ParameterValue::Int(default))
    }

    pub fn variance(name: impl Into<String>, label: impl Into<String>, default: f64) -> Self {
        Self::with_type(
            name,
            label,
            ParameterType::Variance,
            ParameterValue::Float(default),
        )
    }

    /// Weight list defaulting to none (uniform)
    pub fn weights(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_type(name, label, ParameterType::Weights, ParameterValue::None)
    }

    /// Seed defaulting to none (entropy)
    pub fn seed(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_type(name, label, ParameterType::Seed, ParameterValue::None)
    }

    pub fn choice(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
        default: impl Into<String>,
    ) -> Self {
        Self::with_type(
            name,
            label,
            ParameterType::Choice { options },
            ParameterValue::String(default.into()),
        )
    }

    pub fn with_constraints(mut self, constraints: ParameterConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
