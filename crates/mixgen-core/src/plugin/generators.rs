//! Built-in generators: Gaussian grid, Gaussian circle, Archimedean spiral.
//!
//! Each one resolves its parameters into the matching typed config and calls
//! the dataset entry point, so both paths produce the same data for the same
//! inputs.

use crate::dataset::{self, CircleConfig, GridConfig, SpiralConfig};
use crate::layout::SpiralSpacing;
use crate::noise::{Variance, DEFAULT_VARIANCE};
use crate::plugin::{
    DataGenerator, GeneratedData, GeneratorError, GeneratorMetadata, GeneratorParams, LayoutKind,
    ParameterConstraints, ParameterSpec,
};

fn common_parameters() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::variance("variance", "Variance", DEFAULT_VARIANCE)
            .with_description("Scalar, or [var_x, var_y] for per-axis noise"),
        ParameterSpec::int("samples", "Samples", dataset::DEFAULT_SAMPLES as i64)
            .with_constraints(ParameterConstraints::min(1.0))
            .with_description("Total number of points"),
        ParameterSpec::seed("random_state", "Seed")
            .with_description("Seed for reproducible output; none for a fresh draw"),
    ]
}

/// Prepare params: reject bad input, then take defaults for everything unset
fn prepare(
    generator: &dyn DataGenerator,
    params: &GeneratorParams,
) -> Result<GeneratorParams, GeneratorError> {
    generator.validate_params(params)?;
    let mut resolved = params.clone();
    resolved.fill_defaults(&generator.metadata().parameters);
    Ok(resolved)
}

/// Gaussian grid generator
pub struct GridGenerator {
    metadata: GeneratorMetadata,
}

impl GridGenerator {
    pub fn new() -> Self {
        let defaults = GridConfig::default();
        let mut parameters = vec![
            ParameterSpec::int("rows", "Rows", defaults.rows as i64)
                .with_constraints(ParameterConstraints::min(2.0)),
            ParameterSpec::int("cols", "Columns", defaults.cols as i64)
                .with_constraints(ParameterConstraints::min(2.0)),
            ParameterSpec::float("grid_width", "Grid Width", defaults.grid_width)
                .with_constraints(ParameterConstraints::min(0.0)),
            ParameterSpec::float("grid_height", "Grid Height", defaults.grid_height)
                .with_constraints(ParameterConstraints::min(0.0)),
            ParameterSpec::weights("sample_weights", "Sample Weights")
                .with_description("Proportions per component, row-major from the top-left"),
        ];
        parameters.extend(common_parameters());

        Self {
            metadata: GeneratorMetadata {
                id: "mixture-grid".to_string(),
                name: "Gaussian Grid".to_string(),
                layout: LayoutKind::Grid,
                description: "Gaussian components on an evenly spaced rectangular grid"
                    .to_string(),
                parameters,
            },
        }
    }

    /// Resolve parameters into a grid config
    pub fn config(&self, params: &GeneratorParams) -> Result<GridConfig, GeneratorError> {
        let p = prepare(self, params)?;
        let defaults = GridConfig::default();
        Ok(GridConfig {
            rows: p.get_count_or("rows", defaults.rows)?,
            cols: p.get_count_or("cols", defaults.cols)?,
            grid_width: p.get_float_or("grid_width", defaults.grid_width),
            grid_height: p.get_float_or("grid_height", defaults.grid_height),
            variance: p.get_variance_or("variance", Variance::default()),
            samples: p.get_count_or("samples", defaults.samples)?,
            sample_weights: p.get_weights("sample_weights"),
            random_state: p.get_seed("random_state"),
        })
    }
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator for GridGenerator {
    fn metadata(&self) -> &GeneratorMetadata {
        &self.metadata
    }

    fn generate(&self, params: &GeneratorParams) -> Result<GeneratedData, GeneratorError> {
        let config = self.config(params)?;
        let set = dataset::grid_gaussian_labeled(&config)?;
        Ok(GeneratedData::from_labeled(&set)
            .with_metadata("generator", self.metadata.id.as_str())
            .with_metadata("components", (config.rows * config.cols).to_string()))
    }
}

/// Gaussian circle generator
pub struct CircleGenerator {
    metadata: GeneratorMetadata,
}

impl CircleGenerator {
    pub fn new() -> Self {
        let defaults = CircleConfig::default();
        let mut parameters = vec![
            ParameterSpec::int("modes", "Modes", defaults.modes as i64)
                .with_constraints(ParameterConstraints::min(1.0)),
            ParameterSpec::float("radius", "Radius", defaults.radius)
                .with_constraints(ParameterConstraints::min(0.0)),
            ParameterSpec::weights("sample_weights", "Sample Weights")
                .with_description("Proportions per mode, counter-clockwise from north"),
        ];
        parameters.extend(common_parameters());

        Self {
            metadata: GeneratorMetadata {
                id: "mixture-circle".to_string(),
                name: "Gaussian Circle".to_string(),
                layout: LayoutKind::Circle,
                description: "Gaussian modes evenly spaced around a circle".to_string(),
                parameters,
            },
        }
    }

    /// Resolve parameters into a circle config
    pub fn config(&self, params: &GeneratorParams) -> Result<CircleConfig, GeneratorError> {
        let p = prepare(self, params)?;
        let defaults = CircleConfig::default();
        Ok(CircleConfig {
            modes: p.get_count_or("modes", defaults.modes)?,
            radius: p.get_float_or("radius", defaults.radius),
            variance: p.get_variance_or("variance", Variance::default()),
            samples: p.get_count_or("samples", defaults.samples)?,
            sample_weights: p.get_weights("sample_weights"),
            random_state: p.get_seed("random_state"),
        })
    }
}

impl Default for CircleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator for CircleGenerator {
    fn metadata(&self) -> &GeneratorMetadata {
        &self.metadata
    }

    fn generate(&self, params: &GeneratorParams) -> Result<GeneratedData, GeneratorError> {
        let config = self.config(params)?;
        let set = dataset::circular_gaussian_labeled(&config)?;
        Ok(GeneratedData::from_labeled(&set)
            .with_metadata("generator", self.metadata.id.as_str())
            .with_metadata("components", config.modes.to_string()))
    }
}

/// Archimedean spiral generator
pub struct SpiralGenerator {
    metadata: GeneratorMetadata,
}

impl SpiralGenerator {
    pub fn new() -> Self {
        let defaults = SpiralConfig::default();
        let mut parameters = vec![
            ParameterSpec::float("revolutions", "Revolutions", defaults.revolutions)
                .with_constraints(ParameterConstraints::positive()),
            ParameterSpec::float("scale", "Scale", defaults.scale)
                .with_description("Radius growth per radian"),
            ParameterSpec::choice(
                "spacing",
                "Spacing",
                vec!["angle".to_string(), "square_root".to_string()],
                "angle",
            )
            .with_description("Equal angle steps, or sqrt steps for even arc density"),
        ];
        parameters.extend(common_parameters());

        Self {
            metadata: GeneratorMetadata {
                id: "mixture-spiral".to_string(),
                name: "Archimedean Spiral".to_string(),
                layout: LayoutKind::Spiral,
                description: "Noisy points along the spiral r = scale * theta".to_string(),
                parameters,
            },
        }
    }

    /// Resolve parameters into a spiral config
    pub fn config(&self, params: &GeneratorParams) -> Result<SpiralConfig, GeneratorError> {
        let p = prepare(self, params)?;
        let defaults = SpiralConfig::default();
        let spacing = match p.get_string_or("spacing", "angle") {
            "square_root" => SpiralSpacing::SquareRoot,
            _ => SpiralSpacing::Angle,
        };
        Ok(SpiralConfig {
            revolutions: p.get_float_or("revolutions", defaults.revolutions),
            scale: p.get_float_or("scale", defaults.scale),
            variance: p.get_variance_or("variance", Variance::default()),
            samples: p.get_count_or("samples", defaults.samples)?,
            random_state: p.get_seed("random_state"),
            spacing,
        })
    }
}

impl Default for SpiralGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator for SpiralGenerator {
    fn metadata(&self) -> &GeneratorMetadata {
        &self.metadata
    }

    fn generate(&self, params: &GeneratorParams) -> Result<GeneratedData, GeneratorError> {
        let config = self.config(params)?;
        let set = dataset::archimedean_spiral_labeled(&config)?;
        Ok(GeneratedData::from_labeled(&set)
            .with_metadata("generator", self.metadata.id.as_str())
            .with_metadata("revolutions", config.revolutions.to_string()))
    }
}
