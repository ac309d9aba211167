//! Dataset configurations and generation entry points.
//!
//! Each layout has a configuration struct with the documented defaults. A
//! call validates the whole configuration first, then builds its own random
//! generator from `random_state` and samples. Configurations load from JSON
//! or TOML; missing fields take their defaults.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{validation, MixtureError, MixtureResult};
use crate::layout::{self, Point, SpiralSpacing};
use crate::noise::{NoiseSpec, Variance};
use crate::rng::RandomState;
use crate::sampler::{self, LabeledSampleSet, MixtureSampler};

/// Default number of samples for every layout
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Gaussian grid dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of rows (must be > 1)
    pub rows: usize,
    /// Number of columns (must be > 1)
    pub cols: usize,
    /// Width of the domain centred on the origin
    pub grid_width: f64,
    /// Height of the domain centred on the origin
    pub grid_height: f64,
    pub variance: Variance,
    pub samples: usize,
    /// Proportions in row-major order, top-left first; `None` is uniform
    pub sample_weights: Option<Vec<f64>>,
    /// Seed; `None` draws from OS entropy
    pub random_state: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            grid_width: 10.0,
            grid_height: 10.0,
            variance: Variance::default(),
            samples: DEFAULT_SAMPLES,
            sample_weights: None,
            random_state: None,
        }
    }
}

/// Gaussian circle dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Number of modes (must be >= 1)
    pub modes: usize,
    pub radius: f64,
    pub variance: Variance,
    pub samples: usize,
    /// Proportions counter-clockwise from the north mode; `None` is uniform
    pub sample_weights: Option<Vec<f64>>,
    pub random_state: Option<u64>,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            modes: 8,
            radius: 5.0,
            variance: Variance::default(),
            samples: DEFAULT_SAMPLES,
            sample_weights: None,
            random_state: None,
        }
    }
}

/// Archimedean spiral dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub revolutions: f64,
    /// Radius growth per radian (`r = scale * theta`)
    pub scale: f64,
    pub variance: Variance,
    pub samples: usize,
    pub random_state: Option<u64>,
    pub spacing: SpiralSpacing,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            revolutions: 2.0,
            scale: 1.0,
            variance: Variance::default(),
            samples: DEFAULT_SAMPLES,
            random_state: None,
            spacing: SpiralSpacing::Angle,
        }
    }
}

macro_rules! config_io {
    ($ty:ty) => {
        impl $ty {
            /// Load configuration from a JSON string
            pub fn from_json(json_str: &str) -> MixtureResult<Self> {
                serde_json::from_str(json_str).map_err(|e| MixtureError::Config(e.to_string()))
            }

            /// Serialize configuration to JSON
            pub fn to_json(&self) -> MixtureResult<String> {
                serde_json::to_string_pretty(self).map_err(|e| MixtureError::Config(e.to_string()))
            }

            /// Load configuration from a TOML string
            pub fn from_toml(toml_str: &str) -> MixtureResult<Self> {
                toml::from_str(toml_str).map_err(|e| MixtureError::Config(e.to_string()))
            }

            /// Serialize configuration to TOML
            pub fn to_toml(&self) -> MixtureResult<String> {
                toml::to_string_pretty(self).map_err(|e| MixtureError::Config(e.to_string()))
            }

            pub fn random_state(&self) -> RandomState {
                RandomState::from_seed(self.random_state)
            }
        }
    };
}

config_io!(GridConfig);
config_io!(CircleConfig);
config_io!(SpiralConfig);

impl GridConfig {
    /// Component centers in `sample_weights` order
    pub fn centers(&self) -> MixtureResult<Vec<Point>> {
        layout::grid_centers(self.rows, self.cols, self.grid_width, self.grid_height)
    }

    /// Validate every field and build the sampler
    pub fn sampler(&self) -> MixtureResult<MixtureSampler> {
        let centers = self.centers()?;
        let noise = self.variance.to_noise_spec()?;
        validation::validate_sample_count(self.samples)?;
        MixtureSampler::with_proportions(centers, self.sample_weights.as_deref(), noise)
    }

    pub fn validate(&self) -> MixtureResult<()> {
        self.sampler().map(|_| ())
    }
}

impl CircleConfig {
    /// Component centers in `sample_weights` order
    pub fn centers(&self) -> MixtureResult<Vec<Point>> {
        layout::circle_centers(self.modes, self.radius)
    }

    /// Validate every field and build the sampler
    pub fn sampler(&self) -> MixtureResult<MixtureSampler> {
        let centers = self.centers()?;
        let noise = self.variance.to_noise_spec()?;
        validation::validate_sample_count(self.samples)?;
        MixtureSampler::with_proportions(centers, self.sample_weights.as_deref(), noise)
    }

    pub fn validate(&self) -> MixtureResult<()> {
        self.sampler().map(|_| ())
    }
}

impl SpiralConfig {
    /// One base position per sample
    pub fn positions(&self) -> MixtureResult<Vec<Point>> {
        layout::spiral_positions(self.revolutions, self.scale, self.samples, self.spacing)
    }

    /// Outward normal angle at each base position
    pub fn normal_angles(&self) -> MixtureResult<Vec<f64>> {
        layout::spiral_normal_angles(self.revolutions, self.scale, self.samples, self.spacing)
    }

    pub fn noise(&self) -> MixtureResult<NoiseSpec> {
        self.variance.to_noise_spec()
    }

    pub fn validate(&self) -> MixtureResult<()> {
        validation::validate_sample_count(self.samples)?;
        layout::validate_spiral_extent(self.revolutions, self.scale)?;
        self.noise().map(|_| ())
    }
}

/// Sample a Gaussian grid dataset as a `samples x 2` array
pub fn grid_gaussian(config: &GridConfig) -> MixtureResult<Array2<f64>> {
    grid_gaussian_labeled(config).map(|set| set.points)
}

/// Sample a Gaussian grid dataset, keeping the component of each point
pub fn grid_gaussian_labeled(config: &GridConfig) -> MixtureResult<LabeledSampleSet> {
    let sampler = config.sampler()?;
    tracing::debug!(
        rows = config.rows,
        cols = config.cols,
        samples = config.samples,
        seeded = config.random_state.is_some(),
        "sampling gaussian grid"
    );
    sampler.sample_labeled(config.samples, config.random_state().build_rng())
}

/// Sample a Gaussian circle dataset as a `samples x 2` array
pub fn circular_gaussian(config: &CircleConfig) -> MixtureResult<Array2<f64>> {
    circular_gaussian_labeled(config).map(|set| set.points)
}

/// Sample a Gaussian circle dataset, keeping the mode of each point
pub fn circular_gaussian_labeled(config: &CircleConfig) -> MixtureResult<LabeledSampleSet> {
    let sampler = config.sampler()?;
    tracing::debug!(
        modes = config.modes,
        radius = config.radius,
        samples = config.samples,
        seeded = config.random_state.is_some(),
        "sampling gaussian circle"
    );
    sampler.sample_labeled(config.samples, config.random_state().build_rng())
}

/// Sample an Archimedean spiral dataset as a `samples x 2` array
pub fn archimedean_spiral(config: &SpiralConfig) -> MixtureResult<Array2<f64>> {
    archimedean_spiral_labeled(config).map(|set| set.points)
}

/// Sample an Archimedean spiral dataset; labels are base position indices
pub fn archimedean_spiral_labeled(config: &SpiralConfig) -> MixtureResult<LabeledSampleSet> {
    config.validate()?;
    let noise = config.noise()?;
    let positions = config.positions()?;
    tracing::debug!(
        revolutions = config.revolutions,
        scale = config.scale,
        samples = config.samples,
        spacing = ?config.spacing,
        seeded = config.random_state.is_some(),
        "sampling archimedean spiral"
    );
    if let Some(last) = positions.last() {
        tracing::trace!(end_x = last[0], end_y = last[1], "spiral end point");
    }
    sampler::perturb_each(&positions, noise, config.random_state().build_rng())
}
