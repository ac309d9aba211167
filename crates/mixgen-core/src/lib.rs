//! mixgen-core - Synthetic 2D Gaussian mixture datasets
//!
//! Toy point clouds for evaluating generative models. Three layouts are
//! provided:
//!
//! - **Grid**: `rows x cols` Gaussian components evenly spaced over a rectangle
//! - **Circle**: `modes` Gaussian components evenly spaced around a circle
//! - **Spiral**: noisy points along the Archimedean spiral `r = scale * theta`
//!
//! # Key Components
//!
//! - **Layout**: ordered component centers (spiral: one base point per sample)
//! - **Sampler**: categorical draw over weighted components plus per-axis noise
//! - **Dataset**: typed configs with defaults, JSON/TOML loading, entry points
//! - **Plugin**: keyword-parameter generators and a registry keyed by id
//!
//! # Example
//!
//! ```
//! use mixgen_core::{grid_gaussian, GridConfig};
//!
//! let config = GridConfig {
//!     rows: 3,
//!     cols: 3,
//!     samples: 500,
//!     random_state: Some(42),
//!     ..Default::default()
//! };
//! let points = grid_gaussian(&config).unwrap();
//! assert_eq!(points.dim(), (500, 2));
//! ```

pub mod dataset;
pub mod error;
pub mod layout;
pub mod noise;
pub mod plugin;
pub mod rng;
pub mod sampler;
pub mod weights;

pub use dataset::{
    archimedean_spiral, archimedean_spiral_labeled, circular_gaussian, circular_gaussian_labeled,
    grid_gaussian, grid_gaussian_labeled, CircleConfig, GridConfig, SpiralConfig,
};
pub use error::{MixtureError, MixtureResult};
pub use layout::{Point, SpiralSpacing};
pub use noise::{NoiseSpec, Variance};
pub use plugin::{DataGenerator, GeneratedData, GeneratorError, GeneratorParams, GeneratorRegistry};
pub use rng::RandomState;
pub use sampler::{LabeledSampleSet, MixtureSampler};
pub use weights::WeightVector;
