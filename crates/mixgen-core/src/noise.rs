//! Gaussian noise specification.
//!
//! A [`Variance`] is what callers write: a single number or a list of one or
//! two numbers. It is normalized once into a [`NoiseSpec`] holding one
//! variance per axis. The two axes are sampled independently; there is no
//! covariance term.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{MixtureError, MixtureResult};

/// Default per-axis variance for every layout
pub const DEFAULT_VARIANCE: f64 = 0.0025;

/// Variance as supplied by the caller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variance {
    /// Same variance on both axes
    Scalar(f64),

    /// `[v]` or `[var_x, var_y]`
    List(Vec<f64>),
}

impl Default for Variance {
    fn default() -> Self {
        Variance::Scalar(DEFAULT_VARIANCE)
    }
}

impl From<f64> for Variance {
    fn from(value: f64) -> Self {
        Variance::Scalar(value)
    }
}

impl From<[f64; 2]> for Variance {
    fn from(value: [f64; 2]) -> Self {
        Variance::List(value.to_vec())
    }
}

impl From<Vec<f64>> for Variance {
    fn from(value: Vec<f64>) -> Self {
        Variance::List(value)
    }
}

impl Variance {
    /// Normalize into a per-axis noise spec
    pub fn to_noise_spec(&self) -> MixtureResult<NoiseSpec> {
        match self {
            Variance::Scalar(v) => NoiseSpec::new(*v, *v),
            Variance::List(values) => match values.as_slice() {
                [v] => NoiseSpec::new(*v, *v),
                [vx, vy] => NoiseSpec::new(*vx, *vy),
                other => Err(MixtureError::InvalidVariance {
                    reason: format!(
                        "expected a scalar or a list of length 1 or 2, got length {}",
                        other.len()
                    ),
                }),
            },
        }
    }
}

/// Validated, uncorrelated per-axis variance
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseSpec {
    pub var_x: f64,
    pub var_y: f64,
}

impl NoiseSpec {
    pub fn new(var_x: f64, var_y: f64) -> MixtureResult<Self> {
        for (axis, v) in [("x", var_x), ("y", var_y)] {
            if !v.is_finite() || v < 0.0 {
                return Err(MixtureError::InvalidVariance {
                    reason: format!("{} variance must be finite and >= 0, got {}", axis, v),
                });
            }
        }
        Ok(Self { var_x, var_y })
    }

    pub fn isotropic(variance: f64) -> MixtureResult<Self> {
        Self::new(variance, variance)
    }

    /// Standard deviations `(sigma_x, sigma_y)`
    pub fn std_devs(&self) -> (f64, f64) {
        (self.var_x.sqrt(), self.var_y.sqrt())
    }

    /// Build the per-axis normal distributions used by the sampler
    pub(crate) fn distributions(&self) -> MixtureResult<AxisNoise> {
        let (sx, sy) = self.std_devs();
        let build = |sigma: f64| {
            Normal::new(0.0, sigma).map_err(|e| MixtureError::InvalidVariance {
                reason: e.to_string(),
            })
        };
        Ok(AxisNoise {
            x: build(sx)?,
            y: build(sy)?,
        })
    }
}

/// Zero-mean normal distribution per axis
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisNoise {
    x: Normal<f64>,
    y: Normal<f64>,
}

impl AxisNoise {
    /// Offset `center` by one independent draw per axis (x first, then y)
    pub(crate) fn perturb<R: Rng + ?Sized>(&self, center: [f64; 2], rng: &mut R) -> [f64; 2] {
        let dx = self.x.sample(rng);
        let dy = self.y.sample(rng);
        [center[0] + dx, center[1] + dy]
    }
}
