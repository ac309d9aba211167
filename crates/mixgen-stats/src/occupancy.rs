//! Empirical component occupancy
//!
//! Assigns every point to its nearest component center and reports how the
//! points split across components. For a mixture whose components are well
//! separated relative to the noise, the proportions converge to the mixture
//! weights as the sample count grows.

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::summary::check_two_columns;
use crate::{StatsError, StatsResult};

/// Nearest-center counts for a point cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOccupancy {
    /// Points assigned to each center, in center order
    pub counts: Vec<usize>,
    pub total: usize,
}

impl ComponentOccupancy {
    /// Assign each row of `points` to the nearest of `centers`
    ///
    /// Ties go to the lower center index.
    pub fn assign(points: ArrayView2<'_, f64>, centers: &[[f64; 2]]) -> StatsResult<Self> {
        check_two_columns(points)?;
        if centers.is_empty() {
            return Err(StatsError::NoCenters);
        }

        let mut counts = vec![0; centers.len()];
        for row in points.rows() {
            let mut best = 0;
            let mut best_d2 = f64::INFINITY;
            for (i, c) in centers.iter().enumerate() {
                let dx = row[0] - c[0];
                let dy = row[1] - c[1];
                let d2 = dx * dx + dy * dy;
                if d2 < best_d2 {
                    best = i;
                    best_d2 = d2;
                }
            }
            counts[best] += 1;
        }

        Ok(Self {
            counts,
            total: points.nrows(),
        })
    }

    /// Fraction of points per center (all zero for an empty cloud)
    pub fn proportions(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&c| c as f64 / self.total as f64)
            .collect()
    }

    /// Largest absolute gap between empirical and expected proportions
    ///
    /// `expected` is normalized first, so raw proportions are accepted.
    pub fn max_abs_deviation(&self, expected: &[f64]) -> StatsResult<f64> {
        if expected.len() != self.counts.len() {
            return Err(StatsError::LengthMismatch {
                expected: self.counts.len(),
                actual: expected.len(),
            });
        }
        let total: f64 = expected.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(StatsError::InvalidWeights(total));
        }

        Ok(self
            .proportions()
            .iter()
            .zip(expected.iter())
            .map(|(p, w)| (p - w / total).abs())
            .fold(0.0, f64::max))
    }

    /// Number of centers that received at least one point
    pub fn occupied(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}
