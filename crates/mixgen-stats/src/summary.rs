//! Summary statistics for generated point clouds
//!
//! Provides:
//! - Mean, variance, standard deviation
//! - Min, max, range
//! - Robust statistics (median, MAD)
//! - Per-axis summaries of an `n x 2` point array

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::{StatsError, StatsResult};

/// Summary statistics for a numeric dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of finite values
    pub count: usize,
    /// Number of missing/NaN values
    pub missing: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
    pub median: f64,
    /// Median Absolute Deviation
    pub mad: f64,
}

impl SummaryStats {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let mut finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Self::empty(missing);
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        finite.sort_by(f64::total_cmp);
        let min = finite[0];
        let max = finite[count - 1];
        let median = median_of_sorted(&finite);

        let mut deviations: Vec<f64> = finite.iter().map(|x| (x - median).abs()).collect();
        deviations.sort_by(f64::total_cmp);
        let mad = median_of_sorted(&deviations);

        Self {
            count,
            missing,
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
            median,
            mad,
        }
    }

    /// Create empty statistics (all NaN)
    fn empty(missing: usize) -> Self {
        Self {
            count: 0,
            missing,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
            median: f64::NAN,
            mad: f64::NAN,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Compute z-score for a value
    pub fn zscore(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    /// Robust z-score: `(x - median) / (1.4826 * MAD)`
    ///
    /// The constant makes it comparable to the standard z-score for normal data.
    pub fn robust_zscore(&self, x: f64) -> f64 {
        if self.mad == 0.0 {
            return 0.0;
        }
        (x - self.median) / (1.4826 * self.mad)
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Per-axis summary of a 2D point cloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointCloudSummary {
    pub x: SummaryStats,
    pub y: SummaryStats,
}

impl PointCloudSummary {
    /// Summarize the two columns of an `n x 2` array
    pub fn from_points(points: ArrayView2<'_, f64>) -> StatsResult<Self> {
        check_two_columns(points)?;
        Ok(Self {
            x: SummaryStats::from_data(&points.column(0).to_vec()),
            y: SummaryStats::from_data(&points.column(1).to_vec()),
        })
    }

    pub fn centroid(&self) -> [f64; 2] {
        [self.x.mean, self.y.mean]
    }
}

/// Largest Euclidean distance from `reference` to any row of `points`
pub fn max_distance_from(points: ArrayView2<'_, f64>, reference: [f64; 2]) -> StatsResult<f64> {
    check_two_columns(points)?;
    Ok(points
        .rows()
        .into_iter()
        .map(|row| (row[0] - reference[0]).hypot(row[1] - reference[1]))
        .fold(0.0, f64::max))
}

pub(crate) fn check_two_columns(points: ArrayView2<'_, f64>) -> StatsResult<()> {
    if points.ncols() != 2 {
        return Err(StatsError::ShapeMismatch {
            expected: 2,
            actual: points.ncols(),
        });
    }
    Ok(())
}
