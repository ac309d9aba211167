//! Component weights.
//!
//! Weights are proportions and do not need to sum to one. They are normalized
//! once; an absent weight vector means every component is equally likely.

use rand::distributions::WeightedIndex;

use crate::error::{MixtureError, MixtureResult};

/// Normalized sampling probabilities, one per component
#[derive(Clone, Debug, PartialEq)]
pub struct WeightVector {
    probabilities: Vec<f64>,
}

impl WeightVector {
    /// Equal probability for `components` components
    pub fn uniform(components: usize) -> MixtureResult<Self> {
        if components == 0 {
            return Err(MixtureError::InvalidWeights {
                reason: "at least one component is required".to_string(),
            });
        }
        let p = 1.0 / components as f64;
        Ok(Self {
            probabilities: vec![p; components],
        })
    }

    /// Normalize raw proportions, checking them against the component count
    pub fn from_proportions(weights: &[f64], components: usize) -> MixtureResult<Self> {
        if weights.len() != components {
            return Err(MixtureError::WeightLengthMismatch {
                expected: components,
                actual: weights.len(),
            });
        }
        if let Some((i, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(MixtureError::InvalidWeights {
                reason: format!("weight {} is {} (must be finite and >= 0)", i, w),
            });
        }

        // Scale by the largest weight first so huge finite weights cannot
        // overflow the sum
        let largest = weights.iter().copied().fold(0.0, f64::max);
        if largest <= 0.0 {
            return Err(MixtureError::InvalidWeights {
                reason: "weights must have a positive sum, got 0".to_string(),
            });
        }
        let scaled: Vec<f64> = weights.iter().map(|w| w / largest).collect();
        let total: f64 = scaled.iter().sum();

        Ok(Self {
            probabilities: scaled.iter().map(|w| w / total).collect(),
        })
    }

    /// Resolve optional caller weights: `None` becomes uniform
    pub fn resolve(weights: Option<&[f64]>, components: usize) -> MixtureResult<Self> {
        match weights {
            Some(w) => Self::from_proportions(w, components),
            None => Self::uniform(components),
        }
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Categorical distribution over component indices
    pub(crate) fn categorical(&self) -> MixtureResult<WeightedIndex<f64>> {
        WeightedIndex::new(&self.probabilities).map_err(|e| MixtureError::InvalidWeights {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let w = WeightVector::uniform(4).unwrap();
        assert_eq!(w.probabilities(), &[0.25, 0.25, 0.25, 0.25]);
        assert!(WeightVector::uniform(0).is_err());
    }

    #[test]
    fn test_normalization() {
        let w = WeightVector::from_proportions(&[1.0, 1.0, 2.0], 3).unwrap();
        assert_eq!(w.probabilities(), &[0.25, 0.25, 0.5]);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let w = WeightVector::from_proportions(&[f64::MAX, f64::MAX], 2).unwrap();
        assert_eq!(w.probabilities(), &[0.5, 0.5]);

        let w = WeightVector::from_proportions(&[1e308, 1e308, 0.0, 1e308], 4).unwrap();
        assert_eq!(w.probabilities(), &[1.0 / 3.0, 1.0 / 3.0, 0.0, 1.0 / 3.0]);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            WeightVector::from_proportions(&[1.0, 2.0], 3),
            Err(MixtureError::WeightLengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_invalid_weights() {
        assert!(matches!(
            WeightVector::from_proportions(&[0.0, 0.0], 2),
            Err(MixtureError::InvalidWeights { .. })
        ));
        assert!(matches!(
            WeightVector::from_proportions(&[1.0, -0.5], 2),
            Err(MixtureError::InvalidWeights { .. })
        ));
        assert!(matches!(
            WeightVector::from_proportions(&[1.0, f64::NAN], 2),
            Err(MixtureError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_resolve() {
        let w = WeightVector::resolve(None, 2).unwrap();
        assert_eq!(w.len(), 2);
        let w = WeightVector::resolve(Some(&[3.0, 1.0]), 2).unwrap();
        assert_eq!(w.probabilities(), &[0.75, 0.25]);
    }

    #[test]
    fn test_single_nonzero_weight_builds_categorical() {
        let w = WeightVector::from_proportions(&[1.0, 0.0, 0.0, 0.0], 4).unwrap();
        assert!(w.categorical().is_ok());
    }
}
