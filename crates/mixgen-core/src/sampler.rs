//! Weighted mixture sampling.
//!
//! For grid and circle layouts each sample draws a component index from the
//! categorical distribution over the (normalized) weights, then offsets that
//! component's center by independent Gaussian noise on each axis. Counts per
//! component are random; there is no fixed quota.
//!
//! The spiral has one base position per sample, so it skips the categorical
//! draw and perturbs each position directly (see [`perturb_each`]).

use ndarray::Array2;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{validation, MixtureError, MixtureResult};
use crate::layout::Point;
use crate::noise::{AxisNoise, NoiseSpec};
use crate::weights::WeightVector;

/// Output of a generation call together with the component behind each row
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledSampleSet {
    /// `samples x 2` array of points, in draw order
    pub points: Array2<f64>,

    /// Component index for each row of `points`
    pub components: Vec<usize>,
}

impl LabeledSampleSet {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of rows drawn from each of `components` components
    pub fn component_counts(&self, components: usize) -> Vec<usize> {
        let mut counts = vec![0; components];
        for &c in &self.components {
            if let Some(slot) = counts.get_mut(c) {
                *slot += 1;
            }
        }
        counts
    }
}

/// A validated mixture: ordered centers, their weights, and shared noise
#[derive(Clone, Debug)]
pub struct MixtureSampler {
    centers: Vec<Point>,
    weights: WeightVector,
    noise: NoiseSpec,
}

impl MixtureSampler {
    pub fn new(centers: Vec<Point>, weights: WeightVector, noise: NoiseSpec) -> MixtureResult<Self> {
        if weights.len() != centers.len() {
            return Err(MixtureError::WeightLengthMismatch {
                expected: centers.len(),
                actual: weights.len(),
            });
        }
        Ok(Self {
            centers,
            weights,
            noise,
        })
    }

    /// Build from optional raw proportions (`None` = uniform)
    pub fn with_proportions(
        centers: Vec<Point>,
        proportions: Option<&[f64]>,
        noise: NoiseSpec,
    ) -> MixtureResult<Self> {
        let weights = WeightVector::resolve(proportions, centers.len())?;
        Self::new(centers, weights, noise)
    }

    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    pub fn noise(&self) -> NoiseSpec {
        self.noise
    }

    /// Unbounded lazy stream of `(component, point)` pairs
    pub fn iter_labeled<R: Rng>(&self, rng: R) -> MixtureResult<SampleIter<'_, R>> {
        Ok(SampleIter {
            centers: &self.centers,
            categorical: self.weights.categorical()?,
            noise: self.noise.distributions()?,
            rng,
        })
    }

    /// Unbounded lazy stream of points
    pub fn iter<'a, R: Rng + 'a>(
        &'a self,
        rng: R,
    ) -> MixtureResult<impl Iterator<Item = Point> + 'a> {
        Ok(self.iter_labeled(rng)?.map(|(_, point)| point))
    }

    /// Draw `samples` points into a `samples x 2` array
    pub fn sample<R: Rng>(&self, samples: usize, rng: R) -> MixtureResult<Array2<f64>> {
        Ok(self.sample_labeled(samples, rng)?.points)
    }

    /// Draw `samples` points and keep the component index of each
    pub fn sample_labeled<R: Rng>(&self, samples: usize, rng: R) -> MixtureResult<LabeledSampleSet> {
        validation::validate_sample_count(samples)?;
        let draws = self.iter_labeled(rng)?.take(samples);
        Ok(collect_labeled(samples, draws))
    }
}

/// Lazy sampler returned by [`MixtureSampler::iter_labeled`]
pub struct SampleIter<'a, R> {
    centers: &'a [Point],
    categorical: WeightedIndex<f64>,
    noise: AxisNoise,
    rng: R,
}

impl<R: Rng> Iterator for SampleIter<'_, R> {
    type Item = (usize, Point);

    fn next(&mut self) -> Option<Self::Item> {
        let component = self.categorical.sample(&mut self.rng);
        let point = self.noise.perturb(self.centers[component], &mut self.rng);
        Some((component, point))
    }
}

/// Perturb every base position once, keeping input order.
///
/// Row `i` of the output is labeled with component `i`.
pub fn perturb_each<R: Rng>(
    positions: &[Point],
    noise: NoiseSpec,
    mut rng: R,
) -> MixtureResult<LabeledSampleSet> {
    validation::validate_sample_count(positions.len())?;
    let axis = noise.distributions()?;
    let draws = positions
        .iter()
        .enumerate()
        .map(|(i, &p)| (i, axis.perturb(p, &mut rng)));
    Ok(collect_labeled(positions.len(), draws))
}

fn collect_labeled(samples: usize, draws: impl Iterator<Item = (usize, Point)>) -> LabeledSampleSet {
    let mut points = Array2::<f64>::zeros((samples, 2));
    let mut components = Vec::with_capacity(samples);

    for (mut row, (component, [x, y])) in points.rows_mut().into_iter().zip(draws) {
        row[0] = x;
        row[1] = y;
        components.push(component);
    }

    LabeledSampleSet { points, components }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn square() -> Vec<Point> {
        vec![[-1.0, 1.0], [1.0, 1.0], [-1.0, -1.0], [1.0, -1.0]]
    }

    #[test]
    fn test_shape_and_labels() {
        let sampler =
            MixtureSampler::with_proportions(square(), None, NoiseSpec::isotropic(0.01).unwrap())
                .unwrap();
        let out = sampler
            .sample_labeled(100, ChaCha8Rng::seed_from_u64(1))
            .unwrap();
        assert_eq!(out.points.dim(), (100, 2));
        assert_eq!(out.len(), 100);
        assert!(out.components.iter().all(|&c| c < 4));
        assert_eq!(out.component_counts(4).iter().sum::<usize>(), 100);
    }

    #[test]
    fn test_zero_weight_components_never_drawn() {
        let sampler = MixtureSampler::with_proportions(
            square(),
            Some(&[0.0, 1.0, 0.0, 3.0]),
            NoiseSpec::isotropic(0.0).unwrap(),
        )
        .unwrap();
        let out = sampler
            .sample_labeled(500, ChaCha8Rng::seed_from_u64(2))
            .unwrap();
        let counts = out.component_counts(4);
        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
        assert!(counts[3] > counts[1]);
    }

    #[test]
    fn test_zero_variance_hits_centers() {
        let sampler =
            MixtureSampler::with_proportions(square(), None, NoiseSpec::isotropic(0.0).unwrap())
                .unwrap();
        let out = sampler
            .sample_labeled(20, ChaCha8Rng::seed_from_u64(3))
            .unwrap();
        for (row, &c) in out.points.rows().into_iter().zip(out.components.iter()) {
            assert_eq!([row[0], row[1]], square()[c]);
        }
    }

    #[test]
    fn test_iter_matches_array() {
        let sampler =
            MixtureSampler::with_proportions(square(), None, NoiseSpec::isotropic(0.1).unwrap())
                .unwrap();
        let array = sampler.sample(10, ChaCha8Rng::seed_from_u64(4)).unwrap();
        let lazy: Vec<Point> = sampler
            .iter(ChaCha8Rng::seed_from_u64(4))
            .unwrap()
            .take(10)
            .collect();
        for (row, p) in array.rows().into_iter().zip(lazy.iter()) {
            assert_eq!([row[0], row[1]], *p);
        }
    }

    #[test]
    fn test_zero_samples_rejected() {
        let sampler =
            MixtureSampler::with_proportions(square(), None, NoiseSpec::isotropic(0.1).unwrap())
                .unwrap();
        assert_eq!(
            sampler.sample(0, ChaCha8Rng::seed_from_u64(0)),
            Err(MixtureError::InvalidSampleCount(0))
        );
    }

    #[test]
    fn test_weight_length_checked() {
        let weights = WeightVector::uniform(3).unwrap();
        assert!(matches!(
            MixtureSampler::new(square(), weights, NoiseSpec::isotropic(0.1).unwrap()),
            Err(MixtureError::WeightLengthMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_perturb_each_keeps_order() {
        let positions = vec![[0.0, 0.0], [1.0, 2.0], [3.0, 4.0]];
        let out = perturb_each(
            &positions,
            NoiseSpec::isotropic(0.0).unwrap(),
            ChaCha8Rng::seed_from_u64(5),
        )
        .unwrap();
        assert_eq!(out.components, vec![0, 1, 2]);
        assert_eq!(out.points[[1, 0]], 1.0);
        assert_eq!(out.points[[2, 1]], 4.0);
    }
}
