//! Property-based tests for layouts and sample shapes

use mixgen_core::layout::{circle_centers, grid_centers, spiral_positions};
use mixgen_core::{
    archimedean_spiral, circular_gaussian, grid_gaussian, CircleConfig, GridConfig, SpiralConfig,
    SpiralSpacing, Variance,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_grid_extremes_are_exact(
        rows in 2usize..12,
        cols in 2usize..12,
        width in 0.1f64..100.0,
        height in 0.1f64..100.0
    ) {
        let centers = grid_centers(rows, cols, width, height).unwrap();
        prop_assert_eq!(centers.len(), rows * cols);

        let xs = centers.iter().map(|c| c[0]);
        let ys = centers.iter().map(|c| c[1]);
        prop_assert_eq!(xs.clone().fold(f64::INFINITY, f64::min), -width / 2.0);
        prop_assert_eq!(xs.fold(f64::NEG_INFINITY, f64::max), width / 2.0);
        prop_assert_eq!(ys.clone().fold(f64::INFINITY, f64::min), -height / 2.0);
        prop_assert_eq!(ys.fold(f64::NEG_INFINITY, f64::max), height / 2.0);
    }

    #[test]
    fn test_odd_grid_is_symmetric(
        half_rows in 1usize..6,
        half_cols in 1usize..6,
        width in 0.1f64..100.0,
        height in 0.1f64..100.0
    ) {
        let rows = 2 * half_rows + 1;
        let cols = 2 * half_cols + 1;
        let centers = grid_centers(rows, cols, width, height).unwrap();
        // Point reflection through the origin maps index i to n-1-i
        let n = centers.len();
        for (i, c) in centers.iter().enumerate() {
            let mirror = centers[n - 1 - i];
            prop_assert_eq!(c[0], -mirror[0]);
            prop_assert_eq!(c[1], -mirror[1]);
        }
    }

    #[test]
    fn test_circle_centers_on_radius(modes in 1usize..64, radius in 0.0f64..100.0) {
        let centers = circle_centers(modes, radius).unwrap();
        prop_assert_eq!(centers.len(), modes);
        prop_assert!(centers[0][0].abs() < 1e-9 * radius.max(1.0));
        prop_assert!((centers[0][1] - radius).abs() < 1e-9 * radius.max(1.0));
        for c in &centers {
            prop_assert!((c[0].hypot(c[1]) - radius).abs() < 1e-9 * radius.max(1.0));
        }
    }

    #[test]
    fn test_spiral_radius_law(
        revolutions in 0.25f64..5.0,
        scale in 0.1f64..3.0,
        samples in 2usize..200
    ) {
        let positions = spiral_positions(revolutions, scale, samples, SpiralSpacing::Angle).unwrap();
        prop_assert_eq!(positions.len(), samples);
        let last = positions[samples - 1];
        let theta_max = std::f64::consts::TAU * revolutions;
        prop_assert!((last[0].hypot(last[1]) - scale * theta_max).abs() < 1e-9 * scale * theta_max);
    }

    #[test]
    fn test_output_shape(samples in 1usize..400, seed in any::<u64>()) {
        let grid = GridConfig { rows: 3, cols: 4, samples, random_state: Some(seed), ..Default::default() };
        prop_assert_eq!(grid_gaussian(&grid).unwrap().dim(), (samples, 2));

        let circle = CircleConfig { samples, random_state: Some(seed), ..Default::default() };
        prop_assert_eq!(circular_gaussian(&circle).unwrap().dim(), (samples, 2));

        let spiral = SpiralConfig { samples, random_state: Some(seed), ..Default::default() };
        prop_assert_eq!(archimedean_spiral(&spiral).unwrap().dim(), (samples, 2));
    }

    #[test]
    fn test_seed_determinism(seed in any::<u64>(), var_x in 0.0f64..1.0, var_y in 0.0f64..1.0) {
        let config = GridConfig {
            rows: 2,
            cols: 3,
            variance: Variance::List(vec![var_x, var_y]),
            samples: 64,
            sample_weights: Some(vec![1.0, 2.0, 3.0, 0.0, 1.0, 1.0]),
            random_state: Some(seed),
            ..Default::default()
        };
        prop_assert_eq!(grid_gaussian(&config).unwrap(), grid_gaussian(&config).unwrap());
    }
}
