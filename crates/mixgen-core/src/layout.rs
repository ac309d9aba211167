//! Center layouts for the three dataset shapes.
//!
//! Grid and circle layouts produce a small, ordered set of mixture
//! components; `sample_weights` index into that order. The spiral produces
//! one base position per output sample instead.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::error::{validation, MixtureError, MixtureResult};

/// A 2D point `[x, y]`
pub type Point = [f64; 2];

/// Evenly spaced centers over `[-w/2, w/2] x [-h/2, h/2]`.
///
/// Endpoints are inclusive, so the corner components sit exactly on the
/// rectangle corners. Order is row-major: top row first, left to right.
/// `rows` and `cols` must both be at least 2.
pub fn grid_centers(
    rows: usize,
    cols: usize,
    grid_width: f64,
    grid_height: f64,
) -> MixtureResult<Vec<Point>> {
    validation::validate_dimension("rows", rows, 2)?;
    validation::validate_dimension("cols", cols, 2)?;
    validation::validate_extent("grid_width", grid_width)?;
    validation::validate_extent("grid_height", grid_height)?;

    let half_w = grid_width / 2.0;
    let half_h = grid_height / 2.0;
    let col_steps = (cols - 1) as f64;
    let row_steps = (rows - 1) as f64;

    // Position as a fraction in [-1, 1] of the half extent. Integer numerators
    // keep both endpoints exact and mirrored cells exact negatives.
    let centers = (0..rows)
        .flat_map(|r| {
            let y = half_h * ((row_steps - 2.0 * r as f64) / row_steps);
            (0..cols).map(move |c| {
                let x = half_w * ((2.0 * c as f64 - col_steps) / col_steps);
                [x, y]
            })
        })
        .collect();

    Ok(centers)
}

/// `modes` centers on a circle, starting at north and going counter-clockwise.
///
/// Center `i` sits at angle `pi/2 + 2*pi*i/modes`.
pub fn circle_centers(modes: usize, radius: f64) -> MixtureResult<Vec<Point>> {
    validation::validate_dimension("modes", modes, 1)?;
    validation::validate_extent("radius", radius)?;

    let step = TAU / modes as f64;
    Ok((0..modes)
        .map(|i| {
            let angle = FRAC_PI_2 + step * i as f64;
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect())
}

/// How base positions are distributed along the spiral
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiralSpacing {
    /// Equal angular steps; density grows toward the center
    #[default]
    Angle,

    /// `theta` proportional to `sqrt(t)`; roughly uniform density along the arc
    SquareRoot,
}

/// Largest spiral angle, `2*pi*revolutions`
fn spiral_theta_max(revolutions: f64) -> MixtureResult<f64> {
    validation::validate_positive("revolutions", revolutions)?;
    let theta_max = TAU * revolutions;
    if !theta_max.is_finite() {
        return Err(MixtureError::InvalidParameter {
            name: "revolutions",
            reason: format!("2*pi*{} overflows", revolutions),
        });
    }
    Ok(theta_max)
}

/// Check that the outermost spiral radius `scale * 2*pi*revolutions` is finite
pub fn validate_spiral_extent(revolutions: f64, scale: f64) -> MixtureResult<()> {
    validation::validate_finite("scale", scale)?;
    let theta_max = spiral_theta_max(revolutions)?;
    if !(scale * theta_max).is_finite() {
        return Err(MixtureError::InvalidParameter {
            name: "scale",
            reason: format!("outer radius {} * {} overflows", scale, theta_max),
        });
    }
    Ok(())
}

/// Angles `theta_i` in `[0, 2*pi*revolutions]` for `samples` points
pub fn spiral_angles(
    revolutions: f64,
    samples: usize,
    spacing: SpiralSpacing,
) -> MixtureResult<Vec<f64>> {
    validation::validate_sample_count(samples)?;
    let theta_max = spiral_theta_max(revolutions)?;
    if samples == 1 {
        return Ok(vec![0.0]);
    }

    let last = (samples - 1) as f64;
    Ok((0..samples)
        .map(|i| {
            let t = i as f64 / last;
            match spacing {
                SpiralSpacing::Angle => t * theta_max,
                SpiralSpacing::SquareRoot => t.sqrt() * theta_max,
            }
        })
        .collect())
}

/// Base positions on the Archimedean spiral `r = scale * theta`
pub fn spiral_positions(
    revolutions: f64,
    scale: f64,
    samples: usize,
    spacing: SpiralSpacing,
) -> MixtureResult<Vec<Point>> {
    validate_spiral_extent(revolutions, scale)?;
    let angles = spiral_angles(revolutions, samples, spacing)?;
    Ok(angles
        .into_iter()
        .map(|theta| {
            let r = scale * theta;
            [r * theta.cos(), r * theta.sin()]
        })
        .collect())
}

/// Angle of the outward normal at each spiral base position.
///
/// The tangent of `(s*t*cos t, s*t*sin t)` is
/// `s*(cos t - t sin t, sin t + t cos t)`; the normal is that rotated by
/// `-pi/2`. For negative `scale` the curve is mirrored through the origin and
/// the normal flips with it.
pub fn spiral_normal_angles(
    revolutions: f64,
    scale: f64,
    samples: usize,
    spacing: SpiralSpacing,
) -> MixtureResult<Vec<f64>> {
    validate_spiral_extent(revolutions, scale)?;
    let angles = spiral_angles(revolutions, samples, spacing)?;
    let flip = if scale < 0.0 { PI } else { 0.0 };
    Ok(angles
        .into_iter()
        .map(|theta| {
            let tx = theta.cos() - theta * theta.sin();
            let ty = theta.sin() + theta * theta.cos();
            ty.atan2(tx) - FRAC_PI_2 + flip
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: Point, b: Point) -> bool {
        (a[0] - b[0]).abs() < EPS && (a[1] - b[1]).abs() < EPS
    }

    #[test]
    fn test_grid_order_is_row_major_from_top() {
        let centers = grid_centers(2, 3, 4.0, 2.0).unwrap();
        assert_eq!(
            centers,
            vec![
                [-2.0, 1.0],
                [0.0, 1.0],
                [2.0, 1.0],
                [-2.0, -1.0],
                [0.0, -1.0],
                [2.0, -1.0],
            ]
        );
    }

    #[test]
    fn test_grid_corners_exact() {
        let centers = grid_centers(5, 5, 10.0, 10.0).unwrap();
        assert_eq!(centers.len(), 25);
        assert_eq!(centers[0], [-5.0, 5.0]);
        assert_eq!(centers[4], [5.0, 5.0]);
        assert_eq!(centers[20], [-5.0, -5.0]);
        assert_eq!(centers[24], [5.0, -5.0]);
        assert_eq!(centers[12], [0.0, 0.0]);
    }

    #[test]
    fn test_grid_rejects_single_row_or_col() {
        assert!(matches!(
            grid_centers(1, 5, 10.0, 10.0),
            Err(MixtureError::InvalidDimension { name: "rows", .. })
        ));
        assert!(matches!(
            grid_centers(5, 0, 10.0, 10.0),
            Err(MixtureError::InvalidDimension { name: "cols", .. })
        ));
        assert!(grid_centers(2, 2, -1.0, 1.0).is_err());
    }

    #[test]
    fn test_circle_starts_north_counter_clockwise() {
        let centers = circle_centers(4, 1.0).unwrap();
        assert!(close(centers[0], [0.0, 1.0]));
        assert!(close(centers[1], [-1.0, 0.0]));
        assert!(close(centers[2], [0.0, -1.0]));
        assert!(close(centers[3], [1.0, 0.0]));
    }

    #[test]
    fn test_circle_single_mode() {
        let centers = circle_centers(1, 3.0).unwrap();
        assert_eq!(centers.len(), 1);
        assert!(close(centers[0], [0.0, 3.0]));
        assert!(circle_centers(0, 3.0).is_err());
    }

    #[test]
    fn test_spiral_endpoints() {
        let pts = spiral_positions(1.0, 1.0, 2, SpiralSpacing::Angle).unwrap();
        assert_eq!(pts[0], [0.0, 0.0]);
        assert!((pts[1][0] - TAU).abs() < 1e-9);
        assert!(pts[1][1].abs() < 1e-9);
    }

    #[test]
    fn test_spiral_single_sample_at_origin() {
        let pts = spiral_positions(2.0, 1.0, 1, SpiralSpacing::Angle).unwrap();
        assert_eq!(pts, vec![[0.0, 0.0]]);
    }

    #[test]
    fn test_spiral_spacing() {
        let linear = spiral_angles(1.0, 5, SpiralSpacing::Angle).unwrap();
        let sqrt = spiral_angles(1.0, 5, SpiralSpacing::SquareRoot).unwrap();
        assert!((linear[1] - TAU * 0.25).abs() < EPS);
        assert!((sqrt[1] - TAU * 0.5).abs() < EPS);
        assert_eq!(linear[0], 0.0);
        assert_eq!(sqrt[4], linear[4]);
    }

    #[test]
    fn test_spiral_rejects_bad_revolutions() {
        assert!(spiral_angles(0.0, 10, SpiralSpacing::Angle).is_err());
        assert!(spiral_angles(f64::NAN, 10, SpiralSpacing::Angle).is_err());
        assert!(spiral_positions(1.0, f64::INFINITY, 10, SpiralSpacing::Angle).is_err());
    }

    #[test]
    fn test_spiral_rejects_overflowing_extent() {
        assert!(matches!(
            spiral_angles(1e308, 3, SpiralSpacing::Angle),
            Err(MixtureError::InvalidParameter { name: "revolutions", .. })
        ));
        assert!(matches!(
            spiral_positions(1e300, 1e10, 3, SpiralSpacing::Angle),
            Err(MixtureError::InvalidParameter { name: "scale", .. })
        ));
        assert!(spiral_normal_angles(1e308, 1.0, 3, SpiralSpacing::Angle).is_err());
        assert!(validate_spiral_extent(1e300, 1.0).is_ok());
    }

    #[test]
    fn test_normal_is_perpendicular_to_tangent() {
        let angles = spiral_angles(2.0, 50, SpiralSpacing::Angle).unwrap();
        let normals = spiral_normal_angles(2.0, 1.0, 50, SpiralSpacing::Angle).unwrap();
        for (theta, phi) in angles.iter().zip(normals.iter()) {
            let tx = theta.cos() - theta * theta.sin();
            let ty = theta.sin() + theta * theta.cos();
            let dot = tx * phi.cos() + ty * phi.sin();
            assert!(dot.abs() < 1e-9);
        }
        // At theta = 0 the curve heads along +x, so the outward normal points to -y.
        assert!((normals[0] + FRAC_PI_2).abs() < EPS);
    }
}
