//! Test data for convex hull tests
//!
//! Random and deterministic point-set generators used by the test suite and
//! benchmarks. The core algorithm itself never draws randomness.

use rand::Rng;

use crate::types::Point;
use crate::{GrahamScanError, Result};

/// Generate `count` points with each coordinate drawn uniformly from [low, high)
pub fn generate_points(low: f64, high: f64, count: usize) -> Result<Vec<Point>> {
    if low >= high {
        return Err(GrahamScanError::InvalidArgument(format!(
            "low ({}) must be less than high ({})",
            low, high
        )));
    }
    if count == 0 {
        return Err(GrahamScanError::InvalidArgument(
            "count must be positive".to_string(),
        ));
    }

    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        points.push(Point::new(
            rng.random_range(low..high),
            rng.random_range(low..high),
        ));
    }

    Ok(points)
}

/// Corners of an axis-aligned square plus random interior points
pub fn square_with_interior_points(size: f64, n_interior: usize) -> Vec<Point> {
    let mut points = vec![
        Point::new(0.0, 0.0),
        Point::new(size, 0.0),
        Point::new(size, size),
        Point::new(0.0, size),
    ];

    let mut rng = rand::rng();
    for _ in 0..n_interior {
        // Strictly interior: stay away from the boundary
        let x = size * (0.1 + 0.8 * rng.random::<f64>());
        let y = size * (0.1 + 0.8 * rng.random::<f64>());
        points.push(Point::new(x, y));
    }

    points
}

/// Evenly spaced points on a circle
pub fn circle_points(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
            Point::from_polar(angle, radius)
        })
        .collect()
}

/// Evenly spaced points on the line y = x
pub fn collinear_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as f64, i as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_points_in_range() {
        let points = generate_points(-5.0, 5.0, 200).unwrap();
        assert_eq!(points.len(), 200);

        for p in &points {
            assert!(p.x >= -5.0 && p.x < 5.0);
            assert!(p.y >= -5.0 && p.y < 5.0);
        }
    }

    #[test]
    fn test_generate_points_rejects_bad_range() {
        assert!(matches!(
            generate_points(1.0, 1.0, 10),
            Err(GrahamScanError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_points(2.0, -2.0, 10),
            Err(GrahamScanError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_generate_points_rejects_zero_count() {
        assert!(matches!(
            generate_points(0.0, 1.0, 0),
            Err(GrahamScanError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_circle_points_on_radius() {
        let points = circle_points(36, 2.0);
        assert_eq!(points.len(), 36);

        let origin = Point::new(0.0, 0.0);
        for p in &points {
            assert!((p.distance(&origin) - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_collinear_points() {
        let points = collinear_points(5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[4], Point::new(4.0, 4.0));
    }
}
