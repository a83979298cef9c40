//! Core data types for 2D convex hull computation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::orientation;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point from polar coordinates (angle in radians, radius)
    pub fn from_polar(angle: f64, radius: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Subtract another point
    pub fn sub(&self, other: &Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Z-component of the cross product with another vector
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let d = self.sub(other);
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// The result of a convex hull computation
///
/// Holds the hull vertices as an open ring: counter-clockwise, starting at
/// the pivot, without the closing duplicate that the raw
/// [`convex_hull`](crate::convex_hull) sequence carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvexHull2D {
    vertices: Vec<Point>,
}

impl ConvexHull2D {
    /// Build a convex hull from points using Graham's scan
    pub fn build(points: &[Point], parallel: bool) -> crate::Result<Self> {
        let mut vertices = crate::graham::convex_hull(points, parallel)?;
        // Drop the closing pivot duplicate
        if vertices.len() > 1 {
            vertices.pop();
        }
        Ok(Self { vertices })
    }

    /// Get the hull vertices (counter-clockwise, pivot first)
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Get the number of hull vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Compute the area of the hull polygon (shoelace formula)
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut twice_area = 0.0;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            twice_area += a.cross(b);
        }

        twice_area.abs() / 2.0
    }

    /// Compute the perimeter of the hull polygon
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }

        (0..n)
            .map(|i| self.vertices[i].distance(&self.vertices[(i + 1) % n]))
            .sum()
    }

    /// Check whether a point lies on or inside the hull polygon
    ///
    /// The hull is counter-clockwise, so a point is inside iff it is on the
    /// left of (or on) every directed edge.
    pub fn contains(&self, point: &Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            // Degenerate hull: only its own vertices count as contained
            return self.vertices.iter().any(|v| v == point);
        }

        (0..n).all(|i| {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            orientation(a, b, point) >= 0.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_cross() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 1.0);
        assert_eq!(a.cross(&b), 1.0);
        assert_eq!(b.cross(&a), -1.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_square_area_and_perimeter() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let hull = ConvexHull2D::build(&points, false).unwrap();

        assert!((hull.area() - 1.0).abs() < 1e-12);
        assert!((hull.perimeter() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_contains() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        let hull = ConvexHull2D::build(&points, false).unwrap();

        assert!(hull.contains(&Point::new(1.0, 1.0)));
        assert!(hull.contains(&Point::new(0.0, 0.0))); // vertex
        assert!(hull.contains(&Point::new(1.0, 0.0))); // on edge
        assert!(!hull.contains(&Point::new(3.0, 1.0)));
        assert!(!hull.contains(&Point::new(-0.1, 0.5)));
    }
}
