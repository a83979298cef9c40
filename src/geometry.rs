//! Geometric utility functions

use crate::types::Point;

/// Z-component of the cross product of (p2 - p1) and (p3 - p1)
///
/// Positive: p1 -> p2 -> p3 turns left (counter-clockwise).
/// Negative: turns right. Zero: collinear.
pub fn orientation(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    p2.sub(p1).cross(&p3.sub(p1))
}

/// Euclidean distance between two points
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    p1.distance(p2)
}
