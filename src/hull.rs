//! Stack sweep over the angularly sorted sequence
//!
//! Consumes the pivot-first, sorted sequence and keeps only the points that
//! make a strict left turn. The sweep is inherently sequential: every
//! decision depends on the two most recently accepted vertices.

use crate::geometry::orientation;
use crate::types::Point;
use crate::{GrahamScanError, Result};

/// Build the hull stack from a pivot-first, angularly sorted sequence
///
/// Appends the pivot again to close the scan, seeds the stack with the first
/// three points, then pops while the candidate fails to make a strict left
/// turn. Popping is guarded: the stack never drops below the pivot and one
/// vertex, and an input that would force it to (4+ collinear points) is
/// reported as `DegenerateInput` instead.
///
/// The returned stack reads bottom-to-top as the hull vertices in
/// counter-clockwise order, starting and ending at the pivot.
pub fn build_hull(mut points: Vec<Point>) -> Result<Vec<Point>> {
    debug_assert!(points.len() >= 4);

    // Close the scan at the pivot
    points.push(points[0]);

    let mut stack: Vec<Point> = Vec::with_capacity(points.len());
    stack.extend_from_slice(&points[..3]);

    for &candidate in &points[3..] {
        loop {
            let top = stack[stack.len() - 1];
            let next_to_top = stack[stack.len() - 2];

            if orientation(&next_to_top, &top, &candidate) > 0.0 {
                break;
            }
            if stack.len() == 2 {
                return Err(GrahamScanError::DegenerateInput {
                    x: candidate.x,
                    y: candidate.y,
                });
            }
            stack.pop();
        }
        stack.push(candidate);
    }

    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_interior_point() {
        // Already pivot-first and angularly sorted
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 0.5),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];

        let stack = build_hull(points).unwrap();
        assert_eq!(
            stack,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_all_collinear_is_degenerate() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ];

        let result = build_hull(points);
        assert!(matches!(
            result,
            Err(GrahamScanError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_closing_duplicate() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];

        let stack = build_hull(points).unwrap();
        assert_eq!(stack.first(), stack.last());
        assert_eq!(stack.len(), 5);
    }
}
