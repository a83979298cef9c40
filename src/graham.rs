//! Graham's scan pipeline: pivot selection, angular sort, stack sweep

use crate::types::Point;
use crate::{angular, hull, pivot, GrahamScanError, Result};

/// Compute the convex hull of a point set
///
/// Returns the hull vertices in counter-clockwise order, starting at the
/// pivot (lowest point, leftmost among ties) and closed by a repeated pivot
/// at the end. With `parallel` set, the pivot reduction and the angular sort
/// run on rayon's thread pool; the stack sweep is always sequential.
///
/// Inputs of three or fewer points take a degenerate path: all points are
/// returned with the pivot swapped to the front, plus the closing pivot,
/// without any extremity filtering (a collinear triple is returned as-is).
pub fn convex_hull(points: &[Point], parallel: bool) -> Result<Vec<Point>> {
    if points.is_empty() {
        return Err(GrahamScanError::InvalidArgument(
            "point set is empty".to_string(),
        ));
    }

    let mut points = points.to_vec();

    let pivot_idx = pivot::pivot_index(&points, parallel)?;
    points.swap(0, pivot_idx);

    log::debug!(
        "graham scan: {} points, pivot {} (from index {}), parallel={}",
        points.len(),
        points[0],
        pivot_idx,
        parallel
    );

    if points.len() <= 3 {
        let mut stack = points.clone();
        stack.push(points[0]);
        return Ok(stack);
    }

    angular::sort_by_polar_angle(&mut points, parallel);

    hull::build_hull(points)
}
