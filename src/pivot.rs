//! Pivot selection: the lowest point, leftmost among ties
//!
//! The pivot anchors the angular sort and is the first and last vertex of the
//! final hull. The parallel mode runs two fork-join reductions: each worker
//! folds a private minimum over its chunk and the partial minima are merged
//! only at the join barrier, never through a shared accumulator.

use rayon::prelude::*;

use crate::types::Point;
use crate::{GrahamScanError, Result, PARALLEL_THRESHOLD};

/// Find the index of the pivot: minimum y, then minimum x among ties
///
/// The x- and y-minima are reduced independently and the result is located
/// by an exact-equality scan. If rounding ever makes the componentwise
/// minima belong to two different points, the scan finds nothing and this
/// returns `PivotNotFound` rather than an arbitrary index.
pub fn pivot_index(points: &[Point], parallel: bool) -> Result<usize> {
    if points.is_empty() {
        return Err(GrahamScanError::InvalidArgument(
            "point set is empty".to_string(),
        ));
    }

    let (min_x, min_y) = if parallel && points.len() >= PARALLEL_THRESHOLD {
        reduce_minima_parallel(points)
    } else {
        reduce_minima_sequential(points)
    };

    points
        .iter()
        .position(|p| p.x == min_x && p.y == min_y)
        .ok_or(GrahamScanError::PivotNotFound { x: min_x, y: min_y })
}

fn reduce_minima_sequential(points: &[Point]) -> (f64, f64) {
    let mut min_y = f64::INFINITY;
    for p in points {
        if p.y < min_y {
            min_y = p.y;
        }
    }

    let mut min_x = f64::INFINITY;
    for p in points {
        if p.y == min_y && p.x < min_x {
            min_x = p.x;
        }
    }

    (min_x, min_y)
}

fn reduce_minima_parallel(points: &[Point]) -> (f64, f64) {
    let chunk = (points.len() / rayon::current_num_threads()).max(1);

    // Phase 1: global minimum y
    let min_y = points
        .par_chunks(chunk)
        .map(|c| c.iter().fold(f64::INFINITY, |m, p| m.min(p.y)))
        .reduce(|| f64::INFINITY, f64::min);

    // Phase 2: minimum x restricted to the bottom row
    let min_x = points
        .par_chunks(chunk)
        .map(|c| {
            c.iter()
                .filter(|p| p.y == min_y)
                .fold(f64::INFINITY, |m, p| m.min(p.x))
        })
        .reduce(|| f64::INFINITY, f64::min);

    (min_x, min_y)
}
