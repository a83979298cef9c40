//! Angular ordering of points around the pivot
//!
//! Reorders indices 1..n so that polar angle around the pivot (kept fixed at
//! index 0) is ascending, with angle ties broken by ascending distance from
//! the pivot. The comparator is shared between both modes: an adjacent pair
//! (prev, curr) is out of order iff the turn prev -> curr -> pivot is
//! clockwise, or collinear with curr strictly nearer the pivot.
//!
//! The sequential mode is a full-pass exchange sort. A parallel sweep that
//! lets dynamically chunked workers exchange adjacent pairs races on pairs
//! straddling chunk boundaries, so the parallel mode runs odd-even
//! transposition sweeps under the identical comparator instead: within a
//! phase no two workers touch the same pair, and rayon's fork-join places a
//! barrier after every phase, so the converged order matches the sequential
//! mode. Sweeps are bounded by length plus worker count, with early exit
//! once a full sweep performs no swap.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::geometry::{distance, orientation};
use crate::types::Point;
use crate::PARALLEL_THRESHOLD;

/// Sort `points[1..]` by polar angle around the pivot at index 0
pub fn sort_by_polar_angle(points: &mut [Point], parallel: bool) {
    if points.len() < 3 {
        return;
    }

    let pivot = points[0];

    if parallel && points.len() >= PARALLEL_THRESHOLD {
        sort_parallel(points, &pivot);
    } else {
        sort_sequential(points, &pivot);
    }
}

/// Adjacent-pair comparator shared by both modes
#[inline]
fn out_of_order(prev: &Point, curr: &Point, pivot: &Point) -> bool {
    let turn = orientation(prev, curr, pivot);
    turn < 0.0 || (turn == 0.0 && distance(curr, pivot) < distance(prev, pivot))
}

/// Full-pass exchange sort over pairs (j-1, j) for j in 2..n
fn sort_sequential(points: &mut [Point], pivot: &Point) {
    for _ in 2..points.len() {
        for j in 2..points.len() {
            if out_of_order(&points[j - 1], &points[j], pivot) {
                points.swap(j - 1, j);
            }
        }
    }
}

/// Barrier-synchronized odd-even transposition sweeps
fn sort_parallel(points: &mut [Point], pivot: &Point) {
    let max_sweeps = points.len() + rayon::current_num_threads();
    let tail = &mut points[1..];

    for _ in 0..max_sweeps {
        let swapped = AtomicBool::new(false);

        // Even phase: pairs (1,2), (3,4), ...
        tail.par_chunks_mut(2).for_each(|pair| {
            if let [a, b] = pair {
                if out_of_order(a, b, pivot) {
                    std::mem::swap(a, b);
                    swapped.store(true, Ordering::Relaxed);
                }
            }
        });

        // Odd phase: pairs (2,3), (4,5), ...
        tail[1..].par_chunks_mut(2).for_each(|pair| {
            if let [a, b] = pair {
                if out_of_order(a, b, pivot) {
                    std::mem::swap(a, b);
                    swapped.store(true, Ordering::Relaxed);
                }
            }
        });

        // A sweep with no exchanges means every adjacent pair is in order
        if !swapped.load(Ordering::Relaxed) {
            break;
        }
    }
}
