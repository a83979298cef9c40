//! 2D Convex Hull via Graham's Scan
//!
//! This library computes the convex hull of a finite set of points in the
//! plane: pick the lowest point as the pivot, sort the rest by polar angle
//! around it, then sweep the sorted sequence with a stack, discarding every
//! point that does not make a strict left turn.
//!
//! Both the pivot search and the angular ordering step support a parallel
//! mode built on rayon's fork-join model; the final stack sweep is inherently
//! sequential.
//!
//! # Example
//! ```
//! use math_graham_scan::{ConvexHull2D, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(0.5, 0.5),
//! ];
//!
//! let hull = ConvexHull2D::build(&points, false).unwrap();
//! assert_eq!(hull.num_vertices(), 4);
//! ```

mod angular;
mod geometry;
mod graham;
mod hull;
mod pivot;
mod types;

// Make testdata publicly available for tests
pub mod testdata;

pub use graham::convex_hull;
pub use types::{ConvexHull2D, Point};

/// Error types for hull computation
#[derive(Debug, thiserror::Error)]
pub enum GrahamScanError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no point matches the reduced minimum ({x}, {y})")]
    PivotNotFound { x: f64, y: f64 },

    #[error("degenerate input: hull stack underflow while scanning ({x}, {y})")]
    DegenerateInput { x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, GrahamScanError>;

/// Threshold for parallel processing (below this, sequential is faster)
pub(crate) const PARALLEL_THRESHOLD: usize = 100;
