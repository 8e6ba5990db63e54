//! Dynamic Time Warping cost between sequences of multi-dimensional points.
//!
//! Pure computation, no I/O. [`SimpleDtw`] accumulates a caller-supplied
//! [`PointDistance`] over a reusable, automatically grown cost matrix and
//! returns the total [`WarpingCost`] of the alignment. Paths are not
//! reconstructed.

mod cost;
mod dtw;
mod error;
mod matrix;
mod metric;

pub use cost::WarpingCost;
pub use dtw::SimpleDtw;
pub use error::DtwError;
pub use metric::{DistanceFn, PointDistance, euclidean, manhattan, squared_euclidean};
