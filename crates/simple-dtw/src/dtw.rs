//! DTW warping cost evaluation over a reusable cost matrix.

use std::fmt;

use tracing::{info, instrument};

use crate::cost::WarpingCost;
use crate::error::DtwError;
use crate::matrix::CostMatrix;
use crate::metric::{DistanceFn, PointDistance};

/// Dynamic Time Warping evaluator.
///
/// Owns an `(x_size + 1) x (y_size + 1)` cost matrix that is reused across
/// calls and regrown on demand. Every evaluation mutates the matrix, so one
/// instance must not be shared between threads without external locking; use
/// one evaluator per thread instead.
///
/// The distance type defaults to [`DistanceFn`], which lets
/// [`SimpleDtw::empty`] be called without naming a metric.
pub struct SimpleDtw<D = DistanceFn> {
    distance: Option<D>,
    matrix: Option<CostMatrix>,
}

impl SimpleDtw<DistanceFn> {
    /// Create an evaluator with no distance bound and no matrix.
    ///
    /// Every evaluation fails with [`DtwError::MissingDistance`] until a
    /// distance is bound via [`bind_distance`](SimpleDtw::bind_distance).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl<D> Default for SimpleDtw<D> {
    fn default() -> Self {
        Self {
            distance: None,
            matrix: None,
        }
    }
}

impl<D> SimpleDtw<D> {
    /// Create an evaluator bound to `distance`. The matrix is sized by the
    /// first evaluated pair.
    #[must_use]
    pub fn new(distance: D) -> Self {
        Self {
            distance: Some(distance),
            matrix: None,
        }
    }

    /// Create an evaluator bound to `distance` with a matrix already sized for
    /// sequences of up to `x_size` and `y_size` points.
    #[must_use]
    pub fn with_capacity(distance: D, x_size: usize, y_size: usize) -> Self {
        let mut dtw = Self::new(distance);
        dtw.initialize(x_size, y_size);
        dtw
    }

    /// Bind `distance`, replacing any previously bound one. The matrix is kept.
    pub fn bind_distance(&mut self, distance: D) {
        self.distance = Some(distance);
    }

    /// Return true if a distance is bound.
    #[must_use]
    pub fn has_distance(&self) -> bool {
        self.distance.is_some()
    }

    /// Reallocate the cost matrix for sequences of up to `x_size` and `y_size`
    /// points and reseed its borders.
    ///
    /// Previous matrix contents are discarded even when the size is unchanged.
    /// [`evaluate_warping_cost`](SimpleDtw::evaluate_warping_cost) calls this
    /// itself when the current matrix is too small.
    pub fn initialize(&mut self, x_size: usize, y_size: usize) {
        self.matrix = Some(CostMatrix::seeded(x_size, y_size));
    }

    /// Return true once a matrix has been allocated.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.matrix.is_some()
    }

    /// Return the largest `(len_1, len_2)` the current matrix holds without
    /// regrowing, or `None` before initialization.
    #[must_use]
    pub fn capacity(&self) -> Option<(usize, usize)> {
        self.matrix.as_ref().map(|m| {
            let (x_dim, y_dim) = m.dims();
            (x_dim - 1, y_dim - 1)
        })
    }
}

impl<D: PointDistance> SimpleDtw<D> {
    /// Compute the DTW cost of aligning `seq_1` with `seq_2`.
    ///
    /// Each cell `(i, j)` accumulates `distance(seq_1[i-1], seq_2[j-1])` on
    /// top of one predecessor: above if it is strictly cheapest, else left if
    /// it is strictly cheapest, else the diagonal. Ties and NaN therefore
    /// always resolve to the diagonal. The distance is called exactly
    /// `seq_1.len() * seq_2.len()` times, row by row.
    ///
    /// If the matrix is missing or too small it is reallocated to exactly
    /// `(seq_1.len(), seq_2.len())` and reseeded, which is logged at info level.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// | Condition | Result |
    /// |---|---|
    /// | Either sequence empty | `Ok(WarpingCost::INFINITY)` |
    /// | `seq_1[0]` and `seq_2[0]` differ in length | [`DtwError::DimensionMismatch`] |
    /// | No distance bound | [`DtwError::MissingDistance`] |
    /// | Otherwise | `Ok` with the accumulated cost |
    #[instrument(skip_all, fields(len_1 = seq_1.len(), len_2 = seq_2.len()))]
    pub fn evaluate_warping_cost<P, Q>(
        &mut self,
        seq_1: &[P],
        seq_2: &[Q],
    ) -> Result<WarpingCost, DtwError>
    where
        P: AsRef<[f64]>,
        Q: AsRef<[f64]>,
    {
        let (Some(first_1), Some(first_2)) = (seq_1.first(), seq_2.first()) else {
            return Ok(WarpingCost::INFINITY);
        };
        let (left, right) = (first_1.as_ref().len(), first_2.as_ref().len());
        if left != right {
            return Err(DtwError::DimensionMismatch { left, right });
        }
        let Some(distance) = self.distance.as_ref() else {
            return Err(DtwError::MissingDistance);
        };

        let len_1 = seq_1.len();
        let len_2 = seq_2.len();
        if self.matrix.as_ref().is_some_and(|m| !m.fits(len_1, len_2)) {
            self.matrix = None;
        }
        let matrix = self.matrix.get_or_insert_with(|| {
            info!(
                x_size = len_1,
                y_size = len_2,
                "automatically resizing DTW matrix to fit arguments"
            );
            CostMatrix::seeded(len_1, len_2)
        });

        for (i, p1) in (1..=len_1).zip(seq_1) {
            let p1 = p1.as_ref();
            for (j, p2) in (1..=len_2).zip(seq_2) {
                let index_cost = distance.distance(p1, p2.as_ref());
                let prev_cost = cheapest_predecessor(
                    matrix[(i - 1, j)],
                    matrix[(i, j - 1)],
                    matrix[(i - 1, j - 1)],
                );
                matrix[(i, j)] = index_cost + prev_cost;
            }
        }

        Ok(WarpingCost::new(matrix[(len_1, len_2)]))
    }
}

impl<D> fmt::Debug for SimpleDtw<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleDtw")
            .field("has_distance", &self.has_distance())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Pick the predecessor cost. `up` and `left` win only when strictly below
/// both others; every other case falls through to `diag`.
#[inline]
fn cheapest_predecessor(up: f64, left: f64, diag: f64) -> f64 {
    if up < diag && up < left {
        up
    } else if left < up && left < diag {
        left
    } else {
        diag
    }
}
