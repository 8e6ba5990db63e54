//! Error types for DTW evaluation.

/// Errors from DTW warping cost evaluation.
///
/// Empty sequences and undersized matrices are not errors: the former yield
/// [`WarpingCost::INFINITY`](crate::WarpingCost::INFINITY), the latter trigger
/// an automatic resize.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DtwError {
    /// Returned when the first points of the two sequences have different
    /// coordinate counts.
    #[error("point dimensionality mismatch: sequence 1 has {left}, sequence 2 has {right}")]
    DimensionMismatch {
        /// Coordinate count of the first point of sequence 1.
        left: usize,
        /// Coordinate count of the first point of sequence 2.
        right: usize,
    },

    /// Returned when evaluation is attempted before a distance function is bound.
    #[error("DTW evaluator is not initialized with a distance function")]
    MissingDistance,
}
