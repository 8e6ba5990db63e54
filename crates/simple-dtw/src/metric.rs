//! Point distance capability and stock point metrics.

/// Local dissimilarity between two points of equal dimensionality.
///
/// Implementations must be pure and return a non-negative value. The evaluator
/// calls [`distance`](PointDistance::distance) once per matrix cell and never
/// keeps the borrowed points past the call.
///
/// Every `Fn(&[f64], &[f64]) -> f64` implements this trait, so plain functions,
/// function pointers and closures can all be bound to an evaluator.
pub trait PointDistance {
    /// Return the distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}

impl<F> PointDistance for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self(a, b)
    }
}

/// Function pointer form of a point distance. The default distance type of
/// [`SimpleDtw`](crate::SimpleDtw).
pub type DistanceFn = fn(&[f64], &[f64]) -> f64;

/// Euclidean (L2) distance.
#[must_use]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Squared Euclidean distance.
#[must_use]
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Manhattan (L1) distance.
#[must_use]
pub fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
