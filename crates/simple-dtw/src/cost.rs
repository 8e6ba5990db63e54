//! Warping cost newtype wrapper.

use std::cmp::Ordering;
use std::fmt;

/// Total cost of the optimal monotonic alignment between two sequences.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WarpingCost(f64);

impl WarpingCost {
    /// Infinite cost, returned when either sequence is empty.
    pub const INFINITY: Self = Self(f64::INFINITY);

    /// Create a new warping cost from a raw value.
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw cost value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true if an alignment with finite cost exists.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<WarpingCost> for f64 {
    fn from(cost: WarpingCost) -> Self {
        cost.0
    }
}

impl fmt::Display for WarpingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
