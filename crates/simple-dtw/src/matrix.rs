//! Dense accumulated cost matrix with border seeding.

use std::ops::{Index, IndexMut};

use tracing::debug;

/// Row-major `(x_dim, y_dim)` cost matrix owned by a [`SimpleDtw`](crate::SimpleDtw).
///
/// Row 0 and column 0 form the border: `(0, 0)` is zero, every other border
/// cell is infinite. Interior cells hold whatever the last evaluation wrote.
#[derive(Debug, Clone)]
pub(crate) struct CostMatrix {
    x_dim: usize,
    y_dim: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Allocate a zeroed matrix able to hold sequences of `x_size` by `y_size`
    /// points, with borders seeded.
    pub(crate) fn seeded(x_size: usize, y_size: usize) -> Self {
        let x_dim = x_size + 1;
        let y_dim = y_size + 1;
        debug!(x_dim, y_dim, "seeding DTW cost matrix");
        let mut matrix = Self {
            x_dim,
            y_dim,
            data: vec![0.0; x_dim * y_dim],
        };
        matrix[(0, 0)] = 0.0;
        for i in 1..x_dim {
            matrix[(i, 0)] = f64::INFINITY;
        }
        for j in 1..y_dim {
            matrix[(0, j)] = f64::INFINITY;
        }
        matrix
    }

    /// Return `(x_dim, y_dim)`.
    pub(crate) fn dims(&self) -> (usize, usize) {
        (self.x_dim, self.y_dim)
    }

    /// Return true if interior indices `1..=len_1` by `1..=len_2` fit.
    pub(crate) fn fits(&self, len_1: usize, len_2: usize) -> bool {
        len_1 < self.x_dim && len_2 < self.y_dim
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.x_dim && j < self.y_dim);
        &self.data[i * self.y_dim + j]
    }
}

impl IndexMut<(usize, usize)> for CostMatrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.x_dim && j < self.y_dim);
        &mut self.data[i * self.y_dim + j]
    }
}
