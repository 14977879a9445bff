//! Weighted adjacency stores.
//!
//! The graph engine needs a very small capability from its backing matrix:
//! read and write a weight at `(row, col)`, count stored entries, report its
//! dimensions and deep-copy itself. [`WeightedAdjacency`] captures exactly
//! that, and two implementations are provided:
//! - [`DenseMatrix`]: contiguous row-major storage, \(O(1)\) access, \(O(n^2)\) memory
//! - [`SparseMatrix`]: coordinate list of nonzero entries, \(O(\text{nnz})\) access and memory
//!
//! A zero weight is the "absent" value in both stores.

pub mod dense;
pub mod sparse;

pub use dense::DenseMatrix;
pub use sparse::SparseMatrix;

use core::fmt::Debug;
use num_traits::{Float, Zero};

/// Numeric type usable as an edge weight.
///
/// Implemented for every floating point type (`f32`, `f64`). Infinity is
/// needed as the "unreachable" distance in shortest path tables.
pub trait Weight: Float + Debug + Send + Sync + 'static {}

impl<T: Float + Debug + Send + Sync + 'static> Weight for T {}

/// A square-or-rectangular store of edge weights where zero means "no edge".
///
/// `Clone` is the deep copy used when an algorithm needs a working graph.
/// Implementations must agree on every observable result; graph algorithms
/// never inspect which store they are running on.
pub trait WeightedAdjacency: Clone {
    /// Weight type held by the store.
    type Weight: Weight;

    /// Creates a store of the given dimensions with every entry absent.
    fn with_dimensions(rows: usize, cols: usize) -> Self;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Returns the weight at `(row, col)`, or zero if no entry is stored.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    fn weight(&self, row: usize, col: usize) -> Self::Weight;

    /// Stores `weight` at `(row, col)`. Storing zero erases the entry.
    ///
    /// # Panics
    /// Panics if `(row, col)` is out of bounds.
    fn set_weight(&mut self, row: usize, col: usize, weight: Self::Weight);

    /// Number of nonzero entries.
    fn count_nonzero(&self) -> usize;

    /// Nonzero entries of `row` as `(col, weight)` in ascending column order.
    fn row_entries(&self, row: usize) -> Vec<(usize, Self::Weight)> {
        (0..self.cols())
            .filter_map(|col| {
                let w = self.weight(row, col);
                (!w.is_zero()).then_some((col, w))
            })
            .collect()
    }

    /// Nonzero entries of `col` as `(row, weight)` in ascending row order.
    fn col_entries(&self, col: usize) -> Vec<(usize, Self::Weight)> {
        (0..self.rows())
            .filter_map(|row| {
                let w = self.weight(row, col);
                (!w.is_zero()).then_some((row, w))
            })
            .collect()
    }

    /// Returns `true` if at least one entry is stored.
    #[inline]
    fn has_nonzero(&self) -> bool {
        self.count_nonzero() > 0
    }
}
