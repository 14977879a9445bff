//! A coordinate-list (COO) matrix holding only nonzero entries.
//!
//! Memory is proportional to the number of stored entries rather than to
//! `rows × cols`, at the cost of a linear scan per lookup. Entries are kept
//! unordered; row and column scans sort their (small) result instead.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `weight` | \(O(\text{nnz})\) |
//! | `set_weight` | \(O(\text{nnz})\) |
//! | `row_entries` / `col_entries` | \(O(\text{nnz} + k \log k)\) |
//! | `count_nonzero` | \(O(1)\) |

use serde::{Deserialize, Serialize};

use super::{Weight, WeightedAdjacency};

/// A sparse `rows × cols` matrix in coordinate format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix<T> {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, T)>,
}

impl<T> SparseMatrix<T> {
    /// Creates an empty `rows × cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
        }
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over stored entries as `(row, col, &value)`, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.entries.iter().map(|(r, c, v)| (*r, *c, v))
    }

    fn position(&self, row: usize, col: usize) -> Option<usize> {
        self.entries.iter().position(|&(r, c, _)| r == row && c == col)
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
    }
}

impl<T: Weight> WeightedAdjacency for SparseMatrix<T> {
    type Weight = T;

    fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols)
    }

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    fn weight(&self, row: usize, col: usize) -> T {
        self.check_bounds(row, col);
        self.entries
            .iter()
            .find(|&&(r, c, _)| r == row && c == col)
            .map_or_else(T::zero, |&(_, _, w)| w)
    }

    fn set_weight(&mut self, row: usize, col: usize, weight: T) {
        self.check_bounds(row, col);
        match (self.position(row, col), weight.is_zero()) {
            (Some(idx), true) => {
                self.entries.swap_remove(idx);
            }
            (Some(idx), false) => self.entries[idx].2 = weight,
            (None, false) => self.entries.push((row, col, weight)),
            (None, true) => {}
        }
    }

    #[inline]
    fn count_nonzero(&self) -> usize {
        self.entries.len()
    }

    fn row_entries(&self, row: usize) -> Vec<(usize, T)> {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        let mut out: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|&&(r, _, _)| r == row)
            .map(|&(_, c, w)| (c, w))
            .collect();
        out.sort_unstable_by_key(|&(c, _)| c);
        out
    }

    fn col_entries(&self, col: usize) -> Vec<(usize, T)> {
        assert!(col < self.cols, "col {col} out of bounds for {} cols", self.cols);
        let mut out: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|&&(_, c, _)| c == col)
            .map(|&(r, _, w)| (r, w))
            .collect();
        out.sort_unstable_by_key(|&(r, _)| r);
        out
    }
}
