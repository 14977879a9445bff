//! A 2D dense matrix in contiguous row-major storage.
//!
//! Serves two roles: the \(O(1)\)-access adjacency backing of a graph, and the
//! `n × n` table type returned by all-pairs shortest path computations.
//! Rows are contiguous slices, which keeps row scans cache-friendly and lets
//! whole rows be handed out (or split across threads) without copying.

use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::{Weight, WeightedAdjacency};

/// A dense `rows × cols` matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> DenseMatrix<T> {
    /// Creates a new matrix with dimensions `rows x cols`, initialized with default values.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(rows, cols, T::default())
    }

    /// Creates a new matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a new matrix from a row-major vector.
    ///
    /// # Panics
    /// Panics if `vec.len() != rows * cols`.
    pub fn from_vec(vec: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(vec.len(), rows * cols, "Vector length must match dimensions");
        Self { data: vec, rows, cols }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Returns a row as a mutable slice.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&mut self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    /// Returns the row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the row-major backing storage mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Fills the matrix with a value.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T: Weight> WeightedAdjacency for DenseMatrix<T> {
    type Weight = T;

    fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn weight(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    #[inline]
    fn set_weight(&mut self, row: usize, col: usize, weight: T) {
        self[(row, col)] = weight;
    }

    fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|w| !w.is_zero()).count()
    }

    fn row_entries(&self, row: usize) -> Vec<(usize, T)> {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        self.data[row * self.cols..(row + 1) * self.cols]
            .iter()
            .enumerate()
            .filter(|(_, w)| !w.is_zero())
            .map(|(col, &w)| (col, w))
            .collect()
    }
}
