//! Compressed sparse row matrices.
//!
//! [`SparseOperator`] is the output of every operator builder in this crate.
//! It is assembled once from `(row, col, value)` triplets and is read-only
//! afterwards.

use std::fmt;

use nalgebra::{DMatrix, DVector};

/// Compressed Sparse Row (CSR) matrix of `f64`.
///
/// Entries are sorted by column within each row. A structural entry may hold
/// `0.0` if assembly touched that position.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseOperator {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Row pointers: row_ptr[i] is the index in col_idx/values where row i starts.
    /// Length is rows + 1, with row_ptr[rows] = nnz.
    row_ptr: Vec<usize>,
    /// Column indices for each stored value.
    col_idx: Vec<usize>,
    /// Stored values.
    values: Vec<f64>,
}

impl SparseOperator {
    /// Create a CSR matrix from triplets (row, col, value).
    ///
    /// Duplicate entries at the same (row, col) are summed in the order they
    /// appear in `triplets`, so equal inputs give bit-identical matrices.
    ///
    /// # Panics
    ///
    /// Panics if a triplet lies outside `rows × cols`.
    ///
    /// # Example
    ///
    /// ```
    /// use cotlap::sparse::SparseOperator;
    ///
    /// let a = SparseOperator::from_triplets(2, 2, vec![(0, 0, 1.0), (1, 0, 2.0), (0, 0, 3.0)]);
    /// assert_eq!(a.get(0, 0), 4.0);
    /// assert_eq!(a.get(1, 0), 2.0);
    /// assert_eq!(a.get(1, 1), 0.0);
    /// assert_eq!(a.nnz(), 2);
    /// ```
    pub fn from_triplets(rows: usize, cols: usize, mut triplets: Vec<(usize, usize, f64)>) -> Self {
        for &(r, c, _) in &triplets {
            assert!(
                r < rows && c < cols,
                "triplet ({r}, {c}) outside {rows}x{cols} matrix"
            );
        }

        // Stable: duplicates keep their input order for summation
        triplets.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut row_ptr = vec![0usize; rows + 1];
        let mut col_idx: Vec<usize> = Vec::with_capacity(triplets.len());
        let mut values: Vec<f64> = Vec::with_capacity(triplets.len());

        let mut prev: Option<(usize, usize)> = None;
        for (row, col, val) in triplets {
            if prev == Some((row, col)) {
                if let Some(last) = values.last_mut() {
                    *last += val;
                }
            } else {
                col_idx.push(col);
                values.push(val);
                row_ptr[row + 1] += 1;
                prev = Some((row, col));
            }
        }

        for r in 0..rows {
            row_ptr[r + 1] += row_ptr[r];
        }

        Self {
            rows,
            cols,
            row_ptr,
            col_idx,
            values,
        }
    }

    /// Get the number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Get the number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Value at `(i, j)`, `0.0` if nothing is stored there.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows()`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];
        match self.col_idx[start..end].binary_search(&j) {
            Ok(k) => self.values[start + k],
            Err(_) => 0.0,
        }
    }

    /// Stored `(col, value)` pairs of row `i`, by increasing column.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];
        self.col_idx[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// All stored `(row, col, value)` entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.rows).flat_map(move |i| self.row(i).map(move |(j, v)| (i, j, v)))
    }

    /// Sum of each row.
    pub fn row_sums(&self) -> DVector<f64> {
        DVector::from_fn(self.rows, |i, _| self.row(i).map(|(_, v)| v).sum())
    }

    /// Whether the matrix is square and `|a_ij - a_ji| <= tolerance` everywhere.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        self.rows == self.cols
            && self
                .iter()
                .all(|(i, j, v)| (v - self.get(j, i)).abs() <= tolerance)
    }

    /// Multiply matrix by vector: y = A * x.
    pub fn mul_vec(&self, x: &DVector<f64>) -> DVector<f64> {
        assert_eq!(x.len(), self.cols, "Vector dimension mismatch");

        let mut y = DVector::zeros(self.rows);
        for i in 0..self.rows {
            y[i] = self.row(i).map(|(j, v)| v * x[j]).sum();
        }
        y
    }

    /// Multiply matrix by a dense matrix: Y = A * X.
    ///
    /// With X the vertex-position matrix of a mesh, each row of Y is the
    /// operator applied to that vertex's coordinates.
    pub fn mul_matrix(&self, x: &DMatrix<f64>) -> DMatrix<f64> {
        assert_eq!(x.nrows(), self.cols, "Matrix dimension mismatch");

        let mut y = DMatrix::zeros(self.rows, x.ncols());
        for i in 0..self.rows {
            for (j, v) in self.row(i) {
                for c in 0..x.ncols() {
                    y[(i, c)] += v * x[(j, c)];
                }
            }
        }
        y
    }

    /// Dense copy of the matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut dense = DMatrix::zeros(self.rows, self.cols);
        for (i, j, v) in self.iter() {
            dense[(i, j)] = v;
        }
        dense
    }
}

impl fmt::Display for SparseOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>10.6}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
