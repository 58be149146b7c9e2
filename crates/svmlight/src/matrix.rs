//! Compressed sparse row matrix produced by the loaders.
//!
//! For an `n_rows × n_cols` matrix with `nnz` stored entries:
//! - `indptr`: length `n_rows + 1`; row `i` spans `indptr[i]..indptr[i + 1]`
//! - `indices`: length `nnz`; zero-based column of each entry
//! - `data`: length `nnz`; value of each entry
//!
//! Columns within a row are strictly increasing when built by a loader.

use crate::error::MatrixError;

/// A read-only CSR matrix of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    n_rows: usize,
    n_cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
}

impl CsrMatrix {
    /// Assemble a matrix from loader output without re-validating it.
    ///
    /// `max_column` is the largest column seen, or `None` when no row had
    /// a feature; the column count cannot be inferred then and is 0.
    pub(crate) fn from_accumulated(
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
        max_column: Option<usize>,
    ) -> Result<Self, MatrixError> {
        debug_assert!(!indptr.is_empty());
        debug_assert_eq!(indices.len(), data.len());
        let n_rows = indptr.len() - 1;
        let n_cols = match max_column {
            Some(col) if !data.is_empty() => col
                .checked_add(1)
                .ok_or(MatrixError::ColumnCountOverflow { col })?,
            _ => 0,
        };
        Ok(CsrMatrix {
            n_rows,
            n_cols,
            indptr,
            indices,
            data,
        })
    }

    /// Build a matrix from raw CSR arrays, checking their consistency.
    pub fn from_parts(
        n_cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> Result<Self, MatrixError> {
        if indptr.first() != Some(&0) {
            return Err(MatrixError::RowPtrStart);
        }
        for (row, pair) in indptr.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(MatrixError::RowPtrNotSorted {
                    row,
                    curr: pair[0],
                    next: pair[1],
                });
            }
        }
        let last = indptr[indptr.len() - 1];
        if indices.len() != data.len() || last != data.len() {
            return Err(MatrixError::LengthMismatch {
                indices: indices.len(),
                data: data.len(),
                last,
            });
        }
        if let Some(&col) = indices.iter().find(|&&c| c >= n_cols) {
            return Err(MatrixError::ColumnOutOfBounds { col, n_cols });
        }
        Ok(CsrMatrix {
            n_rows: indptr.len() - 1,
            n_cols,
            indptr,
            indices,
            data,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Columns and values of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows`.
    pub fn row(&self, i: usize) -> (&[usize], &[f64]) {
        let span = self.indptr[i]..self.indptr[i + 1];
        (&self.indices[span.clone()], &self.data[span])
    }

    /// Stored value at `(row, col)`, or 0 when absent or out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row >= self.n_rows {
            return 0.0;
        }
        let (cols, values) = self.row(row);
        match cols.binary_search(&col) {
            Ok(pos) => values[pos],
            Err(_) => 0.0,
        }
    }

    /// Dense row-major copy, mostly useful in tests and small tools.
    pub fn to_dense(&self) -> Vec<Vec<f64>> {
        (0..self.n_rows)
            .map(|i| {
                let mut dense = vec![0.0; self.n_cols];
                let (cols, values) = self.row(i);
                for (&c, &v) in cols.iter().zip(values) {
                    dense[c] = v;
                }
                dense
            })
            .collect()
    }

    /// `(indptr, indices, data)`
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
        (self.indptr, self.indices, self.data)
    }
}
