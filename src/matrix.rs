//! Borrowed column-major matrix views in the layout LAPACK expects.

use std::ffi::c_int;

use crate::{LangeError, Result};

/// An immutable column-major matrix over caller-owned data.
///
/// Element `(i, j)` lives at `data[i + j * lda]`. `lda` may exceed `rows`
/// when the view covers the top rows of a larger allocation.
///
/// # Example
/// ```ignore
/// use strided_lange::ColMajor;
///
/// // 2x2 matrix [[1, -7], [3, 4]] stored column by column
/// let data = [1.0, 3.0, -7.0, 4.0];
/// let a = ColMajor::from_slice(&data, 2, 2).unwrap();
/// assert_eq!(a.get(0, 1), Some(-7.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ColMajor<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    lda: usize,
}

impl<'a, T> ColMajor<'a, T> {
    /// Create a view with an explicit leading dimension.
    ///
    /// # Errors
    /// - [`LangeError::LeadingDimension`] if `lda < max(1, rows)`
    /// - [`LangeError::DimensionOverflow`] if a dimension does not fit LAPACK's `int`
    /// - [`LangeError::MatrixTooSmall`] if `data` cannot hold the matrix
    pub fn new(data: &'a [T], rows: usize, cols: usize, lda: usize) -> Result<Self> {
        if lda < rows.max(1) {
            return Err(LangeError::LeadingDimension { lda, rows });
        }
        for dim in [rows, cols, lda] {
            lapack_int(dim)?;
        }
        let required = required_len(rows, cols, lda).ok_or(LangeError::DimensionOverflow(lda))?;
        if data.len() < required {
            return Err(LangeError::MatrixTooSmall {
                required,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            lda,
        })
    }

    /// Create a view over densely packed columns (`lda = max(1, rows)`).
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, rows, cols, rows.max(1))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column stride in elements.
    pub fn lda(&self) -> usize {
        self.lda
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<T>
    where
        T: Copy,
    {
        if i < self.rows && j < self.cols {
            Some(self.data[i + j * self.lda])
        } else {
            None
        }
    }

    /// Dimensions as LAPACK integers: `(m, n, lda)`.
    pub(crate) fn lapack_dims(&self) -> Result<(c_int, c_int, c_int)> {
        Ok((
            lapack_int(self.rows)?,
            lapack_int(self.cols)?,
            lapack_int(self.lda)?,
        ))
    }
}

/// Minimum buffer length for a `rows x cols` matrix with column stride `lda`.
///
/// Returns `None` on overflow.
pub fn required_len(rows: usize, cols: usize, lda: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }
    lda.checked_mul(cols - 1)?.checked_add(rows)
}

pub(crate) fn lapack_int(value: usize) -> Result<c_int> {
    c_int::try_from(value).map_err(|_| LangeError::DimensionOverflow(value))
}
