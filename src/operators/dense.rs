// src/operators/dense.rs

use super::Operator;
use crate::core::QftError;
use crate::gates::Matrix2;
use ndarray::{Array2, ArrayView1};
use num_complex::Complex;

/// Operator stored as a full `Array2`.
///
/// Memory is `4^dim` entries regardless of content; this is the baseline the
/// tensor-indexed path is measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseOperator {
    matrix: Array2<Complex<f64>>,
}

impl DenseOperator {
    /// Wraps a square matrix.
    pub fn from_array(matrix: Array2<Complex<f64>>) -> Result<Self, QftError> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(QftError::DimensionMismatch { expected: rows, actual: cols });
        }
        Ok(Self { matrix })
    }

    /// Read-only view of the underlying matrix.
    pub fn as_array(&self) -> &Array2<Complex<f64>> {
        &self.matrix
    }
}

impl Operator for DenseOperator {
    fn from_matrix2(m: &Matrix2) -> Self {
        Self { matrix: Array2::from_shape_fn((2, 2), |(r, c)| m[r][c]) }
    }

    fn kron(&self, rhs: &Self) -> Self {
        let (ra, ca) = self.matrix.dim();
        let (rb, cb) = rhs.matrix.dim();
        let matrix = Array2::from_shape_fn((ra * rb, ca * cb), |(i, j)| {
            self.matrix[[i / rb, j / cb]] * rhs.matrix[[i % rb, j % cb]]
        });
        Self { matrix }
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, QftError> {
        if self.dim() != rhs.dim() {
            return Err(QftError::DimensionMismatch { expected: self.dim(), actual: rhs.dim() });
        }
        Ok(Self { matrix: &self.matrix + &rhs.matrix })
    }

    fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    fn stored_entries(&self) -> usize {
        self.matrix.len()
    }

    fn entry(&self, row: usize, col: usize) -> Complex<f64> {
        self.matrix[[row, col]]
    }

    fn apply(&self, amplitudes: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, QftError> {
        if amplitudes.len() != self.dim() {
            return Err(QftError::DimensionMismatch { expected: self.dim(), actual: amplitudes.len() });
        }
        Ok(self.matrix.dot(&ArrayView1::from(amplitudes)).to_vec())
    }
}
