// src/operators/sparse.rs

use super::Operator;
use crate::core::QftError;
use crate::gates::Matrix2;
use num_complex::Complex;
use num_traits::Zero;

/// Operator in compressed sparse row form.
///
/// Column indices inside each row are strictly increasing. Exact zeros are
/// never stored, so a controlled phase on `dim` qubits holds `2^dim` entries
/// instead of `4^dim`.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseOperator {
    dim: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<Complex<f64>>,
}

impl SparseOperator {
    /// Stored `(column, value)` pairs of one row.
    fn row(&self, row: usize) -> impl Iterator<Item = (usize, Complex<f64>)> + '_ {
        let span = self.row_ptr[row]..self.row_ptr[row + 1];
        self.col_idx[span.clone()].iter().copied().zip(self.values[span].iter().copied())
    }

    /// Appends to the row under construction, dropping exact zeros.
    fn push_entry(&mut self, col: usize, value: Complex<f64>) {
        if !value.is_zero() {
            self.col_idx.push(col);
            self.values.push(value);
        }
    }

    /// Number of explicitly stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }
}

impl Operator for SparseOperator {
    fn from_matrix2(m: &Matrix2) -> Self {
        let mut row_ptr = vec![0];
        let mut col_idx = Vec::new();
        let mut values = Vec::new();
        for row in m {
            for (c, v) in row.iter().enumerate() {
                if !v.is_zero() {
                    col_idx.push(c);
                    values.push(*v);
                }
            }
            row_ptr.push(values.len());
        }
        Self { dim: 2, row_ptr, col_idx, values }
    }

    fn kron(&self, rhs: &Self) -> Self {
        let dim = self.dim * rhs.dim;
        let mut row_ptr = Vec::with_capacity(dim + 1);
        let mut col_idx = Vec::with_capacity(self.nnz() * rhs.nnz());
        let mut values = Vec::with_capacity(self.nnz() * rhs.nnz());
        row_ptr.push(0);
        for ra in 0..self.dim {
            for rb in 0..rhs.dim {
                // Outer loop over the left columns keeps each row sorted.
                for (ca, va) in self.row(ra) {
                    for (cb, vb) in rhs.row(rb) {
                        col_idx.push(ca * rhs.dim + cb);
                        values.push(va * vb);
                    }
                }
                row_ptr.push(values.len());
            }
        }
        Self { dim, row_ptr, col_idx, values }
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, QftError> {
        if self.dim != rhs.dim {
            return Err(QftError::DimensionMismatch { expected: self.dim, actual: rhs.dim });
        }
        let mut sum = Self {
            dim: self.dim,
            row_ptr: Vec::with_capacity(self.dim + 1),
            col_idx: Vec::with_capacity(self.nnz() + rhs.nnz()),
            values: Vec::with_capacity(self.nnz() + rhs.nnz()),
        };
        sum.row_ptr.push(0);
        for r in 0..self.dim {
            let mut left = self.row(r).peekable();
            let mut right = rhs.row(r).peekable();
            // Sorted merge of the two rows.
            loop {
                match (left.peek().copied(), right.peek().copied()) {
                    (Some((cl, vl)), Some((cr, vr))) if cl == cr => {
                        sum.push_entry(cl, vl + vr);
                        left.next();
                        right.next();
                    }
                    (Some((cl, vl)), Some((cr, _))) if cl < cr => {
                        sum.push_entry(cl, vl);
                        left.next();
                    }
                    (_, Some((cr, vr))) => {
                        sum.push_entry(cr, vr);
                        right.next();
                    }
                    (Some((cl, vl)), None) => {
                        sum.push_entry(cl, vl);
                        left.next();
                    }
                    (None, None) => break,
                }
            }
            sum.row_ptr.push(sum.values.len());
        }
        Ok(sum)
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn stored_entries(&self) -> usize {
        self.nnz()
    }

    fn entry(&self, row: usize, col: usize) -> Complex<f64> {
        self.row(row)
            .find(|(c, _)| *c == col)
            .map(|(_, v)| v)
            .unwrap_or_else(Complex::zero)
    }

    fn apply(&self, amplitudes: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, QftError> {
        if amplitudes.len() != self.dim {
            return Err(QftError::DimensionMismatch { expected: self.dim, actual: amplitudes.len() });
        }
        Ok((0..self.dim)
            .map(|r| self.row(r).map(|(c, v)| v * amplitudes[c]).sum::<Complex<f64>>())
            .collect())
    }
}
