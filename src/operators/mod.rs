// src/operators/mod.rs

//! Full-register operators and their construction from single-qubit gates.
//!
//! An operator acting on `dim` qubits is a `2^dim × 2^dim` complex matrix. Two
//! storage layouts are provided behind the [`Operator`] trait: a dense
//! [`DenseOperator`] and a compressed-sparse-row [`SparseOperator`]. The
//! embedding functions in [`embedding`] are generic over the layout, so the
//! same gate sequence can be built either way.

pub mod dense;
pub mod embedding;
pub mod sparse;

pub use dense::DenseOperator;
pub use embedding::{controlled, embed, factor_list, kron_fold, multi_target_controlled};
pub use sparse::SparseOperator;

use crate::core::QftError;
use crate::gates::Matrix2;
use num_complex::Complex;
use std::fmt;

/// Storage layout used when the engine materializes operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// `2^dim × 2^dim` dense matrix.
    #[default]
    Dense,
    /// Compressed sparse rows, zero entries omitted.
    Sparse,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Dense => write!(f, "dense"),
            Representation::Sparse => write!(f, "sparse"),
        }
    }
}

/// A square complex matrix acting on a whole register.
pub trait Operator: Sized + fmt::Debug {
    /// Lifts a single-qubit matrix.
    fn from_matrix2(m: &Matrix2) -> Self;

    /// Kronecker product `self ⊗ rhs`; `self` supplies the high-order index bits.
    fn kron(&self, rhs: &Self) -> Self;

    /// Entrywise sum of two operators of equal size.
    fn try_add(&self, rhs: &Self) -> Result<Self, QftError>;

    /// Side length of the matrix.
    fn dim(&self) -> usize;

    /// Number of complex entries held in memory.
    fn stored_entries(&self) -> usize;

    /// Entry at `(row, col)`; zero when not stored.
    fn entry(&self, row: usize, col: usize) -> Complex<f64>;

    /// Matrix–vector product.
    fn apply(&self, amplitudes: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, QftError>;
}
