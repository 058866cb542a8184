// src/core/state.rs

use super::constants::qft_constants::{DEFAULT_NORM_TOLERANCE, MAX_STATE_QUBITS};
use super::error::QftError;
use crate::validation::{check_normalization, num_qubits_for_dimension};
use num_complex::Complex;
use num_traits::Zero;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt;

/// A pure state of a qubit register: a complex column vector of length `2^dim`.
///
/// Basis index bits are read big-endian over the register: qubit 0 is the most
/// significant bit, matching the leftmost factor of every tensor product.
/// Every constructor validates the length, so `num_qubits` is always exact.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct QuantumState {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl QuantumState {
    /// Wraps a caller-supplied amplitude vector.
    ///
    /// # Errors
    /// * `QftError::InvalidInput` if the length is not a power of two (at least 2),
    ///   or if `Σ|c_i|²` deviates from 1.0 by more than the default tolerance.
    pub fn new(amplitudes: Vec<Complex<f64>>) -> Result<Self, QftError> {
        let state = Self::from_unnormalized(amplitudes)?;
        check_normalization(&state, None).map_err(|e| QftError::invalid_input(e.to_string()))?;
        Ok(state)
    }

    /// Wraps an amplitude vector without checking its norm.
    /// The length is still validated.
    pub fn from_unnormalized(amplitudes: Vec<Complex<f64>>) -> Result<Self, QftError> {
        let num_qubits = num_qubits_for_dimension(amplitudes.len())?;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Computational basis state `|index>` over `num_qubits` qubits.
    pub fn basis(num_qubits: usize, index: usize) -> Result<Self, QftError> {
        let dim = dimension_for(num_qubits)?;
        if index >= dim {
            return Err(QftError::invalid_argument(format!(
                "Basis index {} does not fit in {} qubits",
                index, num_qubits
            )));
        }
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::new(1.0, 0.0);
        Ok(Self { amplitudes, num_qubits })
    }

    /// Encodes a classical bitstring, `bits[0]` landing on qubit 0.
    pub fn from_bits(bits: &[bool]) -> Result<Self, QftError> {
        dimension_for(bits.len())?;
        let index = bits.iter().fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
        Self::basis(bits.len(), index)
    }

    /// Random unit vector with normally distributed real and imaginary parts.
    pub fn random<R: Rng + ?Sized>(num_qubits: usize, rng: &mut R) -> Result<Self, QftError> {
        let dim = dimension_for(num_qubits)?;
        let mut amplitudes: Vec<Complex<f64>> = (0..dim)
            .map(|_| {
                let re: f64 = StandardNormal.sample(&mut *rng);
                let im: f64 = StandardNormal.sample(&mut *rng);
                Complex::new(re, im)
            })
            .collect();
        let norm = amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
        if norm == 0.0 {
            amplitudes[0] = Complex::new(1.0, 0.0);
        } else {
            amplitudes.iter_mut().for_each(|c| *c /= norm);
        }
        Ok(Self { amplitudes, num_qubits })
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Consumes the state and returns its amplitudes.
    pub fn into_vector(self) -> Vec<Complex<f64>> {
        self.amplitudes
    }

    /// Replaces the amplitudes after an operator application.
    pub(crate) fn replace_vector(&mut self, amplitudes: Vec<Complex<f64>>) -> Result<(), QftError> {
        if amplitudes.len() != self.amplitudes.len() {
            return Err(QftError::DimensionMismatch { expected: self.amplitudes.len(), actual: amplitudes.len() });
        }
        self.amplitudes = amplitudes;
        Ok(())
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, `2^num_qubits`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// L2 norm of the amplitude vector.
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Born-rule probabilities `|c_i|²`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Basis index carrying the largest probability, with that probability.
    /// Ties resolve to the lowest index.
    pub fn most_probable(&self) -> (usize, f64) {
        argmax(self.amplitudes.iter().map(|c| c.norm_sqr()))
    }

    /// L2 distance `‖self − other‖`.
    pub fn distance(&self, other: &QuantumState) -> Result<f64, QftError> {
        if self.dim() != other.dim() {
            return Err(QftError::DimensionMismatch { expected: self.dim(), actual: other.dim() });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| (a - b).norm_sqr())
            .sum::<f64>()
            .sqrt())
    }

    /// `true` when both states have the same size and lie within `tolerance` in L2 distance.
    pub fn approx_eq(&self, other: &QuantumState, tolerance: Option<f64>) -> bool {
        let tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
        self.distance(other).is_ok_and(|d| d <= tolerance)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

/// `2^num_qubits`, rejecting empty registers and registers above [`MAX_STATE_QUBITS`].
pub(crate) fn dimension_for(num_qubits: usize) -> Result<usize, QftError> {
    if num_qubits == 0 {
        return Err(QftError::invalid_input("A register needs at least one qubit"));
    }
    if num_qubits > MAX_STATE_QUBITS {
        return Err(QftError::invalid_input(format!(
            "{} qubits exceed the largest allocatable state ({} qubits)",
            num_qubits, MAX_STATE_QUBITS
        )));
    }
    Ok(1usize << num_qubits)
}

/// Index and value of the first maximum.
pub(crate) fn argmax<I: IntoIterator<Item = f64>>(values: I) -> (usize, f64) {
    values
        .into_iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, p)| if p > best.1 { (i, p) } else { best })
}
