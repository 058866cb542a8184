// src/adder/tensor.rs

//! Gate application by tensor indexing.
//!
//! A register of `n` qubits is held as a rank-`n` array with one length-2 axis
//! per qubit, axis `q` being qubit `q`. A single-qubit gate becomes a 2×2
//! product along one axis and a controlled phase the same product restricted
//! to the `control = 1` hyperplane, so no `2^n × 2^n` operator is ever built.

use crate::core::{QftError, QuantumState};
use crate::gates::{registry, rotation_angle, Matrix2};
use ndarray::{ArrayD, ArrayViewMutD, Axis, IxDyn};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::ops::Range;

/// Applies `gate` to every length-2 lane of `view` along `axis`.
pub fn apply_along_axis(mut view: ArrayViewMutD<'_, Complex<f64>>, axis: usize, gate: &Matrix2) {
    for mut lane in view.lanes_mut(Axis(axis)) {
        let mut entries = lane.iter_mut();
        if let (Some(x0), Some(x1)) = (entries.next(), entries.next()) {
            let (a0, a1) = (*x0, *x1);
            *x0 = gate[0][0] * a0 + gate[0][1] * a1;
            *x1 = gate[1][0] * a0 + gate[1][1] * a1;
        }
    }
}

/// Precomputed `exp(2πi / 2^k)` for `k = 1..=max_k`.
#[derive(Debug, Clone)]
pub struct PhaseCache {
    factors: Vec<Complex<f64>>,
}

impl PhaseCache {
    /// Fills the cache for `k = 1..=max_k`.
    pub fn new(max_k: u32) -> Self {
        let factors = (1..=max_k)
            .map(|k| Complex::from_polar(1.0, rotation_angle(k)))
            .collect();
        Self { factors }
    }

    /// `exp(2πi / 2^k)`.
    pub fn factor(&self, k: u32) -> Result<Complex<f64>, QftError> {
        (k as usize)
            .checked_sub(1)
            .and_then(|i| self.factors.get(i))
            .copied()
            .ok_or_else(|| {
                QftError::invalid_argument(format!(
                    "Rotation order {} outside the cached range 1..={}",
                    k,
                    self.factors.len()
                ))
            })
    }
}

/// A register state held as one length-2 axis per qubit.
#[derive(Debug, Clone, PartialEq)]
pub struct QubitTensor {
    amplitudes: ArrayD<Complex<f64>>,
}

impl QubitTensor {
    /// Reshapes a state vector; row-major order keeps qubit 0 on axis 0.
    pub fn from_state(state: QuantumState) -> Result<Self, QftError> {
        let shape = vec![2usize; state.num_qubits()];
        let amplitudes = ArrayD::from_shape_vec(IxDyn(&shape), state.into_vector())
            .map_err(|e| QftError::invalid_input(e.to_string()))?;
        Ok(Self { amplitudes })
    }

    /// `|index>` over `num_qubits` qubits.
    pub fn basis(num_qubits: usize, index: usize) -> Result<Self, QftError> {
        Self::from_state(QuantumState::basis(num_qubits, index)?)
    }

    /// Flattens back into a state vector.
    pub fn into_state(self) -> Result<QuantumState, QftError> {
        QuantumState::from_unnormalized(self.amplitudes.iter().copied().collect())
    }

    /// Number of axes.
    pub fn num_qubits(&self) -> usize {
        self.amplitudes.ndim()
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), QftError> {
        if qubit >= self.num_qubits() {
            return Err(QftError::invalid_argument(format!(
                "Qubit {} outside a {}-qubit tensor",
                qubit,
                self.num_qubits()
            )));
        }
        Ok(())
    }

    /// Applies a single-qubit gate on `qubit`.
    pub fn apply_single(&mut self, qubit: usize, gate: &Matrix2) -> Result<(), QftError> {
        self.check_qubit(qubit)?;
        apply_along_axis(self.amplitudes.view_mut(), qubit, gate);
        Ok(())
    }

    /// Multiplies by `phase` every amplitude where both `control` and `target` are `|1>`.
    pub fn apply_controlled_phase(
        &mut self,
        control: usize,
        target: usize,
        phase: Complex<f64>,
    ) -> Result<(), QftError> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QftError::invalid_argument(format!(
                "Control and target are both qubit {}",
                control
            )));
        }
        let diagonal = [[Complex::one(), Complex::zero()], [Complex::zero(), phase]];
        // the hyperplane has one axis fewer
        let axis = if target > control { target - 1 } else { target };
        let hyperplane = self.amplitudes.index_axis_mut(Axis(control), 1);
        apply_along_axis(hyperplane, axis, &diagonal);
        Ok(())
    }

    /// Forward QFT restricted to the qubits in `register`, naive gate order.
    pub fn qft_on_register(&mut self, register: Range<usize>, cache: &PhaseCache) -> Result<(), QftError> {
        let hadamard = registry().hadamard();
        for target in register.clone() {
            self.apply_single(target, &hadamard)?;
            for control in target + 1..register.end {
                let factor = cache.factor((control - target + 1) as u32)?;
                self.apply_controlled_phase(control, target, factor)?;
            }
        }
        Ok(())
    }

    /// Inverse of [`QubitTensor::qft_on_register`].
    pub fn inverse_qft_on_register(&mut self, register: Range<usize>, cache: &PhaseCache) -> Result<(), QftError> {
        let hadamard = registry().hadamard();
        for target in register.clone().rev() {
            for control in (target + 1..register.end).rev() {
                let factor = cache.factor((control - target + 1) as u32)?;
                self.apply_controlled_phase(control, target, factor.conj())?;
            }
            self.apply_single(target, &hadamard)?;
        }
        Ok(())
    }

    /// Probability of each basis state of the leading `num_qubits` qubits,
    /// summed over the remaining ones.
    pub fn leading_marginal(&self, num_qubits: usize) -> Result<Vec<f64>, QftError> {
        if num_qubits == 0 || num_qubits > self.num_qubits() {
            return Err(QftError::invalid_argument(format!(
                "Cannot marginalize onto {} of {} qubits",
                num_qubits,
                self.num_qubits()
            )));
        }
        let rows = 1usize << num_qubits;
        let cols = 1usize << (self.num_qubits() - num_qubits);
        let grid = self
            .amplitudes
            .mapv(|c| c.norm_sqr())
            .into_shape_with_order((rows, cols))
            .map_err(|e| QftError::invalid_input(e.to_string()))?;
        Ok(grid.sum_axis(Axis(1)).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::{qft, QftStrategy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TEST_TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_single_gate_matches_bit_order() -> Result<(), QftError> {
        // X on qubit 0 of |000> flips the most significant bit
        let mut tensor = QubitTensor::basis(3, 0)?;
        tensor.apply_single(0, &registry().bit_flip())?;
        assert_eq!(tensor.into_state()?.most_probable(), (4, 1.0));
        Ok(())
    }

    #[test]
    fn test_controlled_phase_touches_only_both_ones() -> Result<(), QftError> {
        let mut tensor = QubitTensor::from_state(QuantumState::new(vec![Complex::new(0.5, 0.0); 4])?)?;
        let i = Complex::new(0.0, 1.0);
        tensor.apply_controlled_phase(1, 0, i)?;
        let out = tensor.into_state()?;
        let half = Complex::new(0.5, 0.0);
        let expected = [half, half, half, half * i];
        for (actual, expected) in out.vector().iter().zip(expected.iter()) {
            assert!((actual - expected).norm() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn test_controlled_phase_rejects_same_qubit() -> Result<(), QftError> {
        let mut tensor = QubitTensor::basis(2, 0)?;
        assert!(matches!(
            tensor.apply_controlled_phase(1, 1, Complex::one()),
            Err(QftError::InvalidArgument { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_register_qft_matches_operator_qft() -> Result<(), QftError> {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=5 {
            let state = QuantumState::random(n, &mut rng)?;
            let expected = qft(&state, QftStrategy::Naive)?;
            let mut tensor = QubitTensor::from_state(state)?;
            tensor.qft_on_register(0..n, &PhaseCache::new(n as u32))?;
            let actual = tensor.into_state()?;
            assert!(
                actual.approx_eq(&expected, Some(TEST_TOLERANCE)),
                "tensor QFT differs from operator QFT for n = {}",
                n
            );
        }
        Ok(())
    }

    #[test]
    fn test_inverse_restores_sub_register() -> Result<(), QftError> {
        let mut rng = StdRng::seed_from_u64(11);
        let state = QuantumState::random(4, &mut rng)?;
        let cache = PhaseCache::new(2);
        let mut tensor = QubitTensor::from_state(state.clone())?;
        tensor.qft_on_register(2..4, &cache)?;
        tensor.inverse_qft_on_register(2..4, &cache)?;
        assert!(tensor.into_state()?.approx_eq(&state, Some(TEST_TOLERANCE)));
        Ok(())
    }

    #[test]
    fn test_phase_cache_bounds() {
        let cache = PhaseCache::new(3);
        assert!(cache.factor(3).is_ok());
        assert!(cache.factor(0).is_err());
        assert!(cache.factor(4).is_err());
        let quarter = cache.factor(2).map(|z| (z - Complex::new(0.0, 1.0)).norm());
        assert!(matches!(quarter, Ok(d) if d < TEST_TOLERANCE));
    }

    #[test]
    fn test_leading_marginal_sums_trailing_axes() -> Result<(), QftError> {
        // |10> ⊗ |1> over three qubits: index 0b101
        let tensor = QubitTensor::basis(3, 5)?;
        assert_eq!(tensor.leading_marginal(2)?, vec![0.0, 0.0, 1.0, 0.0]);
        assert!(tensor.leading_marginal(4).is_err());
        Ok(())
    }
}
