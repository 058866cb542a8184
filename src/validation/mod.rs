// src/validation/mod.rs

//! Provides functions to validate register sizes and `QuantumState` norms.

use crate::core::constants::qft_constants::DEFAULT_NORM_TOLERANCE;
use crate::core::{QftError, QuantumState};

/// Derives the qubit count of a state vector of length `len`.
///
/// The count is `log2(len)` computed exactly; a fractional qubit count is never
/// rounded. Lengths 0 and 1 describe no qubits and are rejected as well.
///
/// # Returns
/// * `Ok(n)` with `len == 2^n`, `n >= 1`.
/// * `Err(QftError::InvalidInput)` otherwise.
pub fn num_qubits_for_dimension(len: usize) -> Result<usize, QftError> {
    if len < 2 || !len.is_power_of_two() {
        return Err(QftError::invalid_input(format!(
            "State vector length {} is not a power of two (at least 2)",
            len
        )));
    }
    Ok(len.trailing_zeros() as usize)
}

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `QuantumState` to check.
/// * `tolerance` - Allowed deviation from 1.0 (e.g., 1e-9). Defaults are available.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QftError::Incoherence)` if normalization fails.
pub fn check_normalization(state: &QuantumState, tolerance: Option<f64>) -> Result<(), QftError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.vector().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QftError::Incoherence {
            message: format!("State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})", norm_sq, effective_tolerance)
        })
    } else {
        Ok(())
    }
}

/// Checks that a register of `num_qubits` stays within `max_qubits`.
pub fn check_register_size(num_qubits: usize, max_qubits: usize) -> Result<(), QftError> {
    if num_qubits > max_qubits {
        Err(QftError::invalid_input(format!(
            "Register of {} qubits exceeds the configured limit of {}",
            num_qubits, max_qubits
        )))
    } else {
        Ok(())
    }
}

/// Performs the checks applied to every state entering or leaving a transform.
///
/// # Arguments
/// * `state` - The `QuantumState` to validate.
/// * `max_qubits` - Largest accepted register.
/// * `norm_tolerance` - Optional allowed deviation from 1.0 for normalization.
pub fn validate_state(
    state: &QuantumState,
    max_qubits: usize,
    norm_tolerance: Option<f64>,
) -> Result<(), QftError> {
    check_register_size(state.num_qubits(), max_qubits)?;
    check_normalization(state, norm_tolerance)?;
    Ok(())
}
