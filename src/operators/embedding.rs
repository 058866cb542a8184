// src/operators/embedding.rs

//! Lifting single-qubit gates to whole-register operators.
//!
//! Every builder goes through [`factor_list`], which fixes the contract that
//! factor `i` of the Kronecker product acts on qubit `i`, left to right.

use super::Operator;
use crate::core::QftError;
use crate::gates::{registry, Matrix2};

/// Ordered Kronecker factors for a register of `num_qubits` qubits.
///
/// Position `i` holds the gate placed on qubit `i`, or the identity when none
/// is placed there.
///
/// # Errors
/// `QftError::InvalidArgument` when the register is empty, a qubit index is out
/// of range, or a qubit receives more than one gate.
pub fn factor_list(num_qubits: usize, placements: &[(usize, Matrix2)]) -> Result<Vec<Matrix2>, QftError> {
    if num_qubits == 0 {
        return Err(QftError::invalid_argument("Cannot build an operator on zero qubits"));
    }
    let mut factors: Vec<Option<Matrix2>> = vec![None; num_qubits];
    for (qubit, gate) in placements {
        let slot = factors.get_mut(*qubit).ok_or_else(|| {
            QftError::invalid_argument(format!("Qubit {} is outside a {}-qubit register", qubit, num_qubits))
        })?;
        if slot.is_some() {
            return Err(QftError::invalid_argument(format!("Qubit {} received more than one gate", qubit)));
        }
        *slot = Some(*gate);
    }
    let identity = registry().identity();
    Ok(factors.into_iter().map(|f| f.unwrap_or(identity)).collect())
}

/// Folds the factors left to right with the Kronecker product.
pub fn kron_fold<O: Operator>(factors: &[Matrix2]) -> Result<O, QftError> {
    let (first, rest) = factors
        .split_first()
        .ok_or_else(|| QftError::invalid_argument("Cannot fold an empty factor list"))?;
    Ok(rest
        .iter()
        .fold(O::from_matrix2(first), |acc, m| acc.kron(&O::from_matrix2(m))))
}

/// Full-register operator with the given gates on their qubits and the identity elsewhere.
pub fn embed<O: Operator>(num_qubits: usize, placements: &[(usize, Matrix2)]) -> Result<O, QftError> {
    kron_fold(&factor_list(num_qubits, placements)?)
}

/// `P0(control) ⊗ I + P1(control) ⊗ gate(target)`
pub fn controlled<O: Operator>(num_qubits: usize, control: usize, target: usize, gate: &Matrix2) -> Result<O, QftError> {
    multi_target_controlled(num_qubits, control, &[(target, *gate)])
}

/// One control qubit gating several targets at once:
/// `P0(control) ⊗ I + P1(control) ⊗ (⊗ gates on targets)`.
///
/// Merging the rotations that share a control into one build is what lets the
/// batched transform construct `O(dim)` operators instead of `O(dim²)`.
pub fn multi_target_controlled<O: Operator>(
    num_qubits: usize,
    control: usize,
    targets: &[(usize, Matrix2)],
) -> Result<O, QftError> {
    if targets.iter().any(|(t, _)| *t == control) {
        return Err(QftError::invalid_argument(format!(
            "Control qubit {} cannot also be a target",
            control
        )));
    }
    let gates = registry();
    let idle: O = embed(num_qubits, &[(control, gates.projector_zero())])?;

    let mut active_placements = Vec::with_capacity(targets.len() + 1);
    active_placements.push((control, gates.projector_one()));
    active_placements.extend_from_slice(targets);
    let active: O = embed(num_qubits, &active_placements)?;

    idle.try_add(&active)
}
