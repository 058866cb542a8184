// src/transforms/mod.rs

//! Circuits for the quantum Fourier transform and its inverse.
//!
//! Both decompositions leave the output qubit-reversed relative to the textbook
//! DFT (no terminal swap network). Amplitude `j` of the result holds DFT
//! coefficient `reverse_bits(j)`.

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::{QftError, QuantumState};
use crate::gates::GateKind;
use crate::operations::Operation;
use crate::simulation::{FourierSimulator, SimulatorConfig};
use std::fmt;

/// How the forward transform is decomposed into operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QftStrategy {
    /// One operator per gate: `n(n+1)/2` builds.
    #[default]
    Naive,
    /// Rotations sharing a control merged into one operator: `2n - 1` builds.
    Batched,
    /// JIT-compiled kernel. Not available in this crate.
    Compiled,
}

impl fmt::Display for QftStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QftStrategy::Naive => write!(f, "naive"),
            QftStrategy::Batched => write!(f, "batched"),
            QftStrategy::Compiled => write!(f, "compiled"),
        }
    }
}

/// Builds the forward QFT on `num_qubits` qubits.
///
/// # Errors
/// * `QftError::InvalidInput` for an empty register.
/// * `QftError::UnsupportedOperation` for [`QftStrategy::Compiled`].
pub fn qft_circuit(num_qubits: usize, strategy: QftStrategy) -> Result<Circuit, QftError> {
    if num_qubits == 0 {
        return Err(QftError::invalid_input("QFT needs at least one qubit"));
    }
    let operations = match strategy {
        QftStrategy::Naive => naive_operations(num_qubits),
        QftStrategy::Batched => batched_operations(num_qubits),
        QftStrategy::Compiled => {
            return Err(QftError::UnsupportedOperation {
                message: "the compiled QFT strategy requires a JIT backend, which is not available".to_string(),
            });
        }
    };
    CircuitBuilder::new(num_qubits).add_ops(operations).build()
}

/// Builds the inverse QFT: the adjoint of [`qft_circuit`] for the same strategy.
///
/// For the naive strategy this walks targets from high to low, applying each
/// `R(k)†` from the highest control down before the target's Hadamard.
pub fn inverse_qft_circuit(num_qubits: usize, strategy: QftStrategy) -> Result<Circuit, QftError> {
    Ok(qft_circuit(num_qubits, strategy)?.adjoint())
}

fn naive_operations(n: usize) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(n * (n + 1) / 2);
    for target in 0..n {
        ops.push(Operation::Gate { target, gate: GateKind::Hadamard });
        for control in target + 1..n {
            ops.push(Operation::Controlled {
                control,
                target,
                gate: GateKind::Rotation((control - target + 1) as u32),
            });
        }
    }
    ops
}

// H(bit) commutes with every rotation that neither targets nor controls `bit`,
// and the diagonal rotations commute with each other, so grouping by control
// reproduces the naive product.
fn batched_operations(n: usize) -> Vec<Operation> {
    let mut ops = Vec::with_capacity(2 * n - 1);
    for bit in 0..n {
        ops.push(Operation::Gate { target: bit, gate: GateKind::Hadamard });
        if bit + 1 < n {
            let targets = (0..=bit)
                .map(|t| (t, GateKind::Rotation((bit + 2 - t) as u32)))
                .collect();
            ops.push(Operation::MultiControlled { control: bit + 1, targets });
        }
    }
    ops
}

/// Applies the forward QFT to `state` with a dense naive or batched circuit.
///
/// ```
/// use qfourier::{qft, QftStrategy, QuantumState};
/// # fn main() -> Result<(), qfourier::QftError> {
/// let out = qft(&QuantumState::basis(2, 0)?, QftStrategy::Naive)?;
/// for p in out.probabilities() {
///     assert!((p - 0.25).abs() < 1e-12);
/// }
/// # Ok(())
/// # }
/// ```
pub fn qft(state: &QuantumState, strategy: QftStrategy) -> Result<QuantumState, QftError> {
    FourierSimulator::with_config(SimulatorConfig::default().with_strategy(strategy)).qft(state.clone())
}

/// Applies the inverse QFT to `state` with the default configuration.
pub fn inverse_qft(state: &QuantumState) -> Result<QuantumState, QftError> {
    FourierSimulator::new().inverse_qft(state.clone())
}
