// src/adder/mod.rs

//! Fourier-domain integer addition.
//!
//! `a` is encoded as a basis state, moved to the Fourier basis, rotated by
//! phases proportional to `b`, and transformed back; the most probable basis
//! state is `a + b`. The register carries one bit more than the wider operand,
//! so the sum never wraps.
//!
//! Two paths compute the same integer:
//! * [`add`] builds every step as a full-register operator.
//! * [`add_tensor`] holds both operands in a `2n`-qubit [`tensor::QubitTensor`]
//!   and couples them with controlled phases, never building an operator.

pub mod tensor;

use crate::circuits::Circuit;
use crate::core::constants::qft_constants::TAU;
use crate::core::state::argmax;
use crate::core::{QftError, QuantumState};
use crate::gates::GateKind;
use crate::operations::Operation;
use crate::simulation::{FourierSimulator, SimulatorConfig};
use crate::transforms::{inverse_qft_circuit, qft_circuit};
use crate::validation::check_register_size;
use tensor::{PhaseCache, QubitTensor};
use tracing::debug;

/// `a + b` with full operator matrices and the default configuration.
///
/// ```
/// # fn main() -> Result<(), qfourier::QftError> {
/// assert_eq!(qfourier::add(7, 9)?, 16);
/// assert!(qfourier::add(-1, 2).is_err());
/// # Ok(())
/// # }
/// ```
pub fn add(a: i64, b: i64) -> Result<u64, QftError> {
    add_with(a, b, &SimulatorConfig::default())
}

/// `a + b` with full operator matrices built per `config`.
///
/// # Errors
/// * `QftError::InvalidArgument` if either operand is negative.
/// * `QftError::InvalidInput` if the register exceeds `config.max_qubits`.
/// * `QftError::UnsupportedOperation` if `config.strategy` is `Compiled`.
pub fn add_with(a: i64, b: i64, config: &SimulatorConfig) -> Result<u64, QftError> {
    let (a, b) = check_operands(a, b)?;
    let n = register_width(a, b);
    check_register_size(n, config.max_qubits)?;
    debug!(target: "qfourier::adder", a, b, qubits = n, strategy = %config.strategy, "operator adder");

    let mut circuit: Circuit = qft_circuit(n, config.strategy)?;
    circuit.add_operation(fourier_phase_layer(n, b))?;
    circuit.add_operations(inverse_qft_circuit(n, config.strategy)?.operations().iter().cloned())?;

    let state = QuantumState::basis(n, to_index(a)?)?;
    let result = FourierSimulator::with_config(config.clone()).run(&circuit, state)?;
    let (sum, probability) = result.state().most_probable();
    debug!(target: "qfourier::adder", sum, probability, operators = result.stats().operators_built, "operator adder done");
    Ok(sum as u64)
}

/// `a + b` on the tensor path with the default configuration.
pub fn add_tensor(a: i64, b: i64) -> Result<u64, QftError> {
    add_tensor_with(a, b, &SimulatorConfig::default())
}

/// `a + b` on the tensor path. Only `max_qubits` and `norm_tolerance` of
/// `config` apply; the register holds `2n` qubits.
pub fn add_tensor_with(a: i64, b: i64, config: &SimulatorConfig) -> Result<u64, QftError> {
    let (a, b) = check_operands(a, b)?;
    let n = register_width(a, b);
    check_register_size(2 * n, config.max_qubits)?;
    debug!(target: "qfourier::adder", a, b, qubits = 2 * n, "tensor adder");

    // a on qubits 0..n, b on n..2n
    let index = (u128::from(a) << n) | u128::from(b);
    let mut tensor = QubitTensor::basis(2 * n, to_index(index)?)?;
    let cache = PhaseCache::new(n as u32);

    tensor.qft_on_register(0..n, &cache)?;
    for target in 0..n {
        for k in target..n {
            // bit k of b weighs 2^(n-1-k); qubit `target` of a turns at 2^(n-target)
            tensor.apply_controlled_phase(n + k, target, cache.factor((k - target + 1) as u32)?)?;
        }
    }
    tensor.inverse_qft_on_register(0..n, &cache)?;

    let marginal = tensor.leading_marginal(n)?;
    let total: f64 = marginal.iter().sum();
    if (total - 1.0).abs() > config.norm_tolerance {
        return Err(QftError::Incoherence {
            message: format!("Tensor adder lost normalization: total probability {}", total),
        });
    }
    let (sum, probability) = argmax(marginal);
    debug!(target: "qfourier::adder", sum, probability, "tensor adder done");
    Ok(sum as u64)
}

/// Diagonal layer adding `addend` to a Fourier-basis register of `num_qubits`:
/// qubit `i` gets `P(2π · addend / 2^(num_qubits - i))`.
pub fn fourier_phase_layer(num_qubits: usize, addend: u64) -> Operation {
    let placements = (0..num_qubits)
        .map(|i| {
            let period = 1u128 << (num_qubits - i);
            let turns = (u128::from(addend) % period) as f64 / period as f64;
            (i, GateKind::Phase(TAU * turns))
        })
        .collect();
    Operation::Layer { placements }
}

/// Qubits needed for `a + b`: one more than the wider operand's bit length.
pub fn register_width(a: u64, b: u64) -> usize {
    (u64::BITS - a.max(b).leading_zeros()) as usize + 1
}

fn check_operands(a: i64, b: i64) -> Result<(u64, u64), QftError> {
    match (u64::try_from(a), u64::try_from(b)) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => Err(QftError::invalid_argument(format!(
            "Operands must be non-negative, got a = {}, b = {}",
            a, b
        ))),
    }
}

fn to_index<T: Copy + std::fmt::Display + TryInto<usize>>(value: T) -> Result<usize, QftError> {
    value.try_into().map_err(|_| QftError::invalid_argument(format!("{} does not fit a basis index", value)))
}
