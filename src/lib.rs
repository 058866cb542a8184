// src/lib.rs

//! `qfourier` - A linear-algebra simulator for the quantum Fourier transform
//!
//! Gates are explicit complex matrices, composed into full-register operators
//! by Kronecker products and applied to a state vector. On top of that the
//! crate builds the QFT (naive and batched), its inverse, and a Fourier-domain
//! integer adder with two paths: one through operator matrices and one that
//! indexes the state as a tensor and never builds an operator.
//!
//! Qubit 0 is the most significant bit of every basis index.

pub mod core;
pub mod gates;
pub mod operators;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod transforms;
pub mod adder;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{QftError, QuantumState};
pub use gates::{GateKind, Matrix2};
pub use operators::{DenseOperator, Operator, Representation, SparseOperator};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{FourierSimulator, RunStats, SimulationResult, SimulatorConfig};
pub use transforms::{inverse_qft, inverse_qft_circuit, qft, qft_circuit, QftStrategy};
pub use adder::{add, add_tensor, add_tensor_with, add_with};
pub use validation::{check_normalization, check_register_size, num_qubits_for_dimension, validate_state};

// Example 1: QFT round trip
// Runs the forward transform as a circuit, then undoes it with the canonical inverse.
/// ```
/// use qfourier::{FourierSimulator, QuantumState, QftError};
///
/// # fn main() -> Result<(), QftError> {
/// let simulator = FourierSimulator::new();
/// let input = QuantumState::basis(3, 5)?;
///
/// let spectrum = simulator.qft(input.clone())?;
/// // every basis state of a transformed basis state is equally likely
/// for p in spectrum.probabilities() {
///     assert!((p - 0.125).abs() < 1e-12);
/// }
///
/// let restored = simulator.inverse_qft(spectrum)?;
/// assert!(restored.approx_eq(&input, Some(1e-9)));
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Circuit construction and statistics
// Builds the batched QFT, prints its diagram and checks how many operators it built.
/// ```
/// use qfourier::{qft_circuit, FourierSimulator, QftStrategy, QuantumState, Representation, SimulatorConfig};
///
/// # fn main() -> Result<(), qfourier::QftError> {
/// let circuit = qft_circuit(4, QftStrategy::Batched)?;
/// println!("{}", circuit);
/// assert_eq!(circuit.len(), 7);
///
/// let simulator = FourierSimulator::with_config(
///     SimulatorConfig::default().with_representation(Representation::Sparse),
/// );
/// let result = simulator.run(&circuit, QuantumState::basis(4, 0)?)?;
/// assert_eq!(result.stats().operators_built, 7);
/// assert!(result.stats().peak_operator_entries < 16 * 16);
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 3: Both adders
/// ```
/// # fn main() -> Result<(), qfourier::QftError> {
/// assert_eq!(qfourier::add(12, 7)?, 19);
/// assert_eq!(qfourier::add_tensor(12, 7)?, 19);
/// assert!(matches!(qfourier::add_tensor(-1, 7), Err(qfourier::QftError::InvalidArgument { .. })));
/// # Ok(())
/// # }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
