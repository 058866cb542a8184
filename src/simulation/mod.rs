// src/simulation/mod.rs

//! Runs `qfourier::circuits::Circuit`s against a `QuantumState`.
//! This module contains the `FourierSimulator` entry point and the internal
//! `StateVectorEngine` that builds each operation as a full-register operator.

mod config;
mod results;
pub(crate) mod engine;

pub use config::SimulatorConfig;
pub use results::{RunStats, SimulationResult};

use crate::adder;
use crate::circuits::Circuit;
use crate::core::{QftError, QuantumState};
use crate::transforms::{inverse_qft_circuit, qft_circuit};
use crate::validation::validate_state;
use engine::StateVectorEngine;
use tracing::debug;

/// The main simulator orchestrating circuit runs, transforms and additions.
#[derive(Debug, Clone, Default)]
pub struct FourierSimulator {
    config: SimulatorConfig,
}

impl FourierSimulator {
    /// Creates a new simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given settings.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Current settings.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs `circuit` on `state`.
    ///
    /// The state is validated (register size and norm) before the first and
    /// after the last operation; with `validate_steps` the norm is also checked
    /// after every operator.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the final state and run statistics.
    /// * `Err(QftError::DimensionMismatch)` if the circuit and state widths differ.
    /// * `Err(QftError::InvalidInput)` if the register exceeds `max_qubits`.
    /// * `Err(QftError::Incoherence)` if the norm leaves the tolerance.
    pub fn run(&self, circuit: &Circuit, state: QuantumState) -> Result<SimulationResult, QftError> {
        let tolerance = Some(self.config.norm_tolerance);
        validate_state(&state, self.config.max_qubits, tolerance)?;
        debug!(
            target: "qfourier::engine",
            qubits = state.num_qubits(),
            operations = circuit.len(),
            representation = %self.config.representation,
            "running circuit"
        );

        let mut engine = StateVectorEngine::init(state, &self.config);
        engine.run(circuit)?;
        let (state, stats) = engine.into_parts();

        validate_state(&state, self.config.max_qubits, tolerance)?;
        debug!(
            target: "qfourier::engine",
            operators_built = stats.operators_built,
            peak_entries = stats.peak_operator_entries,
            total_entries = stats.total_operator_entries,
            "circuit finished"
        );
        Ok(SimulationResult::new(state, stats))
    }

    /// Forward QFT of `state` using the configured strategy and representation.
    pub fn qft(&self, state: QuantumState) -> Result<QuantumState, QftError> {
        let circuit = qft_circuit(state.num_qubits(), self.config.strategy)?;
        Ok(self.run(&circuit, state)?.into_state())
    }

    /// Inverse QFT of `state`; undoes [`FourierSimulator::qft`] for every strategy.
    pub fn inverse_qft(&self, state: QuantumState) -> Result<QuantumState, QftError> {
        let circuit = inverse_qft_circuit(state.num_qubits(), self.config.strategy)?;
        Ok(self.run(&circuit, state)?.into_state())
    }

    /// `a + b` through full operator matrices.
    pub fn add(&self, a: i64, b: i64) -> Result<u64, QftError> {
        adder::add_with(a, b, &self.config)
    }

    /// `a + b` through the tensor-indexed path.
    pub fn add_tensor(&self, a: i64, b: i64) -> Result<u64, QftError> {
        adder::add_tensor_with(a, b, &self.config)
    }
}
