// src/simulation/config.rs

use crate::core::constants::qft_constants::{DEFAULT_MAX_QUBITS, DEFAULT_NORM_TOLERANCE};
use crate::operators::Representation;
use crate::transforms::QftStrategy;

/// Settings for a [`FourierSimulator`](super::FourierSimulator).
///
/// ```
/// use qfourier::{QftStrategy, Representation, SimulatorConfig};
///
/// let config = SimulatorConfig::default()
///     .with_strategy(QftStrategy::Batched)
///     .with_representation(Representation::Sparse)
///     .with_validate_steps(true);
/// assert_eq!(config.max_qubits, 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Storage layout of built operators.
    pub representation: Representation,
    /// How the forward transform is decomposed into operators.
    pub strategy: QftStrategy,
    /// Allowed deviation of the squared norm from 1.0.
    pub norm_tolerance: f64,
    /// Check the norm after every operator application, not only at run boundaries.
    pub validate_steps: bool,
    /// Largest register accepted, in qubits.
    pub max_qubits: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            representation: Representation::Dense,
            strategy: QftStrategy::Naive,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            validate_steps: false,
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }
}

impl SimulatorConfig {
    /// Sets the operator representation.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Sets the forward-transform strategy.
    pub fn with_strategy(mut self, strategy: QftStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the norm tolerance.
    pub fn with_norm_tolerance(mut self, norm_tolerance: f64) -> Self {
        self.norm_tolerance = norm_tolerance;
        self
    }

    /// Enables or disables per-step norm checks.
    pub fn with_validate_steps(mut self, validate_steps: bool) -> Self {
        self.validate_steps = validate_steps;
        self
    }

    /// Sets the register ceiling.
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }
}
