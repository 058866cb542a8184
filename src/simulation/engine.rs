// src/simulation/engine.rs
use crate::circuits::Circuit;
use crate::core::{QftError, QuantumState};
use crate::operations::Operation;
use crate::operators::{DenseOperator, Operator, Representation, SparseOperator};
use crate::simulation::results::RunStats;
use crate::simulation::SimulatorConfig;
use crate::validation::check_normalization;
use tracing::trace;

/// Evolves a state vector by building each operation as a full-register
/// operator and multiplying it into the state.
/// (Internal visibility)
pub(crate) struct StateVectorEngine {
    state: QuantumState,
    representation: Representation,
    norm_tolerance: f64,
    validate_steps: bool,
    stats: RunStats,
}

impl StateVectorEngine {
    /// Initializes the engine on `state`.
    pub(crate) fn init(state: QuantumState, config: &SimulatorConfig) -> Self {
        Self {
            state,
            representation: config.representation,
            norm_tolerance: config.norm_tolerance,
            validate_steps: config.validate_steps,
            stats: RunStats::default(),
        }
    }

    /// Applies every operation of `circuit` in order.
    pub(crate) fn run(&mut self, circuit: &Circuit) -> Result<(), QftError> {
        if circuit.num_qubits() != self.state.num_qubits() {
            return Err(QftError::DimensionMismatch {
                expected: self.state.num_qubits(),
                actual: circuit.num_qubits(),
            });
        }
        for op in circuit.operations() {
            self.apply_operation(op)?;
        }
        Ok(())
    }

    /// Builds `op` in the configured representation and applies it.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), QftError> {
        match self.representation {
            Representation::Dense => {
                let operator: DenseOperator = op.build(self.state.num_qubits())?;
                self.apply_operator(&operator)
            }
            Representation::Sparse => {
                let operator: SparseOperator = op.build(self.state.num_qubits())?;
                self.apply_operator(&operator)
            }
        }
    }

    /// Multiplies an already built operator into the state.
    pub(crate) fn apply_operator<O: Operator>(&mut self, operator: &O) -> Result<(), QftError> {
        self.stats.record_build(operator.stored_entries());
        trace!(
            target: "qfourier::engine",
            dim = operator.dim(),
            entries = operator.stored_entries(),
            "applying operator"
        );
        let next = operator.apply(self.state.vector())?;
        self.state.replace_vector(next)?;
        if self.validate_steps {
            check_normalization(&self.state, Some(self.norm_tolerance))?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn get_state(&self) -> &QuantumState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn stats(&self) -> RunStats {
        self.stats
    }

    pub(crate) fn into_parts(self) -> (QuantumState, RunStats) {
        (self.state, self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::gates::GateKind;
    use num_complex::Complex;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    /// Asserts that two complex state vectors are approximately equal component-wise.
    fn assert_complex_vec_approx_equal(actual: &[Complex<f64>], expected: &[Complex<f64>], context: &str) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
                i, actual[i], expected[i], dist_sq, context
            );
        }
    }

    #[test]
    fn test_bell_pair_in_both_representations() -> Result<(), QftError> {
        let circuit = CircuitBuilder::new(2)
            .add_op(Operation::Gate { target: 0, gate: GateKind::Hadamard })
            .add_op(Operation::Controlled { control: 0, target: 1, gate: GateKind::BitFlip })
            .build()?;
        let s = Complex::new(FRAC_1_SQRT_2, 0.0);
        let zero = Complex::new(0.0, 0.0);

        for representation in [Representation::Dense, Representation::Sparse] {
            let config = SimulatorConfig::default().with_representation(representation);
            let mut engine = StateVectorEngine::init(QuantumState::basis(2, 0)?, &config);
            engine.run(&circuit)?;
            assert_complex_vec_approx_equal(
                engine.get_state().vector(),
                &[s, zero, zero, s],
                &format!("Bell pair, {} operators", representation),
            );
            assert_eq!(engine.stats().operators_built, 2);
        }
        Ok(())
    }

    #[test]
    fn test_stats_track_peak_entries() -> Result<(), QftError> {
        let circuit = CircuitBuilder::new(3)
            .add_op(Operation::Gate { target: 2, gate: GateKind::BitFlip })
            .build()?;
        let config = SimulatorConfig::default().with_representation(Representation::Sparse);
        let mut engine = StateVectorEngine::init(QuantumState::basis(3, 0)?, &config);
        engine.run(&circuit)?;
        assert_eq!(engine.stats().peak_operator_entries, 8);

        let mut dense = StateVectorEngine::init(QuantumState::basis(3, 0)?, &SimulatorConfig::default());
        dense.run(&circuit)?;
        assert_eq!(dense.stats().peak_operator_entries, 64);
        Ok(())
    }

    #[test]
    fn test_circuit_width_must_match_state() -> Result<(), QftError> {
        let circuit = CircuitBuilder::new(3)
            .add_op(Operation::Gate { target: 0, gate: GateKind::Hadamard })
            .build()?;
        let mut engine = StateVectorEngine::init(QuantumState::basis(2, 0)?, &SimulatorConfig::default());
        assert_eq!(engine.run(&circuit), Err(QftError::DimensionMismatch { expected: 2, actual: 3 }));
        Ok(())
    }

    #[test]
    fn test_validate_steps_catches_norm_drift() -> Result<(), QftError> {
        let config = SimulatorConfig::default().with_validate_steps(true);
        let mut engine = StateVectorEngine::init(QuantumState::basis(1, 0)?, &config);
        // 2·I is not unitary
        let doubled = DenseOperator::from_array(ndarray::arr2(&[
            [Complex::new(2.0, 0.0), Complex::new(0.0, 0.0)],
            [Complex::new(0.0, 0.0), Complex::new(2.0, 0.0)],
        ]))?;
        assert!(matches!(engine.apply_operator(&doubled), Err(QftError::Incoherence { .. })));
        Ok(())
    }
}
