// tests/simulation_tests.rs

// Import necessary types from the qfourier crate
use qfourier::{
    Circuit, CircuitBuilder, FourierSimulator, GateKind, Operation, QftError, QuantumState, Representation,
    SimulatorConfig,
};
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

fn both_representations() -> [FourierSimulator; 2] {
    [
        FourierSimulator::new(),
        FourierSimulator::with_config(SimulatorConfig::default().with_representation(Representation::Sparse)),
    ]
}

#[test]
fn test_empty_circuit_keeps_state() -> Result<(), QftError> {
    let state = QuantumState::basis(2, 3)?;
    let result = FourierSimulator::new().run(&Circuit::new(2), state.clone())?;
    assert_eq!(result.state(), &state);
    assert_eq!(result.stats().operators_built, 0);
    Ok(())
}

#[test]
fn test_bit_flip_on_middle_qubit() -> Result<(), QftError> {
    // |000> -> |010>, index 2 since qubit 0 is the most significant bit
    let circuit = CircuitBuilder::new(3)
        .add_op(Operation::Gate { target: 1, gate: GateKind::BitFlip })
        .build()?;
    for simulator in both_representations() {
        let result = simulator.run(&circuit, QuantumState::basis(3, 0)?)?;
        assert_eq!(result.state().most_probable(), (2, 1.0));
    }
    Ok(())
}

#[test]
fn test_controlled_flip_after_hadamard() -> Result<(), QftError> {
    let circuit = CircuitBuilder::new(2)
        .add_op(Operation::Gate { target: 0, gate: GateKind::Hadamard })
        .add_op(Operation::Controlled { control: 0, target: 1, gate: GateKind::BitFlip })
        .build()?;
    let s = Complex::new(FRAC_1_SQRT_2, 0.0);
    let zero = Complex::new(0.0, 0.0);
    for simulator in both_representations() {
        let result = simulator.run(&circuit, QuantumState::basis(2, 0)?)?;
        assert_complex_vec_approx_equal(result.state().vector(), &[s, zero, zero, s], "Bell pair");
    }
    Ok(())
}

#[test]
fn test_multi_controlled_phases_apply_together() -> Result<(), QftError> {
    // control qubit 2 set, targets 0 and 1 set: phases i (R2) and -1 (R1) multiply to -i
    let circuit = CircuitBuilder::new(3)
        .add_op(Operation::MultiControlled {
            control: 2,
            targets: vec![(0, GateKind::Rotation(2)), (1, GateKind::Rotation(1))],
        })
        .build()?;
    let out = FourierSimulator::new().run(&circuit, QuantumState::basis(3, 7)?)?;
    assert!((out.state().vector()[7] - Complex::new(0.0, -1.0)).norm() < TEST_TOLERANCE);

    let untouched = FourierSimulator::new().run(&circuit, QuantumState::basis(3, 6)?)?;
    assert!((untouched.state().vector()[6] - Complex::new(1.0, 0.0)).norm() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_circuit_adjoint_undoes_run() -> Result<(), QftError> {
    let circuit = CircuitBuilder::new(2)
        .add_op(Operation::Gate { target: 1, gate: GateKind::Hadamard })
        .add_op(Operation::Controlled { control: 1, target: 0, gate: GateKind::Rotation(3) })
        .add_op(Operation::Layer { placements: vec![(0, GateKind::Phase(0.3)), (1, GateKind::Hadamard)] })
        .build()?;
    let simulator = FourierSimulator::new();
    let start = QuantumState::basis(2, 1)?;
    let forward = simulator.run(&circuit, start.clone())?.into_state();
    let back = simulator.run(&circuit.adjoint(), forward)?.into_state();
    assert!(back.approx_eq(&start, Some(TEST_TOLERANCE)));
    Ok(())
}

#[test]
fn test_width_mismatch() -> Result<(), QftError> {
    let circuit = Circuit::new(3);
    let result = FourierSimulator::new().run(&circuit, QuantumState::basis(2, 0)?);
    assert_eq!(result, Err(QftError::DimensionMismatch { expected: 2, actual: 3 }));
    Ok(())
}

#[test]
fn test_builder_reports_bad_qubit() {
    let built = CircuitBuilder::new(2)
        .add_op(Operation::Layer { placements: vec![(0, GateKind::Hadamard), (5, GateKind::Hadamard)] })
        .build();
    assert!(matches!(built, Err(QftError::InvalidArgument { .. })));
}

#[test]
fn test_duplicate_layer_placement_fails_at_build() -> Result<(), QftError> {
    let mut circuit = Circuit::new(2);
    circuit.add_operation(Operation::Layer { placements: vec![(0, GateKind::Hadamard), (0, GateKind::BitFlip)] })?;
    assert!(matches!(
        FourierSimulator::new().run(&circuit, QuantumState::basis(2, 0)?),
        Err(QftError::InvalidArgument { .. })
    ));
    Ok(())
}

#[test]
fn test_norm_tolerance_is_configurable() -> Result<(), QftError> {
    let drifted = QuantumState::from_unnormalized(vec![Complex::new(1.001, 0.0), Complex::new(0.0, 0.0)])?;
    let circuit = Circuit::new(1);
    assert!(matches!(
        FourierSimulator::new().run(&circuit, drifted.clone()),
        Err(QftError::Incoherence { .. })
    ));
    let loose = FourierSimulator::with_config(SimulatorConfig::default().with_norm_tolerance(1e-2));
    assert_eq!(loose.run(&circuit, drifted)?.state().most_probable().0, 0);
    Ok(())
}
