// tests/transform_tests.rs

use qfourier::{
    inverse_qft, qft, qft_circuit, FourierSimulator, QftError, QftStrategy, QuantumState, Representation,
    SimulatorConfig,
};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TEST_TOLERANCE: f64 = 1e-9;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x51f7)
}

/// Asserts that two states lie within `TEST_TOLERANCE` in L2 distance.
fn assert_states_close(actual: &QuantumState, expected: &QuantumState, context: &str) -> Result<(), QftError> {
    let distance = actual.distance(expected)?;
    assert!(
        distance < TEST_TOLERANCE,
        "States differ by {:.3e} - Actual: {}, Expected: {}, Context: {}",
        distance, actual, expected, context
    );
    Ok(())
}

fn reverse_bits(value: usize, width: usize) -> usize {
    (0..width).fold(0, |acc, i| (acc << 1) | ((value >> i) & 1))
}

#[test]
fn test_qft_preserves_norm() -> Result<(), QftError> {
    let mut rng = seeded_rng();
    for dim in 1..=8 {
        let state = QuantumState::random(dim, &mut rng)?;
        let out = qft(&state, QftStrategy::Naive)?;
        assert!((out.norm() - 1.0).abs() < TEST_TOLERANCE, "norm drifted for dim {}: {}", dim, out.norm());
    }
    Ok(())
}

#[test]
fn test_inverse_round_trip() -> Result<(), QftError> {
    let mut rng = seeded_rng();
    for dim in 1..=6 {
        let state = QuantumState::random(dim, &mut rng)?;
        let restored = inverse_qft(&qft(&state, QftStrategy::Naive)?)?;
        assert_states_close(&restored, &state, &format!("round trip, dim {}", dim))?;
    }
    Ok(())
}

#[test]
fn test_naive_matches_batched() -> Result<(), QftError> {
    let mut rng = seeded_rng();
    for dim in 1..=8 {
        let state = QuantumState::random(dim, &mut rng)?;
        let naive = qft(&state, QftStrategy::Naive)?;
        let batched = qft(&state, QftStrategy::Batched)?;
        assert_states_close(&batched, &naive, &format!("naive vs batched, dim {}", dim))?;
    }
    Ok(())
}

#[test]
fn test_dense_matches_sparse() -> Result<(), QftError> {
    let mut rng = seeded_rng();
    for strategy in [QftStrategy::Naive, QftStrategy::Batched] {
        for dim in 1..=6 {
            let state = QuantumState::random(dim, &mut rng)?;
            let dense = FourierSimulator::with_config(SimulatorConfig::default().with_strategy(strategy))
                .qft(state.clone())?;
            let sparse = FourierSimulator::with_config(
                SimulatorConfig::default()
                    .with_strategy(strategy)
                    .with_representation(Representation::Sparse),
            )
            .qft(state)?;
            assert_states_close(&sparse, &dense, &format!("{} strategy, dim {}", strategy, dim))?;
        }
    }
    Ok(())
}

#[test]
fn test_qft_of_zero_is_uniform() -> Result<(), QftError> {
    for dim in 1..=5 {
        let out = qft(&QuantumState::basis(dim, 0)?, QftStrategy::Naive)?;
        let amplitude = 1.0 / ((1usize << dim) as f64).sqrt();
        for c in out.vector() {
            assert!((c - Complex::new(amplitude, 0.0)).norm() < TEST_TOLERANCE, "dim {}: {}", dim, c);
        }
    }
    Ok(())
}

#[test]
fn test_basis_state_matches_bit_reversed_dft() -> Result<(), QftError> {
    let dim = 4;
    let size = 1usize << dim;
    for x in [1usize, 6, 11] {
        let out = qft(&QuantumState::basis(dim, x)?, QftStrategy::Naive)?;
        for (j, c) in out.vector().iter().enumerate() {
            let k = reverse_bits(j, dim);
            let angle = std::f64::consts::TAU * ((x * k) % size) as f64 / size as f64;
            let expected = Complex::from_polar(1.0 / (size as f64).sqrt(), angle);
            assert!(
                (c - expected).norm() < TEST_TOLERANCE,
                "x = {}, j = {}: got {}, expected {}",
                x, j, c, expected
            );
        }
    }
    Ok(())
}

#[test]
fn test_invalid_state_length() {
    let amps = vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)];
    assert!(matches!(QuantumState::new(amps), Err(QftError::InvalidInput { .. })));
    assert!(matches!(qfourier::num_qubits_for_dimension(0), Err(QftError::InvalidInput { .. })));
}

#[test]
fn test_compiled_strategy_unsupported() -> Result<(), QftError> {
    let state = QuantumState::basis(2, 1)?;
    assert!(matches!(qft(&state, QftStrategy::Compiled), Err(QftError::UnsupportedOperation { .. })));
    Ok(())
}

#[test]
fn test_operator_construction_counts() -> Result<(), QftError> {
    let simulator = FourierSimulator::new();
    for dim in 1..=6 {
        for (strategy, expected) in [(QftStrategy::Naive, dim * (dim + 1) / 2), (QftStrategy::Batched, 2 * dim - 1)] {
            let circuit = qft_circuit(dim, strategy)?;
            let result = simulator.run(&circuit, QuantumState::basis(dim, 0)?)?;
            assert_eq!(result.stats().operators_built, expected, "{} strategy, dim {}", strategy, dim);
        }
    }
    Ok(())
}
