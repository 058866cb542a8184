//! Walks through the QFT circuits and both Fourier adders.
//!
//! Run with `cargo run --example fourier_adder -- 11 6`.

use qfourier::{
    inverse_qft_circuit, qft_circuit, FourierSimulator, QftError, QftStrategy, QuantumState, Representation,
    SimulatorConfig,
};

fn main() -> Result<(), QftError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1).map(|s| s.parse::<i64>());
    let a = args.next().and_then(Result::ok).unwrap_or(11);
    let b = args.next().and_then(Result::ok).unwrap_or(6);

    println!("--- qfourier: Quantum Fourier Transform & Fourier Adder ---");

    // --- Circuits ---
    for strategy in [QftStrategy::Naive, QftStrategy::Batched] {
        let circuit = qft_circuit(3, strategy)?;
        println!("\n{} QFT on 3 qubits:\n{}", strategy, circuit);
    }
    println!("Inverse (naive) QFT on 3 qubits:\n{}", inverse_qft_circuit(3, QftStrategy::Naive)?);

    match qft_circuit(3, QftStrategy::Compiled) {
        Ok(_) => println!("compiled strategy unexpectedly available"),
        Err(e) => println!("compiled strategy: {}", e),
    }

    // --- Transform a basis state ---
    let simulator = FourierSimulator::with_config(
        SimulatorConfig::default().with_representation(Representation::Sparse),
    );
    let input = QuantumState::basis(3, 5)?;
    let result = simulator.run(&qft_circuit(3, QftStrategy::Batched)?, input.clone())?;
    println!("\nQFT|101> = {}", result.state());
    println!("{}", result);
    let restored = simulator.inverse_qft(result.into_state())?;
    println!("inverse QFT restores the input: {}", restored.approx_eq(&input, None));

    // --- Addition ---
    println!("\n{} + {} (operator path) = {}", a, b, simulator.add(a, b)?);
    println!("{} + {} (tensor path)   = {}", a, b, simulator.add_tensor(a, b)?);
    if let Err(e) = simulator.add(-1, b) {
        println!("-1 + {}: {}", b, e);
    }
    Ok(())
}
