// src/simulation/results.rs
use crate::core::QuantumState;
use std::fmt;

/// Bookkeeping for one engine run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of full-register operators materialized.
    pub operators_built: usize,
    /// Largest number of stored entries of any single operator.
    pub peak_operator_entries: usize,
    /// Sum of stored entries over all operators.
    pub total_operator_entries: usize,
}

impl RunStats {
    pub(crate) fn record_build(&mut self, stored_entries: usize) {
        self.operators_built += 1;
        self.peak_operator_entries = self.peak_operator_entries.max(stored_entries);
        self.total_operator_entries += stored_entries;
    }
}

/// Holds the outcome of running a circuit: the final state and run statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    state: QuantumState,
    stats: RunStats,
}

impl SimulationResult {
    pub(crate) fn new(state: QuantumState, stats: RunStats) -> Self {
        Self { state, stats }
    }

    /// The state after the last operation.
    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    /// Consumes the result and returns the final state.
    pub fn into_state(self) -> QuantumState {
        self.state
    }

    /// Statistics gathered while running.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "  Qubits: {}", self.state.num_qubits())?;
        writeln!(f, "  Operators built: {}", self.stats.operators_built)?;
        writeln!(f, "  Peak operator entries: {}", self.stats.peak_operator_entries)?;
        writeln!(f, "  Total operator entries: {}", self.stats.total_operator_entries)?;
        let (index, probability) = self.state.most_probable();
        writeln!(
            f,
            "  Most probable basis state: |{:0width$b}> (p = {:.6})",
            index,
            probability,
            width = self.state.num_qubits()
        )
    }
}
