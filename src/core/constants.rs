//! Numerical constants shared by the simulator.

/// Constants used across gate construction and validation
pub mod qft_constants {
    /// Full turn, used for phase angles (`e^(2πi·x)`)
    pub const TAU: f64 = std::f64::consts::TAU;
    /// Allowed deviation of `Σ|c_i|²` from 1.0
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
    /// Largest register a `FourierSimulator` accepts unless configured otherwise.
    /// A dense operator on 12 qubits holds 2^24 entries (256 MiB), and building a
    /// controlled operator keeps up to three of them alive at once.
    pub const DEFAULT_MAX_QUBITS: usize = 12;
    /// Hard ceiling for any state vector: 2^30 amplitudes, 16 GiB.
    pub const MAX_STATE_QUBITS: usize = 30;
}
