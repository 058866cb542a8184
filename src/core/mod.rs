// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

pub use error::QftError;
pub use state::QuantumState;

pub mod constants;
pub use constants::qft_constants::{DEFAULT_MAX_QUBITS, DEFAULT_NORM_TOLERANCE, MAX_STATE_QUBITS, TAU}; // Re-export
