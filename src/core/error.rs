//! Error handling logic

use std::fmt;

/// Error types raised by the simulator.
/// Every failure is deterministic: the same inputs always produce the same error,
/// and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QftError {
    /// A caller-supplied argument is outside the accepted domain
    /// (negative adder operand, qubit index out of range, duplicated placement).
    InvalidArgument {
        /// InvalidArgument failure message
        message: String
    },

    /// Input data cannot describe a qubit register
    /// (length not a power of two, register above the configured ceiling).
    InvalidInput {
        /// InvalidInput failure message
        message: String
    },

    /// The requested operation exists as a named variant but has no implementation.
    UnsupportedOperation {
        /// UnsupportedOperation failure message
        message: String
    },

    /// An operator and a state vector (or two operators) disagree in size.
    DimensionMismatch {
        /// Size required by the receiving side
        expected: usize,
        /// Size actually supplied
        actual: usize,
    },

    /// The state vector lost its unit norm during a validated run.
    Incoherence {
        /// Incoherence failure message
        message: String
    },
}

impl fmt::Display for QftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QftError::InvalidArgument { message } => write!(f, "Invalid Argument: {}", message),
            QftError::InvalidInput { message } => write!(f, "Invalid Input: {}", message),
            QftError::UnsupportedOperation { message } => write!(f, "Unsupported Operation: {}", message),
            QftError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension Mismatch: expected {}, got {}", expected, actual)
            }
            QftError::Incoherence { message } => write!(f, "Incoherence Violation: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QftError {}

impl QftError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        QftError::InvalidArgument { message: message.into() }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        QftError::InvalidInput { message: message.into() }
    }
}
