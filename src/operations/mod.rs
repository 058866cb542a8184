// src/operations/mod.rs

//! Gate-level operations on a qubit register.
//!
//! An `Operation` names *what* to apply. It becomes a matrix only when the
//! engine builds it, so each operation corresponds to exactly one operator
//! construction.

use crate::core::QftError;
use crate::gates::{GateKind, Matrix2};
use crate::operators::{embed, multi_target_controlled, Operator};

/// A single step of a circuit.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// One gate on one qubit, identity elsewhere.
    Gate {
        /// Qubit the gate acts on.
        target: usize,
        /// The gate.
        gate: GateKind,
    },

    /// Several gates on distinct qubits, built as one Kronecker product.
    /// Used for the adder's diagonal phase layer.
    Layer {
        /// `(qubit, gate)` pairs; qubits must be distinct.
        placements: Vec<(usize, GateKind)>,
    },

    /// `gate` on `target` when `control` is `|1>`.
    Controlled {
        /// Conditioning qubit.
        control: usize,
        /// Qubit the gate acts on.
        target: usize,
        /// The gate.
        gate: GateKind,
    },

    /// Several gates on distinct targets sharing one control, built as a single operator.
    MultiControlled {
        /// Conditioning qubit.
        control: usize,
        /// `(qubit, gate)` pairs applied when the control is `|1>`.
        targets: Vec<(usize, GateKind)>,
    },
}

impl Operation {
    /// Returns every qubit index the operation mentions.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Operation::Gate { target, .. } => vec![*target],
            Operation::Layer { placements } => placements.iter().map(|(q, _)| *q).collect(),
            Operation::Controlled { control, target, .. } => vec![*control, *target],
            Operation::MultiControlled { control, targets } => {
                std::iter::once(*control).chain(targets.iter().map(|(q, _)| *q)).collect()
            }
        }
    }

    /// Operation undoing this one.
    pub fn adjoint(&self) -> Operation {
        let dagger = |pairs: &[(usize, GateKind)]| -> Vec<(usize, GateKind)> {
            pairs.iter().map(|(q, g)| (*q, g.adjoint())).collect()
        };
        match self {
            Operation::Gate { target, gate } => Operation::Gate { target: *target, gate: gate.adjoint() },
            Operation::Layer { placements } => Operation::Layer { placements: dagger(placements) },
            Operation::Controlled { control, target, gate } => Operation::Controlled {
                control: *control,
                target: *target,
                gate: gate.adjoint(),
            },
            Operation::MultiControlled { control, targets } => Operation::MultiControlled {
                control: *control,
                targets: dagger(targets),
            },
        }
    }

    /// Materializes the operation as a full-register operator.
    pub fn build<O: Operator>(&self, num_qubits: usize) -> Result<O, QftError> {
        match self {
            Operation::Gate { target, gate } => embed(num_qubits, &[(*target, gate.matrix())]),
            Operation::Layer { placements } => embed(num_qubits, &resolve(placements)),
            Operation::Controlled { control, target, gate } => {
                multi_target_controlled(num_qubits, *control, &[(*target, gate.matrix())])
            }
            Operation::MultiControlled { control, targets } => {
                multi_target_controlled(num_qubits, *control, &resolve(targets))
            }
        }
    }
}

fn resolve(pairs: &[(usize, GateKind)]) -> Vec<(usize, Matrix2)> {
    pairs.iter().map(|(q, g)| (*q, g.matrix())).collect()
}
