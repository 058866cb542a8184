// src/circuits/mod.rs

//! Defines structures for representing and building ordered sequences of
//! operations (`qfourier::operations::Operation`) on a fixed-width register.
//!
//! The transforms in [`crate::transforms`] are expressed as circuits, so the
//! number of operations in a circuit is the number of operators the engine
//! builds when running it.

use crate::core::QftError;
use crate::operations::Operation;
use std::fmt;

/// An ordered sequence of operations on a register of `num_qubits` qubits.
///
/// Analogy: similar to `qiskit.QuantumCircuit`, without measurements.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Adds a single operation to the end of the circuit's sequence.
    ///
    /// # Errors
    /// `QftError::InvalidArgument` if the operation mentions a qubit outside the register.
    pub fn add_operation(&mut self, op: Operation) -> Result<(), QftError> {
        if let Some(q) = op.involved_qubits().into_iter().find(|q| *q >= self.num_qubits) {
            return Err(QftError::invalid_argument(format!(
                "Operation on qubit {} does not fit a {}-qubit circuit",
                q, self.num_qubits
            )));
        }
        self.operations.push(op);
        Ok(())
    }

    /// Adds multiple operations from an iterator to the end of the circuit's sequence.
    pub fn add_operations<I>(&mut self, ops: I) -> Result<(), QftError>
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op)?;
        }
        Ok(())
    }

    /// Register width.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Returns a slice containing the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The inverse circuit: operations reversed, each replaced by its adjoint.
    pub fn adjoint(&self) -> Circuit {
        Circuit {
            num_qubits: self.num_qubits,
            operations: self.operations.iter().rev().map(Operation::adjoint).collect(),
        }
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances using method chaining.
///
/// The first invalid operation is remembered and reported by [`CircuitBuilder::build`].
pub struct CircuitBuilder {
    circuit: Circuit,
    error: Option<QftError>,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
            error: None,
        }
    }

    /// Adds a single operation to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, op: Operation) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.circuit.add_operation(op) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_ops<I>(self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        ops.into_iter().fold(self, |builder, op| builder.add_op(op))
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Result<Circuit, QftError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.circuit),
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_ops = self.operations.len();
        let num_qubits = self.num_qubits;
        if num_ops == 0 || num_qubits == 0 {
            return writeln!(f, "qfourier::Circuit[0 operations on {} qubits]", num_qubits);
        }

        let max_label_width = format!("q{}", num_qubits - 1).len();
        let label_padding = " ".repeat(max_label_width + 2); // Label + ": "

        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] stores the gate/wire segment string
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_ops]; num_qubits];
        // v_connect[row][time] stores the vertical connector char below this row at this time
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_ops]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!("{}{}{}", H_WIRE.to_string().repeat(pre_dashes), symbol, H_WIRE.to_string().repeat(post_dashes))
            }
        }

        for (t, op) in self.operations.iter().enumerate() {
            match op {
                Operation::Gate { target, gate } => {
                    op_grid[*target][t] = format_gate(&gate.to_string());
                }
                Operation::Layer { placements } => {
                    for (q, gate) in placements {
                        op_grid[*q][t] = format_gate(&gate.to_string());
                    }
                }
                Operation::Controlled { control, target, gate } => {
                    op_grid[*control][t] = format_gate("@");
                    op_grid[*target][t] = format_gate(&gate.to_string());
                }
                Operation::MultiControlled { control, targets } => {
                    op_grid[*control][t] = format_gate("@");
                    for (q, gate) in targets {
                        op_grid[*q][t] = format_gate(&gate.to_string());
                    }
                }
            }

            // Vertical connection lines for controlled operations
            if matches!(op, Operation::Controlled { .. } | Operation::MultiControlled { .. }) {
                let rows = op.involved_qubits();
                let r_min = rows.iter().copied().min().unwrap_or(0);
                let r_max = rows.iter().copied().max().unwrap_or(0);
                for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                    row_vec[t] = V_WIRE;
                }
            }
        }

        writeln!(f, "qfourier::Circuit[{} operations on {} qubits]", num_ops, num_qubits)?;
        for r in 0..num_qubits {
            let label = format!("q{}: ", r);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_ops {
                    let connector = v_connect[r][t];
                    let padding_needed = GATE_WIDTH.saturating_sub(1);
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), connector, " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
