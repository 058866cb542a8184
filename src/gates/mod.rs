// src/gates/mod.rs

//! Base single-qubit gates and the frozen registry that hands them out.
//!
//! All matrices are 2×2 in the `{|0>, |1>}` basis, row-major. The registry is
//! initialized once per process and only ever returns copies, so no caller can
//! alter a shared matrix.

use crate::core::constants::qft_constants::TAU;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::sync::OnceLock;

/// Row-major 2×2 complex matrix.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// Constant single-qubit matrices.
#[derive(Debug)]
pub struct GateRegistry {
    identity: Matrix2,
    bit_flip: Matrix2,
    hadamard: Matrix2,
    projector_zero: Matrix2,
    projector_one: Matrix2,
}

static REGISTRY: OnceLock<GateRegistry> = OnceLock::new();

/// The process-wide gate registry.
pub fn registry() -> &'static GateRegistry {
    REGISTRY.get_or_init(GateRegistry::build)
}

impl GateRegistry {
    fn build() -> Self {
        let one = Complex::one();
        let zero = Complex::zero();
        let h = Complex::new(FRAC_1_SQRT_2, 0.0);
        Self {
            identity: [[one, zero], [zero, one]],
            bit_flip: [[zero, one], [one, zero]],
            hadamard: [[h, h], [h, -h]],
            // |0><0| and |1><1|
            projector_zero: [[one, zero], [zero, zero]],
            projector_one: [[zero, zero], [zero, one]],
        }
    }

    /// `I`
    pub fn identity(&self) -> Matrix2 {
        self.identity
    }

    /// `X`, the bit flip.
    pub fn bit_flip(&self) -> Matrix2 {
        self.bit_flip
    }

    /// `H = (X + Z)/√2`
    pub fn hadamard(&self) -> Matrix2 {
        self.hadamard
    }

    /// Rank-1 projector onto `|0>`.
    pub fn projector_zero(&self) -> Matrix2 {
        self.projector_zero
    }

    /// Rank-1 projector onto `|1>`.
    pub fn projector_one(&self) -> Matrix2 {
        self.projector_one
    }
}

/// `diag(1, e^(iθ))`
pub fn phase(theta: f64) -> Matrix2 {
    [
        [Complex::one(), Complex::zero()],
        [Complex::zero(), Complex::from_polar(1.0, theta)],
    ]
}

/// Angle of the QFT rotation `R(k)`: `2π / 2^k`.
pub fn rotation_angle(k: u32) -> f64 {
    TAU / 2f64.powi(k as i32)
}

/// `R(k) = diag(1, e^(2πi/2^k))`
pub fn rotation(k: u32) -> Matrix2 {
    phase(rotation_angle(k))
}

/// Conjugate transpose.
pub fn adjoint(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Matrix product `a · b`.
pub fn matmul(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut out = [[Complex::zero(); 2]; 2];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c];
        }
    }
    out
}

/// Symbolic single-qubit gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateKind {
    /// `I`
    Identity,
    /// `X`
    BitFlip,
    /// `H`
    Hadamard,
    /// `R(k)`, phase `2π/2^k` on `|1>`.
    Rotation(u32),
    /// `R(k)†`, phase `−2π/2^k` on `|1>`.
    RotationDagger(u32),
    /// Arbitrary phase `θ` on `|1>`.
    Phase(f64),
}

impl GateKind {
    /// Resolves the gate to its matrix.
    pub fn matrix(&self) -> Matrix2 {
        let gates = registry();
        match self {
            GateKind::Identity => gates.identity(),
            GateKind::BitFlip => gates.bit_flip(),
            GateKind::Hadamard => gates.hadamard(),
            GateKind::Rotation(k) => rotation(*k),
            GateKind::RotationDagger(k) => adjoint(&rotation(*k)),
            GateKind::Phase(theta) => phase(*theta),
        }
    }

    /// Gate whose matrix is the conjugate transpose of this one.
    pub fn adjoint(&self) -> GateKind {
        match self {
            GateKind::Rotation(k) => GateKind::RotationDagger(*k),
            GateKind::RotationDagger(k) => GateKind::Rotation(*k),
            GateKind::Phase(theta) => GateKind::Phase(-theta),
            hermitian => *hermitian,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateKind::Identity => write!(f, "I"),
            GateKind::BitFlip => write!(f, "X"),
            GateKind::Hadamard => write!(f, "H"),
            GateKind::Rotation(k) => write!(f, "R{}", k),
            GateKind::RotationDagger(k) => write!(f, "R{}†", k),
            GateKind::Phase(_) => write!(f, "P"),
        }
    }
}
