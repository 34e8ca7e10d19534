//! Error types for gadget synthesis.
//!
//! Missing witnesses cannot occur at runtime because of the `Maybe<T>`
//! abstraction, so the remaining failures are misuse of a gadget while the
//! circuit is being built, operands that violate a declared bound while a
//! proof is being generated, and unsatisfied constraints found by the
//! proving driver.

use thiserror::Error;

/// Synthesis error that can occur during circuit construction or witness
/// generation. Every variant is fatal to the current pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A gadget was asked for more bits than the field can safely hold.
    #[error("bit length {requested} exceeds the maximum of {max} for this field")]
    BitLengthTooLarge {
        /// The bit length passed by the caller.
        requested: usize,
        /// The largest bit length the gadget accepts.
        max: usize,
    },

    /// A witness value exceeded its declared bound during proof generation.
    #[error(transparent)]
    RangeGuard(#[from] RangeGuardError),

    /// A recorded constraint does not hold for the witness assignment.
    #[error("unsatisfied {kind} constraint at index {index}")]
    UnsatisfiedConstraint {
        /// Position of the constraint in emission order.
        index: usize,
        /// Either `"multiplication"` or `"linear"`.
        kind: &'static str,
    },

    /// The witness data was malformed or inconsistent.
    #[error("malformed witness: {message}")]
    MalformedWitness {
        /// Description of what was wrong.
        message: &'static str,
    },
}

/// Which side of a comparison an operand came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The left operand (`x`).
    Left,
    /// The right operand (`y`).
    Right,
}

impl core::fmt::Display for Operand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operand::Left => write!(f, "x"),
            Operand::Right => write!(f, "y"),
        }
    }
}

/// Raised by the prover-side range guard when an operand is too large.
///
/// This is a debugging aid for gadget misuse, not a constraint: it only
/// fires while the prover holds concrete values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("operand {operand} has {actual_bits} bits, but must be below {bound}")]
pub struct RangeGuardError {
    /// The offending operand.
    pub operand: Operand,
    /// Bit length of the operand's value.
    pub actual_bits: usize,
    /// Bit length of the largest value below the bound.
    pub allowed_bits: usize,
    /// The bound as an integer: decimal if it fits in 128 bits, hex otherwise.
    pub bound: String,
}

/// Result type alias for synthesis operations.
pub type Result<T> = core::result::Result<T, Error>;
