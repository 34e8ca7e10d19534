//! Constraint-shape driver.
//!
//! The `ShapeDriver` lays out the wires and constraints of a circuit without
//! any witness data. Witness types are `Empty`, so no witness closure runs.
//! The recorded [`ConstraintShape`] is what the prover and verifier must
//! agree on: the proving driver records an identical one for the same
//! gadget calls.

use crate::driver::Driver;
use crate::error::Error;
use crate::maybe::EmptyKind;
use ff::{PrimeField, PrimeFieldBits};

/// A wire handle: an index into the wire table.
///
/// Index 0 is the constant ONE wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Index into the wire table.
    pub index: usize,
}

impl Variable {
    /// Create a new wire at the given index.
    pub const fn new(index: usize) -> Self {
        Variable { index }
    }

    /// The constant ONE wire (always at index 0).
    pub const ONE: Self = Variable { index: 0 };
}

/// One recorded constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<F> {
    /// `a * b = c`
    Mul {
        /// Left input wire.
        a: Variable,
        /// Right input wire.
        b: Variable,
        /// Output wire.
        c: Variable,
    },
    /// `sum(coefficient * wire) = 0`
    Linear {
        /// Terms in the linear combination.
        terms: Vec<(Variable, F)>,
    },
}

impl<F> Constraint<F> {
    /// Human-readable name of the constraint kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Constraint::Mul { .. } => "multiplication",
            Constraint::Linear { .. } => "linear",
        }
    }
}

/// Statistics about a constraint shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeStats {
    /// Number of wires, including ONE.
    pub num_wires: usize,
    /// Number of multiplication constraints.
    pub num_mul: usize,
    /// Number of linear constraints.
    pub num_linear: usize,
}

impl ShapeStats {
    /// Total number of constraints.
    pub const fn total_constraints(&self) -> usize {
        self.num_mul + self.num_linear
    }
}

/// The ordered, append-only list of constraints emitted by one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintShape<F> {
    constraints: Vec<Constraint<F>>,
    num_wires: usize,
}

impl<F: PrimeField> ConstraintShape<F> {
    /// An empty shape holding only the ONE wire.
    pub fn new() -> Self {
        ConstraintShape {
            constraints: Vec::new(),
            num_wires: 1,
        }
    }

    pub(crate) fn alloc(&mut self) -> Variable {
        let wire = Variable::new(self.num_wires);
        self.num_wires += 1;
        wire
    }

    pub(crate) fn push_mul(&mut self) -> (Variable, Variable, Variable) {
        let (a, b, c) = (self.alloc(), self.alloc(), self.alloc());
        self.constraints.push(Constraint::Mul { a, b, c });
        (a, b, c)
    }

    /// Allocate the output wire of a linear combination and constrain
    /// `lc - out = 0`.
    pub(crate) fn push_add(&mut self, mut terms: Vec<(Variable, F)>) -> Variable {
        let out = self.alloc();
        terms.push((out, -F::ONE));
        self.push_linear(terms);
        out
    }

    pub(crate) fn push_linear(&mut self, terms: Vec<(Variable, F)>) {
        self.constraints.push(Constraint::Linear { terms });
    }

    /// The constraints in emission order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Number of allocated wires, including ONE.
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// Get statistics about the shape.
    pub fn stats(&self) -> ShapeStats {
        let num_mul = self
            .constraints
            .iter()
            .filter(|c| matches!(c, Constraint::Mul { .. }))
            .count();
        ShapeStats {
            num_wires: self.num_wires,
            num_mul,
            num_linear: self.constraints.len() - num_mul,
        }
    }

    /// Canonical byte encoding of the shape.
    ///
    /// Indices and lengths are little-endian `u64`, coefficients use the
    /// field's canonical representation. Two passes agree on the circuit iff
    /// their encodings are equal.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.num_wires as u64).to_le_bytes());
        for constraint in &self.constraints {
            match constraint {
                Constraint::Mul { a, b, c } => {
                    out.push(0);
                    for wire in [a, b, c] {
                        out.extend_from_slice(&(wire.index as u64).to_le_bytes());
                    }
                }
                Constraint::Linear { terms } => {
                    out.push(1);
                    out.extend_from_slice(&(terms.len() as u64).to_le_bytes());
                    for (wire, coeff) in terms {
                        out.extend_from_slice(&(wire.index as u64).to_le_bytes());
                        out.extend_from_slice(coeff.to_repr().as_ref());
                    }
                }
            }
        }
        out
    }
}

impl<F: PrimeField> Default for ConstraintShape<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// The shape driver records constraints without witness data.
#[derive(Debug, Clone, Default)]
pub struct ShapeDriver<F: PrimeField> {
    shape: ConstraintShape<F>,
}

impl<F: PrimeField> ShapeDriver<F> {
    /// Create a new shape driver.
    pub fn new() -> Self {
        ShapeDriver {
            shape: ConstraintShape::new(),
        }
    }

    /// The shape recorded so far.
    pub fn shape(&self) -> &ConstraintShape<F> {
        &self.shape
    }

    /// Consume the driver and return its shape.
    pub fn into_shape(self) -> ConstraintShape<F> {
        self.shape
    }
}

impl<F: PrimeFieldBits> Driver for ShapeDriver<F> {
    type F = F;
    type W = Variable;
    type MaybeKind = EmptyKind;

    const ONE: Self::W = Variable::ONE;

    fn mul(
        &mut self,
        _values: impl FnOnce() -> Result<(Self::F, Self::F, Self::F), Error>,
    ) -> Result<(Self::W, Self::W, Self::W), Error> {
        Ok(self.shape.push_mul())
    }

    fn add<L: IntoIterator<Item = (Self::W, Self::F)>>(
        &mut self,
        lc: impl FnOnce() -> L,
    ) -> Result<Self::W, Error> {
        Ok(self.shape.push_add(lc().into_iter().collect()))
    }

    fn enforce_zero<L: IntoIterator<Item = (Self::W, Self::F)>>(
        &mut self,
        lc: impl FnOnce() -> L,
    ) -> Result<(), Error> {
        self.shape.push_linear(lc().into_iter().collect());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ff::Field;
    use pasta_curves::Fp;

    #[test]
    fn shape_driver_records_without_witness() {
        let mut driver = ShapeDriver::<Fp>::new();

        let _ = driver.mul(|| unreachable!()).unwrap();
        let w = driver.alloc(|| unreachable!()).unwrap();
        driver.enforce_equal(&w, &Variable::ONE).unwrap();

        let stats = driver.shape().stats();
        assert_eq!(stats.num_mul, 2);
        assert_eq!(stats.num_linear, 1);
        assert_eq!(stats.num_wires, 7);
        assert_eq!(stats.total_constraints(), 3);
    }

    #[test]
    fn add_allocates_output_wire() {
        let mut driver = ShapeDriver::<Fp>::new();
        let out = driver.add(|| [(Variable::ONE, Fp::from(3u64))]).unwrap();

        assert_eq!(out, Variable::new(1));
        assert_eq!(
            driver.shape().constraints(),
            &[Constraint::Linear {
                terms: vec![(Variable::ONE, Fp::from(3u64)), (out, -Fp::ONE)],
            }]
        );
    }

    #[test]
    fn encoding_distinguishes_coefficients() {
        let mut a = ShapeDriver::<Fp>::new();
        let mut b = ShapeDriver::<Fp>::new();
        a.constant(Fp::from(2u64)).unwrap();
        b.constant(Fp::from(3u64)).unwrap();

        assert_ne!(a.shape().to_bytes(), b.shape().to_bytes());
    }
}
