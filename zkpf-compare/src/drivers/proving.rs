//! Proving driver for generating a witness alongside the constraint shape.
//!
//! The `ProvingDriver` is used during proof generation. It:
//! - Records exactly the constraint shape the `ShapeDriver` would
//! - Stores a value for every allocated wire
//! - Can check the assignment against every recorded constraint
//!
//! Wire values are `Always<F>` since witnesses are always present during proving.

use crate::driver::Driver;
use crate::drivers::shape::{Constraint, ConstraintShape, ShapeStats, Variable};
use crate::error::Error;
use crate::maybe::AlwaysKind;
use ff::{PrimeField, PrimeFieldBits};

/// The proving driver collects constraints and witness data.
#[derive(Debug, Clone)]
pub struct ProvingDriver<F: PrimeField> {
    /// Wire values, indexed by `Variable::index`. Entry 0 is ONE.
    pub witness: Vec<F>,
    shape: ConstraintShape<F>,
}

impl<F: PrimeField> ProvingDriver<F> {
    /// Create a new proving driver.
    pub fn new() -> Self {
        ProvingDriver {
            witness: vec![F::ONE],
            shape: ConstraintShape::new(),
        }
    }

    fn lookup(&self, wire: Variable) -> Result<F, Error> {
        self.witness
            .get(wire.index)
            .copied()
            .ok_or(Error::MalformedWitness {
                message: "wire does not belong to this driver",
            })
    }

    /// Get the witness value at the given wire.
    pub fn value(&self, wire: &Variable) -> Result<F, Error> {
        self.lookup(*wire)
    }

    /// The shape recorded so far.
    pub fn shape(&self) -> &ConstraintShape<F> {
        &self.shape
    }

    /// Get statistics about the constraint system.
    pub fn stats(&self) -> ShapeStats {
        self.shape.stats()
    }

    /// Check that all constraints are satisfied by the witness.
    ///
    /// Reports the first failing constraint in emission order.
    pub fn check_constraints(&self) -> Result<(), Error> {
        for (index, constraint) in self.shape.constraints().iter().enumerate() {
            let holds = match constraint {
                Constraint::Mul { a, b, c } => {
                    self.lookup(*a)? * self.lookup(*b)? == self.lookup(*c)?
                }
                Constraint::Linear { terms } => {
                    let mut sum = F::ZERO;
                    for (wire, coeff) in terms {
                        sum += self.lookup(*wire)? * coeff;
                    }
                    sum == F::ZERO
                }
            };
            if !holds {
                tracing::debug!(index, kind = constraint.kind(), "constraint not satisfied");
                return Err(Error::UnsatisfiedConstraint {
                    index,
                    kind: constraint.kind(),
                });
            }
        }
        Ok(())
    }

    /// Check that all constraints hold, as a boolean.
    pub fn is_satisfied(&self) -> bool {
        self.check_constraints().is_ok()
    }
}

impl<F: PrimeField> Default for ProvingDriver<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PrimeFieldBits> Driver for ProvingDriver<F> {
    type F = F;
    type W = Variable;
    type MaybeKind = AlwaysKind;

    const ONE: Self::W = Variable::ONE;

    fn mul(
        &mut self,
        values: impl FnOnce() -> Result<(Self::F, Self::F, Self::F), Error>,
    ) -> Result<(Self::W, Self::W, Self::W), Error> {
        let (a_val, b_val, c_val) = values()?;

        let (a, b, c) = self.shape.push_mul();
        self.witness.extend([a_val, b_val, c_val]);

        Ok((a, b, c))
    }

    fn add<L: IntoIterator<Item = (Self::W, Self::F)>>(
        &mut self,
        lc: impl FnOnce() -> L,
    ) -> Result<Self::W, Error> {
        let terms: Vec<_> = lc().into_iter().collect();

        let mut sum = F::ZERO;
        for (wire, coeff) in &terms {
            sum += self.lookup(*wire)? * coeff;
        }

        self.witness.push(sum);
        Ok(self.shape.push_add(terms))
    }

    fn enforce_zero<L: IntoIterator<Item = (Self::W, Self::F)>>(
        &mut self,
        lc: impl FnOnce() -> L,
    ) -> Result<(), Error> {
        self.shape.push_linear(lc().into_iter().collect());
        Ok(())
    }
}
