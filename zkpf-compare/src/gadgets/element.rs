//! Field element wires.

use crate::driver::{Driver, Witness};
use crate::error::Error;
use crate::maybe::Maybe;
use ff::Field;

/// A field element in the circuit: a wire handle plus its witness value.
///
/// The value is `Always<F>` while proving and `Empty<F>` while laying out
/// the constraint shape.
pub struct Element<D: Driver> {
    wire: D::W,
    value: Witness<D, D::F>,
}

impl<D: Driver> Clone for Element<D> {
    fn clone(&self) -> Self {
        Element {
            wire: self.wire.clone(),
            value: D::just(|| *self.value.snag()),
        }
    }
}

impl<D: Driver> core::fmt::Debug for Element<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Element").field("wire", &self.wire).finish_non_exhaustive()
    }
}

impl<D: Driver> Element<D> {
    /// Pair an existing wire with its value.
    pub fn new(wire: D::W, value: Witness<D, D::F>) -> Self {
        Element { wire, value }
    }

    /// Introduce a fresh, unconstrained witness.
    pub fn alloc(dr: &mut D, value: Witness<D, D::F>) -> Result<Self, Error> {
        let wire = dr.alloc(|| Ok(*value.snag()))?;
        Ok(Element { wire, value })
    }

    /// A wire fixed to a constant.
    pub fn constant(dr: &mut D, constant: D::F) -> Result<Self, Error> {
        let wire = dr.constant(constant)?;
        Ok(Element {
            wire,
            value: D::just(|| constant),
        })
    }

    /// Get a reference to the wire.
    pub fn wire(&self) -> &D::W {
        &self.wire
    }

    /// Get a reference to the witness value.
    pub fn value(&self) -> &Witness<D, D::F> {
        &self.value
    }

    /// `self + other`
    pub fn add(&self, dr: &mut D, other: &Self) -> Result<Self, Error> {
        Self::linear_combination(dr, &[(D::F::ONE, self), (D::F::ONE, other)])
    }

    /// `self - other`
    pub fn sub(&self, dr: &mut D, other: &Self) -> Result<Self, Error> {
        Self::linear_combination(dr, &[(D::F::ONE, self), (-D::F::ONE, other)])
    }

    /// `self + constant`
    pub fn add_constant(&self, dr: &mut D, constant: D::F) -> Result<Self, Error> {
        let wire = dr.add(|| [(self.wire.clone(), D::F::ONE), (D::ONE, constant)])?;
        Ok(Element {
            wire,
            value: D::just(|| *self.value.snag() + constant),
        })
    }

    /// `coefficient * self`
    pub fn scale(&self, dr: &mut D, coefficient: D::F) -> Result<Self, Error> {
        Self::linear_combination(dr, &[(coefficient, self)])
    }

    /// `self * other`, one multiplication gate tied to both operands.
    pub fn mul(&self, dr: &mut D, other: &Self) -> Result<Self, Error> {
        let (a, b, c) = dr.mul(|| {
            let a_val = *self.value.snag();
            let b_val = *other.value.snag();
            Ok((a_val, b_val, a_val * b_val))
        })?;
        dr.enforce_equal(&a, &self.wire)?;
        dr.enforce_equal(&b, &other.wire)?;

        Ok(Element {
            wire: c,
            value: D::just(|| *self.value.snag() * other.value.snag()),
        })
    }

    /// Sum of coefficient-weighted elements.
    pub fn linear_combination(dr: &mut D, terms: &[(D::F, &Self)]) -> Result<Self, Error> {
        let value = D::just(|| {
            terms
                .iter()
                .fold(D::F::ZERO, |acc, (coeff, e)| acc + *coeff * e.value.snag())
        });
        let wire = dr.add(|| terms.iter().map(|(coeff, e)| (e.wire.clone(), *coeff)))?;

        Ok(Element { wire, value })
    }

    /// Sum of elements. The empty sum is zero.
    pub fn sum(dr: &mut D, elements: &[&Self]) -> Result<Self, Error> {
        let terms: Vec<_> = elements.iter().map(|e| (D::F::ONE, *e)).collect();
        Self::linear_combination(dr, &terms)
    }

    /// Constrain `self == other`.
    pub fn assert_equal(&self, dr: &mut D, other: &Self) -> Result<(), Error> {
        dr.enforce_equal(&self.wire, &other.wire)
    }

    /// Constrain `self == 0`.
    pub fn assert_zero(&self, dr: &mut D) -> Result<(), Error> {
        dr.enforce_zero(|| [(self.wire.clone(), D::F::ONE)])
    }
}
