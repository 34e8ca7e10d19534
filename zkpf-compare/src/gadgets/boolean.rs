//! Boolean gadgets.

use crate::driver::{Driver, Witness};
use crate::error::Error;
use crate::gadgets::element::Element;
use crate::maybe::Maybe;
use ff::Field;

/// A field element constrained to be 0 or 1.
pub struct Boolean<D: Driver> {
    element: Element<D>,
}

impl<D: Driver> Clone for Boolean<D> {
    fn clone(&self) -> Self {
        Boolean {
            element: self.element.clone(),
        }
    }
}

impl<D: Driver> core::fmt::Debug for Boolean<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Boolean").field(self.element.wire()).finish()
    }
}

impl<D: Driver> Boolean<D> {
    /// Wrap an element that is already known to be boolean.
    ///
    /// The caller is responsible for the constraints that make it so.
    pub fn new_unchecked(element: Element<D>) -> Self {
        Boolean { element }
    }

    /// Allocate a new boolean wire.
    ///
    /// One gate `w * w = w` with both inputs and the output tied together,
    /// which only `0` and `1` satisfy.
    pub fn alloc(dr: &mut D, value: Witness<D, bool>) -> Result<Self, Error> {
        let field_value = D::just(|| if *value.snag() { D::F::ONE } else { D::F::ZERO });

        let (a, b, c) = dr.mul(|| {
            let v = *field_value.snag();
            Ok((v, v, v))
        })?;
        dr.enforce_equal(&a, &b)?;
        dr.enforce_equal(&a, &c)?;

        Ok(Boolean {
            element: Element::new(a, field_value),
        })
    }

    /// Constrain an existing element to be boolean.
    pub fn assert_boolean(dr: &mut D, element: &Element<D>) -> Result<Self, Error> {
        let value = element.value();
        dr.assert_mul(element.wire(), element.wire(), element.wire(), || {
            let v = *value.snag();
            Ok((v, v, v * v))
        })?;
        Ok(Boolean {
            element: element.clone(),
        })
    }

    /// A constant boolean.
    pub fn constant(dr: &mut D, value: bool) -> Result<Self, Error> {
        let constant = if value { D::F::ONE } else { D::F::ZERO };
        Ok(Boolean {
            element: Element::constant(dr, constant)?,
        })
    }

    /// The underlying field element.
    pub fn element(&self) -> &Element<D> {
        &self.element
    }

    /// Convert into the underlying field element.
    pub fn into_element(self) -> Element<D> {
        self.element
    }

    /// Get the underlying wire.
    pub fn wire(&self) -> &D::W {
        self.element.wire()
    }

    /// Get the value as a field element.
    pub fn value(&self) -> &Witness<D, D::F> {
        self.element.value()
    }

    /// Get the value as a boolean.
    pub fn bool_value(&self) -> Witness<D, bool> {
        D::just(|| *self.element.value().snag() == D::F::ONE)
    }

    /// `self AND other = self * other`
    pub fn and(&self, dr: &mut D, other: &Self) -> Result<Self, Error> {
        Ok(Boolean {
            element: self.element.mul(dr, &other.element)?,
        })
    }

    /// `self OR other = self + other - self * other`
    pub fn or(&self, dr: &mut D, other: &Self) -> Result<Self, Error> {
        let both = self.element.mul(dr, &other.element)?;
        let element = Element::linear_combination(
            dr,
            &[
                (D::F::ONE, &self.element),
                (D::F::ONE, &other.element),
                (-D::F::ONE, &both),
            ],
        )?;
        Ok(Boolean { element })
    }

    /// `NOT self = 1 - self`
    pub fn not(&self, dr: &mut D) -> Result<Self, Error> {
        let wire = dr.add(|| [(D::ONE, D::F::ONE), (self.wire().clone(), -D::F::ONE)])?;
        let value = D::just(|| D::F::ONE - self.element.value().snag());
        Ok(Boolean {
            element: Element::new(wire, value),
        })
    }
}
