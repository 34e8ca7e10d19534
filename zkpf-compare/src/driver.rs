//! Circuit synthesis drivers.
//!
//! A `Driver` is the execution context every gadget receives. The same gadget
//! code runs under two drivers:
//!
//! - **Constraint shape**: lays out wires and constraints. No witness exists
//!   and witness closures are never called.
//! - **Proof generation**: lays out the identical shape and fills in a value
//!   for every wire.
//!
//! Which of the two is active is a property of the driver *type* (its
//! [`MaybeKind`]), so there is no global mode flag to get out of sync.
//!
//! # Example
//!
//! ```rust,ignore
//! fn square<D: Driver>(dr: &mut D, a: &Element<D>) -> Result<Element<D>, Error> {
//!     // Closure only runs when the driver has a witness.
//!     let (a_out, b_out, c) = dr.mul(|| {
//!         let v = *a.value().snag();
//!         Ok((v, v, v * v))
//!     })?;
//!     dr.enforce_equal(&a_out, a.wire())?;
//!     dr.enforce_equal(&b_out, a.wire())?;
//!     Ok(Element::new(c, D::just(|| a.value().snag().square())))
//! }
//! ```

use crate::error::Error;
use crate::maybe::{Maybe, MaybeKind};
use ff::{Field, PrimeFieldBits};

/// Type alias for the witness type of a driver.
///
/// This is `Always<T>` when the driver has witness data, or `Empty<T>` when it doesn't.
pub type Witness<D, T> = <<D as Driver>::MaybeKind as MaybeKind>::Rebind<T>;

/// A circuit synthesis driver.
pub trait Driver: Sized {
    /// The prime field over which this driver operates.
    type F: PrimeFieldBits;

    /// The abstract wire type.
    type W: Clone + core::fmt::Debug;

    /// The constant ONE wire.
    const ONE: Self::W;

    /// `AlwaysKind` while proving, `EmptyKind` while laying out the shape.
    type MaybeKind: MaybeKind;

    // =========================================================================
    // Constraint methods
    // =========================================================================

    /// Create a multiplication gate `a * b = c`.
    ///
    /// Returns three *fresh* wires. Callers that mean existing wires must tie
    /// them to the outputs with [`Driver::enforce_equal`]. The closure is only
    /// invoked when the driver has a witness.
    fn mul(
        &mut self,
        values: impl FnOnce() -> Result<(Self::F, Self::F, Self::F), Error>,
    ) -> Result<(Self::W, Self::W, Self::W), Error>;

    /// Create a wire carrying a linear combination of `(wire, coefficient)`
    /// pairs.
    fn add<L: IntoIterator<Item = (Self::W, Self::F)>>(
        &mut self,
        lc: impl FnOnce() -> L,
    ) -> Result<Self::W, Error>;

    /// Enforce that a linear combination of wires is zero.
    fn enforce_zero<L: IntoIterator<Item = (Self::W, Self::F)>>(
        &mut self,
        lc: impl FnOnce() -> L,
    ) -> Result<(), Error>;

    // =========================================================================
    // Convenience methods
    // =========================================================================

    /// Proxy to `Maybe<T>::just` using this driver's `MaybeKind`.
    #[inline(always)]
    fn just<R>(f: impl FnOnce() -> R) -> Witness<Self, R> {
        <Witness<Self, ()> as Maybe<()>>::just(f)
    }

    /// Proxy to `Maybe<T>::with` using this driver's `MaybeKind`.
    #[inline(always)]
    fn with<R>(f: impl FnOnce() -> Result<R, Error>) -> Result<Witness<Self, R>, Error> {
        <Witness<Self, ()> as Maybe<()>>::with(f)
    }

    /// Allocate a new unconstrained wire with the given witness value.
    fn alloc(&mut self, value: impl FnOnce() -> Result<Self::F, Error>) -> Result<Self::W, Error> {
        let (_, _, w) = self.mul(|| {
            let v = value()?;
            Ok((Self::F::ONE, v, v))
        })?;
        Ok(w)
    }

    /// A wire equal to the given constant.
    fn constant(&mut self, value: Self::F) -> Result<Self::W, Error> {
        self.add(|| [(Self::ONE, value)])
    }

    /// Enforce that two wires are equal.
    fn enforce_equal(&mut self, a: &Self::W, b: &Self::W) -> Result<(), Error> {
        self.enforce_zero(|| [(a.clone(), Self::F::ONE), (b.clone(), -Self::F::ONE)])
    }

    /// Enforce `a * b = c` on existing wires.
    ///
    /// `values` supplies the witness values of `(a, b, c)` and is only called
    /// while proving.
    fn assert_mul(
        &mut self,
        a: &Self::W,
        b: &Self::W,
        c: &Self::W,
        values: impl FnOnce() -> Result<(Self::F, Self::F, Self::F), Error>,
    ) -> Result<(), Error> {
        let (a_out, b_out, c_out) = self.mul(values)?;
        self.enforce_equal(&a_out, a)?;
        self.enforce_equal(&b_out, b)?;
        self.enforce_equal(&c_out, c)
    }
}
