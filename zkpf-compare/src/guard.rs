//! Prover-side operand bounds.
//!
//! The comparators are only sound for operands below their bound, but the
//! generic ones cannot enforce that in-circuit. These checks look at the
//! concrete witness values while proving and fail loudly instead of letting
//! the prover produce an unsatisfiable (or silently wrong) assignment. They
//! add no constraints and do nothing in the shape pass.

use crate::driver::Driver;
use crate::error::{Operand, RangeGuardError};
use crate::gadgets::bits::{bit_length, compare, integer_string, pow2};
use crate::gadgets::element::Element;
use crate::maybe::Maybe;
use core::cmp::Ordering;
use ff::PrimeFieldBits;

/// Check that both operands are below `bound` as integers.
pub fn check_ranges_as_prover<D: Driver>(
    x: &Element<D>,
    y: &Element<D>,
    bound: D::F,
) -> Result<(), RangeGuardError> {
    D::just(|| {
        check_operand(Operand::Left, x.value().snag(), &bound)?;
        check_operand(Operand::Right, y.value().snag(), &bound)
    })
    .into_option()
    .unwrap_or(Ok(()))
}

/// Check that both operands fit in `bits` bits.
pub fn check_bits_as_prover<D: Driver>(
    x: &Element<D>,
    y: &Element<D>,
    bits: usize,
) -> Result<(), RangeGuardError> {
    check_ranges_as_prover(x, y, pow2::<D::F>(bits))
}

fn check_operand<F: PrimeFieldBits>(
    operand: Operand,
    value: &F,
    bound: &F,
) -> Result<(), RangeGuardError> {
    if compare(value, bound) == Ordering::Less {
        return Ok(());
    }

    let allowed_bits = if bound.is_zero_vartime() {
        0
    } else {
        bit_length(&(*bound - F::ONE))
    };
    let error = RangeGuardError {
        operand,
        actual_bits: bit_length(value),
        allowed_bits,
        bound: integer_string(bound),
    };
    tracing::debug!(
        %operand,
        actual_bits = error.actual_bits,
        bound = %error.bound,
        "operand out of range"
    );
    Err(error)
}
