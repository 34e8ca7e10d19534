//! Bit decomposition gadgets.
//!
//! [`unpack`] splits an element into boolean wires and constrains their
//! weighted sum to equal it. Together the two constraint families admit
//! exactly one assignment when `x < 2^length` and none otherwise, as long as
//! `2^length <= p`.

use crate::driver::Driver;
use crate::error::Error;
use crate::gadgets::boolean::Boolean;
use crate::gadgets::element::Element;
use crate::maybe::Maybe;
use core::cmp::Ordering;
use ff::{Field, PrimeField, PrimeFieldBits};

/// Largest `length` accepted by [`unpack`]: `2^length` must not exceed `p`.
pub fn max_unpack_bits<F: PrimeField>() -> usize {
    (F::NUM_BITS as usize).saturating_sub(1)
}

/// Decompose `x` into `length` boolean wires, least significant first.
///
/// The caller guarantees `x < 2^length`. If it doesn't hold, the prover's
/// witness fails the recomposition constraint and so would any other.
/// Constraints are emitted in both passes. Only the prover pass computes bits.
pub fn unpack<D: Driver>(
    dr: &mut D,
    x: &Element<D>,
    length: usize,
) -> Result<Vec<Boolean<D>>, Error> {
    let max = max_unpack_bits::<D::F>();
    if length > max {
        return Err(Error::BitLengthTooLarge {
            requested: length,
            max,
        });
    }
    tracing::trace!(length, "unpacking element into bits");

    let bits = (0..length)
        .map(|i| Boolean::alloc(dr, D::just(|| bit(x.value().snag(), i))))
        .collect::<Result<Vec<_>, _>>()?;

    // sum(bit_i * 2^i) - x = 0
    let mut terms = Vec::with_capacity(length + 1);
    let mut power_of_two = D::F::ONE;
    for b in &bits {
        terms.push((b.wire().clone(), power_of_two));
        power_of_two = power_of_two.double();
    }
    terms.push((x.wire().clone(), -D::F::ONE));
    dr.enforce_zero(|| terms)?;

    Ok(bits)
}

/// Recompose little-endian bits into a field element.
pub fn pack<D: Driver>(dr: &mut D, bits: &[Boolean<D>]) -> Result<Element<D>, Error> {
    let mut power_of_two = D::F::ONE;
    let terms: Vec<_> = bits
        .iter()
        .map(|b| {
            let term = (power_of_two, b.element());
            power_of_two = power_of_two.double();
            term
        })
        .collect();
    Element::linear_combination(dr, &terms)
}

/// `2^n` in the field.
pub fn pow2<F: Field>(n: usize) -> F {
    (0..n).fold(F::ONE, |acc, _| acc.double())
}

/// Bit `i` of the canonical integer representative of `value`.
pub(crate) fn bit<F: PrimeFieldBits>(value: &F, i: usize) -> bool {
    let bits = value.to_le_bits();
    i < bits.len() && bits[i]
}

/// Number of bits needed to write `value` as an integer (0 for zero).
pub(crate) fn bit_length<F: PrimeFieldBits>(value: &F) -> usize {
    let bits = value.to_le_bits();
    (0..bits.len()).rev().find(|&i| bits[i]).map_or(0, |i| i + 1)
}

/// The canonical integer representative of `value`, in decimal when it fits
/// in a `u128` and in hexadecimal otherwise.
pub(crate) fn integer_string<F: PrimeFieldBits>(value: &F) -> String {
    let bits = value.to_le_bits();
    let length = bit_length(value);
    if length <= 128 {
        let n = (0..length)
            .filter(|&i| bits[i])
            .fold(0u128, |acc, i| acc | (1u128 << i));
        return n.to_string();
    }

    let digits: String = (0..(length + 3) / 4)
        .rev()
        .map(|nibble| {
            let digit = (0..4)
                .filter(|&j| nibble * 4 + j < length && bits[nibble * 4 + j])
                .fold(0u32, |acc, j| acc | (1 << j));
            char::from_digit(digit, 16).unwrap_or('0')
        })
        .collect();
    format!("0x{digits}")
}

/// Compare the canonical integer representatives of two field elements.
pub(crate) fn compare<F: PrimeFieldBits>(a: &F, b: &F) -> Ordering {
    let (a, b) = (a.to_le_bits(), b.to_le_bits());
    for i in (0..a.len()).rev() {
        match (a[i], b[i]) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {}
        }
    }
    Ordering::Equal
}
