//! Comparison gadgets.
//!
//! Two families live here:
//!
//! - [`assert_less_than_or_equal`] and [`assert_less_than`] take any
//!   [`RangeCheck`] and reduce the comparison to range-checking the
//!   difference `y - x` (or `y - x - 1`). With operands in `[0, c)` and a
//!   range check that accepts exactly `[0, c)`, the difference lands in range
//!   iff the comparison holds, as long as `2c <= p` so a negative difference
//!   wraps to a value of at least `c`.
//! - [`compare_compatible`] returns both results as boolean wires instead of
//!   asserting one of them, using a fixed bit-decomposition layout.

use crate::config::ComparatorConfig;
use crate::driver::Driver;
use crate::error::Error;
use crate::gadgets::bits::{pow2, unpack};
use crate::gadgets::boolean::Boolean;
use crate::gadgets::element::Element;
use crate::gadgets::zero::any;
use crate::guard::check_bits_as_prover;
use ff::{Field, PrimeField};

/// Constrains a value to a range `[0, c)`.
///
/// Any closure `Fn(&mut D, &Element<D>) -> Result<(), Error>` is a range
/// check. Implementations that know their width report it through
/// [`RangeCheck::bits`] so the comparators can assert their preconditions in
/// debug builds.
pub trait RangeCheck<D: Driver> {
    /// Emit the constraints that restrict `value` to the range.
    fn check(&self, dr: &mut D, value: &Element<D>) -> Result<(), Error>;

    /// `Some(k)` if the accepted range is exactly `[0, 2^k)`.
    fn bits(&self) -> Option<usize> {
        None
    }
}

impl<D, R> RangeCheck<D> for R
where
    D: Driver,
    R: Fn(&mut D, &Element<D>) -> Result<(), Error>,
{
    fn check(&self, dr: &mut D, value: &Element<D>) -> Result<(), Error> {
        self(dr, value)
    }
}

/// Constrain `x <= y`.
///
/// Both operands must already be known to lie in the range `range` accepts,
/// and twice that range must not exceed the field. Neither is enforced here;
/// see [`assert_less_than_or_equal_bounded`].
pub fn assert_less_than_or_equal<D, R>(
    dr: &mut D,
    x: &Element<D>,
    y: &Element<D>,
    range: &R,
) -> Result<(), Error>
where
    D: Driver,
    R: RangeCheck<D> + ?Sized,
{
    debug_assert_operands(x, y, range);
    check_difference(dr, x, y, D::F::ZERO, range)
}

/// Constrain `x < y`.
///
/// Same preconditions as [`assert_less_than_or_equal`].
pub fn assert_less_than<D, R>(
    dr: &mut D,
    x: &Element<D>,
    y: &Element<D>,
    range: &R,
) -> Result<(), Error>
where
    D: Driver,
    R: RangeCheck<D> + ?Sized,
{
    debug_assert_operands(x, y, range);
    check_difference(dr, x, y, -D::F::ONE, range)
}

/// Constrain `x <= y`, range-checking both operands first.
pub fn assert_less_than_or_equal_bounded<D, R>(
    dr: &mut D,
    x: &Element<D>,
    y: &Element<D>,
    range: &R,
) -> Result<(), Error>
where
    D: Driver,
    R: RangeCheck<D> + ?Sized,
{
    range.check(dr, x)?;
    range.check(dr, y)?;
    check_difference(dr, x, y, D::F::ZERO, range)
}

/// Constrain `x < y`, range-checking both operands first.
pub fn assert_less_than_bounded<D, R>(
    dr: &mut D,
    x: &Element<D>,
    y: &Element<D>,
    range: &R,
) -> Result<(), Error>
where
    D: Driver,
    R: RangeCheck<D> + ?Sized,
{
    range.check(dr, x)?;
    range.check(dr, y)?;
    check_difference(dr, x, y, -D::F::ONE, range)
}

// range(y - x + offset)
fn check_difference<D, R>(
    dr: &mut D,
    x: &Element<D>,
    y: &Element<D>,
    offset: D::F,
    range: &R,
) -> Result<(), Error>
where
    D: Driver,
    R: RangeCheck<D> + ?Sized,
{
    let difference = y.sub(dr, x)?;
    let difference = if offset.is_zero_vartime() {
        difference
    } else {
        difference.add_constant(dr, offset)?
    };
    range.check(dr, &difference)
}

fn debug_assert_operands<D, R>(x: &Element<D>, y: &Element<D>, range: &R)
where
    D: Driver,
    R: RangeCheck<D> + ?Sized,
{
    if let Some(bits) = range.bits() {
        debug_assert!(
            bits.saturating_add(2) <= D::F::NUM_BITS as usize,
            "a {bits}-bit range check is too wide for the field"
        );
        debug_assert!(
            check_bits_as_prover(x, y, bits).is_ok(),
            "comparison operands exceed {bits} bits"
        );
    }
}

/// Both outcomes of [`compare_compatible`].
pub struct Comparison<D: Driver> {
    /// 1 iff `x <= y`.
    pub less_or_equal: Boolean<D>,
    /// 1 iff `x < y`.
    pub less: Boolean<D>,
}

impl<D: Driver> Clone for Comparison<D> {
    fn clone(&self) -> Self {
        Comparison {
            less_or_equal: self.less_or_equal.clone(),
            less: self.less.clone(),
        }
    }
}

impl<D: Driver> core::fmt::Debug for Comparison<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Comparison")
            .field("less_or_equal", &self.less_or_equal)
            .field("less", &self.less)
            .finish()
    }
}

/// Compare two operands below `2^bits`.
///
/// Unpacks `z = 2^bits + y - x` into `bits + 1` bits. The top bit is set iff
/// `x <= y`, and then the low bits hold `y - x`, which is nonzero iff
/// `x < y`. `bits` must not exceed `NUM_BITS - 2`. While proving, operands
/// at or above `2^bits` are rejected with [`Error::RangeGuard`] before any
/// constraint is emitted.
pub fn compare_compatible<D: Driver>(
    dr: &mut D,
    x: &Element<D>,
    y: &Element<D>,
    bits: usize,
) -> Result<Comparison<D>, Error> {
    ComparatorConfig::new(bits).validate::<D::F>()?;
    tracing::trace!(bits, "comparing operands");
    check_bits_as_prover(x, y, bits)?;

    let shifted = y.sub(dr, x)?.add_constant(dr, pow2(bits))?;
    let z_bits = unpack(dr, &shifted, bits + 1)?;
    let (low, high) = z_bits.split_at(bits);

    let less_or_equal = high[0].clone();
    let nonzero = any(dr, low)?;
    let less = less_or_equal.and(dr, &nonzero)?;

    Ok(Comparison {
        less_or_equal,
        less,
    })
}

/// [`compare_compatible`] at the widest width the field allows.
pub fn compare_compatible_default<D: Driver>(
    dr: &mut D,
    x: &Element<D>,
    y: &Element<D>,
) -> Result<Comparison<D>, Error> {
    let config = ComparatorConfig::for_field::<D::F>();
    compare_compatible(dr, x, y, config.bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{ProvingDriver, ShapeDriver};
    use crate::error::{Operand, RangeGuardError};
    use crate::gadgets::range::BitDecomposition;
    use crate::maybe::{Always, Empty, Maybe};
    use pasta_curves::Fp;
    use proptest::prelude::*;

    type Dr = ProvingDriver<Fp>;

    fn alloc(dr: &mut Dr, v: Fp) -> Element<Dr> {
        Element::alloc(dr, Always(v)).unwrap()
    }

    fn compare_values(x: u64, y: u64, bits: usize) -> (Dr, (bool, bool)) {
        let mut dr = Dr::new();
        let x = alloc(&mut dr, Fp::from(x));
        let y = alloc(&mut dr, Fp::from(y));
        let result = compare_compatible(&mut dr, &x, &y, bits).unwrap();
        let values = (
            result.less_or_equal.bool_value().take(),
            result.less.bool_value().take(),
        );
        (dr, values)
    }

    fn eight_bits(dr: &mut Dr, value: &Element<Dr>) -> Result<(), Error> {
        unpack(dr, value, 8).map(|_| ())
    }

    type Assertion =
        fn(&mut Dr, &Element<Dr>, &Element<Dr>, &BitDecomposition) -> Result<(), Error>;

    fn assert_with(
        x: u64,
        y: u64,
        assertion: Assertion,
    ) -> bool {
        let mut dr = Dr::new();
        let x = alloc(&mut dr, Fp::from(x));
        let y = alloc(&mut dr, Fp::from(y));
        let range = BitDecomposition::new::<Fp>(8).unwrap();
        assertion(&mut dr, &x, &y, &range).unwrap();
        dr.is_satisfied()
    }

    #[test]
    fn compatible_equal_operands() {
        let (dr, result) = compare_values(5, 5, 8);
        assert_eq!(result, (true, false));
        assert!(dr.is_satisfied());
    }

    #[test]
    fn compatible_smaller_left() {
        let (dr, result) = compare_values(3, 9, 8);
        assert_eq!(result, (true, true));
        assert!(dr.is_satisfied());
    }

    #[test]
    fn compatible_larger_left() {
        let (dr, result) = compare_values(9, 3, 8);
        assert_eq!(result, (false, false));
        assert!(dr.is_satisfied());
    }

    #[test]
    fn compatible_extremes() {
        assert_eq!(compare_values(0, 255, 8).1, (true, true));
        assert_eq!(compare_values(255, 0, 8).1, (false, false));
        assert_eq!(compare_values(0, 0, 0).1, (true, false));
    }

    #[test]
    fn compatible_rejects_wide_layouts() {
        let mut dr = ShapeDriver::<Fp>::new();
        let x = Element::alloc(&mut dr, Empty::new()).unwrap();
        let y = Element::alloc(&mut dr, Empty::new()).unwrap();
        let err = compare_compatible(&mut dr, &x, &y, 254).unwrap_err();
        assert_eq!(
            err,
            Error::BitLengthTooLarge {
                requested: 254,
                max: 253
            }
        );
        assert_eq!(dr.shape().constraints().len(), 2);
    }

    #[test]
    fn compatible_guards_operands_while_proving() {
        let mut dr = Dr::new();
        let x = alloc(&mut dr, Fp::from(5u64));
        let y = alloc(&mut dr, Fp::from(300u64));
        let err = compare_compatible(&mut dr, &x, &y, 8).unwrap_err();
        assert_eq!(
            err,
            Error::RangeGuard(RangeGuardError {
                operand: Operand::Right,
                actual_bits: 9,
                allowed_bits: 8,
                bound: "256".into(),
            })
        );
    }

    #[test]
    fn compatible_default_width() {
        let mut dr = Dr::new();
        let big = pow2::<Fp>(200);
        let x = alloc(&mut dr, big);
        let y = alloc(&mut dr, big + Fp::ONE);
        let result = compare_compatible_default(&mut dr, &x, &y).unwrap();
        assert!(result.less.bool_value().take());
        let result = compare_compatible_default(&mut dr, &y, &x).unwrap();
        assert!(!result.less_or_equal.bool_value().take());
        assert!(dr.is_satisfied());
    }

    #[test]
    fn generic_comparators_with_bit_decomposition() {
        assert!(assert_with(3, 9, assert_less_than_or_equal));
        assert!(assert_with(9, 9, assert_less_than_or_equal));
        assert!(!assert_with(10, 9, assert_less_than_or_equal));

        assert!(assert_with(3, 9, assert_less_than));
        assert!(!assert_with(9, 9, assert_less_than));
        assert!(!assert_with(10, 9, assert_less_than));
    }

    #[test]
    fn generic_comparators_with_a_closure() {
        let mut dr = Dr::new();
        let x = alloc(&mut dr, Fp::from(0u64));
        let y = alloc(&mut dr, Fp::from(255u64));
        assert_less_than_or_equal(&mut dr, &x, &y, &eight_bits).unwrap();
        assert_less_than(&mut dr, &x, &y, &eight_bits).unwrap();
        assert!(dr.is_satisfied());

        assert_less_than(&mut dr, &y, &x, &eight_bits).unwrap();
        assert!(!dr.is_satisfied());
    }

    #[test]
    fn closure_range_checks_trust_their_operands() {
        // p - 1 "<=" 5, because 5 - (p - 1) = 6 fits in eight bits.
        let mut dr = Dr::new();
        let x = alloc(&mut dr, -Fp::ONE);
        let y = alloc(&mut dr, Fp::from(5u64));
        assert_less_than_or_equal(&mut dr, &x, &y, &eight_bits).unwrap();
        assert!(dr.is_satisfied());
    }

    #[test]
    fn bounded_comparators_check_operands() {
        let mut dr = Dr::new();
        let x = alloc(&mut dr, -Fp::ONE);
        let y = alloc(&mut dr, Fp::from(5u64));
        assert_less_than_or_equal_bounded(&mut dr, &x, &y, &eight_bits).unwrap();
        assert!(!dr.is_satisfied());

        assert!(assert_with(3, 9, assert_less_than_or_equal_bounded));
        assert!(assert_with(3, 9, assert_less_than_bounded));
        assert!(!assert_with(9, 9, assert_less_than_bounded));
    }

    #[test]
    fn bounded_comparators_cost_three_range_checks() {
        let range = BitDecomposition::new::<Fp>(16).unwrap();

        let mut plain = ShapeDriver::<Fp>::new();
        let x = Element::alloc(&mut plain, Empty::new()).unwrap();
        let y = Element::alloc(&mut plain, Empty::new()).unwrap();
        assert_less_than(&mut plain, &x, &y, &range).unwrap();

        let mut bounded = ShapeDriver::<Fp>::new();
        let x = Element::alloc(&mut bounded, Empty::new()).unwrap();
        let y = Element::alloc(&mut bounded, Empty::new()).unwrap();
        assert_less_than_bounded(&mut bounded, &x, &y, &range).unwrap();

        // Each extra decomposition is 16 boolean gates.
        assert_eq!(
            bounded.shape().stats().num_mul,
            plain.shape().stats().num_mul + 32
        );
    }

    struct TooWide;

    impl RangeCheck<Dr> for TooWide {
        fn check(&self, _dr: &mut Dr, _value: &Element<Dr>) -> Result<(), Error> {
            Ok(())
        }

        fn bits(&self) -> Option<usize> {
            Some(usize::MAX)
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "is too wide for the field")]
    fn oversized_width_is_reported_not_overflowed() {
        let mut dr = Dr::new();
        let x = alloc(&mut dr, Fp::ONE);
        let y = alloc(&mut dr, Fp::from(2u64));
        let _ = assert_less_than_or_equal(&mut dr, &x, &y, &TooWide);
    }

    proptest! {
        #[test]
        fn compatible_matches_integer_order(x in 0u64..(1 << 32), y in 0u64..(1 << 32)) {
            let (dr, (le, lt)) = compare_values(x, y, 32);
            prop_assert!(dr.is_satisfied());
            prop_assert_eq!(le, x <= y);
            prop_assert_eq!(lt, x < y);
        }

        #[test]
        fn generic_satisfiable_iff_ordered(x in 0u64..256, y in 0u64..256) {
            prop_assert_eq!(assert_with(x, y, assert_less_than_or_equal), x <= y);
            prop_assert_eq!(assert_with(x, y, assert_less_than), x < y);
        }
    }
}
