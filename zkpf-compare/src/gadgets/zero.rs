//! Zero tests.

use crate::driver::Driver;
use crate::error::Error;
use crate::gadgets::boolean::Boolean;
use crate::gadgets::element::Element;
use crate::maybe::Maybe;
use ff::Field;

/// Returns a boolean wire that is 1 if `x == 0`, 0 otherwise.
///
/// Witnesses `z = x^-1` (or 0 when `x = 0`) and `b = 1 - z * x`, then
/// constrains
///
/// - `b * x = 0`: if `x != 0` then `b = 0`
/// - `z * x = 1 - b`: if `x = 0` then `b = 1`
///
/// so no assignment yields the wrong `b`.
pub fn is_zero<D: Driver>(dr: &mut D, x: &Element<D>) -> Result<Boolean<D>, Error> {
    let inverse = Element::alloc(
        dr,
        D::just(|| x.value().snag().invert().unwrap_or(D::F::ZERO)),
    )?;
    let result = Element::alloc(
        dr,
        D::just(|| D::F::ONE - *inverse.value().snag() * x.value().snag()),
    )?;
    constrain_is_zero(dr, x, &inverse, result)
}

// b * x = 0 and z * x + b - 1 = 0
fn constrain_is_zero<D: Driver>(
    dr: &mut D,
    x: &Element<D>,
    inverse: &Element<D>,
    result: Element<D>,
) -> Result<Boolean<D>, Error> {
    result.mul(dr, x)?.assert_zero(dr)?;

    let inverse_times_x = inverse.mul(dr, x)?;
    dr.enforce_zero(|| {
        [
            (inverse_times_x.wire().clone(), D::F::ONE),
            (result.wire().clone(), D::F::ONE),
            (D::ONE, -D::F::ONE),
        ]
    })?;

    Ok(Boolean::new_unchecked(result))
}

/// Returns a boolean wire that is 1 if `a == b`.
pub fn is_equal<D: Driver>(
    dr: &mut D,
    a: &Element<D>,
    b: &Element<D>,
) -> Result<Boolean<D>, Error> {
    let difference = a.sub(dr, b)?;
    is_zero(dr, &difference)
}

/// Returns a boolean wire that is 1 if any of `bits` is set.
///
/// The sum of booleans is zero exactly when all of them are, provided there
/// are fewer than `p` of them. `any(&[])` is 0.
pub fn any<D: Driver>(dr: &mut D, bits: &[Boolean<D>]) -> Result<Boolean<D>, Error> {
    let elements: Vec<_> = bits.iter().map(Boolean::element).collect();
    let sum = Element::sum(dr, &elements)?;
    is_zero(dr, &sum)?.not(dr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ProvingDriver;
    use crate::maybe::Always;
    use pasta_curves::Fp;

    type Dr = ProvingDriver<Fp>;

    fn zero_test(value: Fp) -> (Dr, bool) {
        let mut dr = Dr::new();
        let x = Element::alloc(&mut dr, Always(value)).unwrap();
        let result = is_zero(&mut dr, &x).unwrap().bool_value().take();
        (dr, result)
    }

    fn any_of(values: &[bool]) -> (Dr, bool) {
        let mut dr = Dr::new();
        let bits: Vec<_> = values
            .iter()
            .map(|v| Boolean::alloc(&mut dr, Always(*v)).unwrap())
            .collect();
        let result = any(&mut dr, &bits).unwrap().bool_value().take();
        (dr, result)
    }

    #[test]
    fn zero_is_zero() {
        let (dr, result) = zero_test(Fp::ZERO);
        assert!(result);
        assert!(dr.is_satisfied());
    }

    #[test]
    fn nonzero_is_not_zero() {
        for value in [Fp::ONE, Fp::from(42u64), -Fp::ONE, Fp::random(rand::thread_rng())] {
            let (dr, result) = zero_test(value);
            assert_eq!(result, value == Fp::ZERO);
            assert!(dr.is_satisfied());
        }
    }

    #[test]
    fn prover_cannot_claim_nonzero_is_zero() {
        let mut dr = Dr::new();
        let x = Element::alloc(&mut dr, Always(Fp::from(5u64))).unwrap();
        let result = is_zero(&mut dr, &x).unwrap();
        assert!(dr.is_satisfied());

        // Claim the result is 1.
        let result_index = result.wire().index;
        dr.witness[result_index] = Fp::ONE;
        assert!(!dr.is_satisfied());
    }

    /// Run the constraints against a chosen `(z, b)` instead of the honest
    /// witness.
    fn with_claim(x: Fp, inverse: Fp, result: Fp) -> Dr {
        let mut dr = Dr::new();
        let x = Element::alloc(&mut dr, Always(x)).unwrap();
        let inverse = Element::alloc(&mut dr, Always(inverse)).unwrap();
        let result = Element::alloc(&mut dr, Always(result)).unwrap();
        constrain_is_zero(&mut dr, &x, &inverse, result).unwrap();
        dr
    }

    #[test]
    fn zero_cannot_be_claimed_nonzero() {
        for inverse in [Fp::ZERO, Fp::ONE, Fp::from(7u64), Fp::random(rand::thread_rng())] {
            let dr = with_claim(Fp::ZERO, inverse, Fp::ZERO);
            // z * 0 = 1 - 0 has no solution, so the final constraint fails.
            let last = dr.shape().constraints().len() - 1;
            assert_eq!(
                dr.check_constraints(),
                Err(Error::UnsatisfiedConstraint {
                    index: last,
                    kind: "linear"
                })
            );
        }
        assert!(with_claim(Fp::ZERO, Fp::from(7u64), Fp::ONE).is_satisfied());
    }

    #[test]
    fn nonzero_cannot_be_claimed_zero() {
        let x = Fp::from(5u64);
        for inverse in [Fp::ZERO, x.invert().unwrap(), Fp::from(7u64)] {
            // b * x = x != 0
            assert!(!with_claim(x, inverse, Fp::ONE).is_satisfied());
        }
        assert!(with_claim(x, x.invert().unwrap(), Fp::ZERO).is_satisfied());
    }

    #[test]
    fn equality() {
        let mut dr = Dr::new();
        let a = Element::alloc(&mut dr, Always(Fp::from(7u64))).unwrap();
        let b = Element::alloc(&mut dr, Always(Fp::from(7u64))).unwrap();
        let c = Element::alloc(&mut dr, Always(Fp::from(8u64))).unwrap();

        assert!(is_equal(&mut dr, &a, &b).unwrap().bool_value().take());
        assert!(!is_equal(&mut dr, &a, &c).unwrap().bool_value().take());
        assert!(dr.is_satisfied());
    }

    #[test]
    fn any_of_nothing_is_false() {
        let (dr, result) = any_of(&[]);
        assert!(!result);
        assert!(dr.is_satisfied());
    }

    #[test]
    fn any_of_zeros_is_false() {
        let (dr, result) = any_of(&[false; 5]);
        assert!(!result);
        assert!(dr.is_satisfied());
    }

    #[test]
    fn any_with_a_one_is_true() {
        for position in 0..5 {
            let mut values = [false; 5];
            values[position] = true;
            let (dr, result) = any_of(&values);
            assert!(result);
            assert!(dr.is_satisfied());
        }
        let (dr, result) = any_of(&[true; 5]);
        assert!(result);
        assert!(dr.is_satisfied());
    }
}
