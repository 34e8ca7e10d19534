//! Range check gadgets.
//!
//! These gadgets implement range checks using bit decomposition.

use crate::config::ComparatorConfig;
use crate::driver::Driver;
use crate::error::Error;
use crate::gadgets::bits::unpack;
use crate::gadgets::comparison::RangeCheck;
use crate::gadgets::element::Element;
use ff::PrimeField;

/// Range check `[0, 2^k)` by unpacking into `k` boolean wires.
///
/// Costs `k` multiplication gates and one linear constraint per checked
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDecomposition {
    bits: usize,
}

impl BitDecomposition {
    /// A `bits`-wide check over `F`.
    ///
    /// Rejects widths above `NUM_BITS - 2`, past which the comparators built
    /// on top of the check stop being sound.
    pub fn new<F: PrimeField>(bits: usize) -> Result<Self, Error> {
        let config = ComparatorConfig::with_bits::<F>(bits)?;
        Ok(BitDecomposition { bits: config.bits })
    }

    /// The widest check over `F`.
    pub fn for_field<F: PrimeField>() -> Self {
        BitDecomposition {
            bits: ComparatorConfig::max_bits::<F>(),
        }
    }

    /// The number of bits `k`.
    pub fn num_bits(&self) -> usize {
        self.bits
    }
}

impl<D: Driver> RangeCheck<D> for BitDecomposition {
    fn check(&self, dr: &mut D, value: &Element<D>) -> Result<(), Error> {
        tracing::trace!(bits = self.bits, "range checking by decomposition");
        unpack(dr, value, self.bits)?;
        Ok(())
    }

    fn bits(&self) -> Option<usize> {
        Some(self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::{ProvingDriver, ShapeDriver};
    use crate::maybe::{Always, Empty};
    use ff::Field;
    use pasta_curves::Fp;

    fn check_value(value: Fp, bits: usize) -> bool {
        let mut dr = ProvingDriver::<Fp>::new();
        let x = Element::alloc(&mut dr, Always(value)).unwrap();
        BitDecomposition::new::<Fp>(bits)
            .unwrap()
            .check(&mut dr, &x)
            .unwrap();
        dr.is_satisfied()
    }

    #[test]
    fn accepts_values_in_range() {
        assert!(check_value(Fp::ZERO, 8));
        assert!(check_value(Fp::from(255u64), 8));
        assert!(check_value(Fp::from(u64::MAX), 64));
    }

    #[test]
    fn rejects_values_out_of_range() {
        assert!(!check_value(Fp::from(256u64), 8));
        assert!(!check_value(-Fp::ONE, 64));
    }

    #[test]
    fn width_is_validated() {
        assert_eq!(BitDecomposition::new::<Fp>(16).unwrap().num_bits(), 16);
        assert_eq!(BitDecomposition::for_field::<Fp>().num_bits(), 253);
        assert_eq!(
            BitDecomposition::new::<Fp>(254),
            Err(Error::BitLengthTooLarge {
                requested: 254,
                max: 253
            })
        );
    }

    #[test]
    fn reports_its_width() {
        let range = BitDecomposition::new::<Fp>(12).unwrap();
        assert_eq!(RangeCheck::<ShapeDriver<Fp>>::bits(&range), Some(12));

        let mut dr = ShapeDriver::<Fp>::new();
        let x = Element::alloc(&mut dr, Empty::new()).unwrap();
        range.check(&mut dr, &x).unwrap();
        let stats = dr.shape().stats();
        assert_eq!(stats.num_mul, 13);
    }
}
