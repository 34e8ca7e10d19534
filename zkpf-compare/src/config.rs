//! Comparator configuration.

use crate::error::Error;
use ff::PrimeField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit width shared by the comparators.
///
/// Operands are expected below `2^bits`. A width is valid for a field when
/// `2 * 2^bits <= p`, which for a field of `NUM_BITS` bits means
/// `bits <= NUM_BITS - 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparatorConfig {
    /// Operand bit width.
    pub bits: usize,
}

impl ComparatorConfig {
    /// An unvalidated configuration.
    pub const fn new(bits: usize) -> Self {
        ComparatorConfig { bits }
    }

    /// Widest operand width the comparators accept over `F`.
    pub fn max_bits<F: PrimeField>() -> usize {
        (F::NUM_BITS as usize).saturating_sub(2)
    }

    /// The widest valid configuration for `F`.
    pub fn for_field<F: PrimeField>() -> Self {
        Self::new(Self::max_bits::<F>())
    }

    /// A configuration of the given width, validated against `F`.
    pub fn with_bits<F: PrimeField>(bits: usize) -> Result<Self, Error> {
        let config = Self::new(bits);
        config.validate::<F>()?;
        Ok(config)
    }

    /// Check that the width fits `F`.
    pub fn validate<F: PrimeField>(&self) -> Result<(), Error> {
        let max = Self::max_bits::<F>();
        if self.bits > max {
            return Err(Error::BitLengthTooLarge {
                requested: self.bits,
                max,
            });
        }
        Ok(())
    }
}
