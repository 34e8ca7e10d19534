//! # zkpf-compare - Comparison gadgets for prime-field circuits
//!
//! `zkpf-compare` turns numeric comparisons (`<=`, `<`, `== 0`) into
//! multiplication and linear constraints over a large prime field. It
//! provides:
//!
//! - **Zero tests**: [`is_zero`], [`is_equal`] and [`any`], each returning a
//!   boolean wire.
//! - **Bit decomposition**: [`unpack`] splits an element into boolean wires
//!   whose weighted sum is constrained to equal it.
//! - **Comparators**: a generic family parameterized by any [`RangeCheck`],
//!   and [`compare_compatible`], which returns both `x <= y` and `x < y` as
//!   boolean wires.
//! - **Prover guard**: [`check_ranges_as_prover`] rejects oversized operands
//!   while proving, before an unsatisfiable witness is produced.
//!
//! ## Key Components
//!
//! ### Maybe<T> - Witness values that only exist while proving
//!
//! Every gadget runs twice: once to lay out the constraint shape, once to
//! fill in a witness. Values live in a `Maybe<T>` that is `Always<T>` in the
//! second pass and the zero-sized `Empty<T>` in the first, so witness
//! computations disappear from the shape pass entirely.
//!
//! ### Driver - Synthesis Context Abstraction
//!
//! - `ShapeDriver`: records constraints only
//! - `ProvingDriver`: records the same constraints plus a value per wire, and
//!   can check the assignment
//!
//! Both record into a `ConstraintShape`, so the two passes can be compared
//! directly.
//!
//! ## Example
//!
//! ```rust,ignore
//! use zkpf_compare::prelude::*;
//! use zkpf_compare::drivers::ProvingDriver;
//! use pasta_curves::Fp;
//!
//! let mut dr = ProvingDriver::<Fp>::new();
//! let x = Element::alloc(&mut dr, Always(Fp::from(3u64)))?;
//! let y = Element::alloc(&mut dr, Always(Fp::from(9u64)))?;
//!
//! // Generic comparator with a 32-bit decomposition as the range check.
//! let range = BitDecomposition::new::<Fp>(32)?;
//! assert_less_than(&mut dr, &x, &y, &range)?;
//!
//! // Both outcomes as boolean wires.
//! let result = compare_compatible(&mut dr, &x, &y, 32)?;
//! assert!(result.less.bool_value().take());
//!
//! dr.check_constraints()?;
//! ```

pub mod config;
pub mod driver;
pub mod drivers;
pub mod error;
pub mod gadgets;
pub mod guard;
pub mod maybe;

// Re-exports for convenience
pub use config::ComparatorConfig;
pub use driver::{Driver, Witness};
pub use error::{Error, Operand, RangeGuardError, Result};
pub use gadgets::{
    any, assert_less_than, assert_less_than_bounded, assert_less_than_or_equal,
    assert_less_than_or_equal_bounded, compare_compatible, compare_compatible_default, is_equal,
    is_zero, pack, unpack, BitDecomposition, Boolean, Comparison, Element, RangeCheck,
};
pub use guard::{check_bits_as_prover, check_ranges_as_prover};
pub use maybe::{Always, AlwaysKind, Empty, EmptyKind, Maybe, MaybeKind};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::driver::{Driver, Witness};
    pub use crate::error::{Error, Result};
    pub use crate::gadgets::{
        assert_less_than, assert_less_than_or_equal, compare_compatible, BitDecomposition,
        Boolean, Comparison, Element, RangeCheck,
    };
    pub use crate::maybe::{Always, Empty, Maybe, MaybeKind};
}
