//! Circuit gadgets.
//!
//! - Field elements and booleans
//! - Bit decomposition
//! - Zero tests
//! - Range checks and comparisons

pub mod bits;
pub mod boolean;
pub mod comparison;
pub mod element;
pub mod range;
pub mod zero;

pub use bits::{max_unpack_bits, pack, pow2, unpack};
pub use boolean::Boolean;
pub use comparison::{
    assert_less_than, assert_less_than_bounded, assert_less_than_or_equal,
    assert_less_than_or_equal_bounded, compare_compatible, compare_compatible_default,
    Comparison, RangeCheck,
};
pub use element::Element;
pub use range::BitDecomposition;
pub use zero::{any, is_equal, is_zero};
