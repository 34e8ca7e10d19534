//! Concrete driver implementations.
//!
//! - [`shape`]: Driver for laying out the constraint shape without witness data
//! - [`proving`]: Driver for proof generation with witness data

pub mod proving;
pub mod shape;

pub use proving::ProvingDriver;
pub use shape::{Constraint, ConstraintShape, ShapeDriver, ShapeStats, Variable};
