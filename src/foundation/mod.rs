//! Shared primitives: error taxonomy, page geometry and pixel math.

pub mod core;
pub mod error;
pub(crate) mod math;
