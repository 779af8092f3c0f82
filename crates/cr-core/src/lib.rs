//! cr-core: units, float helpers and the base error shared by the coolable-reactor crates.
//!
//! Public inputs are `uom` quantities built with the constructors in
//! [`units`]; everything downstream of the input boundary is plain SI `f64`.

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CrError, CrResult};
pub use numeric::*;
pub use units::*;
