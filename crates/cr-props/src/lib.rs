//! cr-props: material and coolant property data for the channel model.
//!
//! Provides:
//! - The material table (fuels, cladding, reflector) keyed by name
//! - Coolant definitions with linear temperature fits
//! - `FlowProperties`, the bulk flow conditions a design is solved against
//!
//! # Example
//!
//! ```no_run
//! use cr_props::{Coolant, FlowProperties};
//! use cr_core::units::{k, kgps, pa};
//!
//! let props = FlowProperties::new(
//!     Coolant::CO2,
//!     kgps(1.0),
//!     (k(900.0), k(1000.0)),
//!     (pa(17.9e6), pa(17.4e6)),
//! )
//! .unwrap();
//! println!("Pr = {:.4}", props.pr);
//! ```

pub mod coolant;
pub mod error;
pub mod flow;
pub mod materials;

// Re-exports for ergonomics
pub use coolant::{Coolant, LinearFit};
pub use error::{PropsError, PropsResult};
pub use flow::FlowProperties;
pub use materials::{Material, MaterialProps};
