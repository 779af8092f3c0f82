//! cr-channel: one-dimensional coolant channel model for a cylindrical core.
//!
//! Provides:
//! - Pipe-flow correlations (turbulent, laminar and a blended dispatcher)
//! - Core/channel geometry from fuel fraction and core radius
//! - Flow characterization and the conduction/convection resistance network
//! - Darcy-Weisbach pressure drop and the pressure-constrained channel count
//! - The criticality radius fit and reactor mass breakdown
//!
//! Each stage maps a `FlowState` to a new `FlowState`.
//!
//! # Example
//!
//! ```no_run
//! use cr_channel::{DesignInputs, FlowState, evaluate_fraction};
//! use cr_core::units::{k, kgps, m, pa, w};
//! use cr_props::{Coolant, FlowProperties, Material};
//!
//! let flow = FlowProperties::new(
//!     Coolant::CO2,
//!     kgps(1.0),
//!     (k(900.0), k(1000.0)),
//!     (pa(17.9e6), pa(17.4e6)),
//! )
//! .unwrap();
//! let inputs =
//!     DesignInputs::new(m(0.005), m(0.00031), 1.0, w(1.0e5), Material::UW, flow).unwrap();
//!
//! let trial = evaluate_fraction(&FlowState::new(inputs), 0.6).unwrap();
//! println!("generation = {:.1} W", trial.thermal().generation);
//! ```

pub mod common;
pub mod correlations;
pub mod criticality;
pub mod error;
pub mod fields;
pub mod flow;
pub mod geometry;
pub mod inputs;
pub mod mass;
pub mod pressure;
pub mod state;
pub mod thermal;
pub mod trial;

// Re-exports
pub use correlations::{FlowRegime, PipeFlow, TurbulentFlow, laminar, pipeflow, turbulent};
pub use criticality::{CriticalityFit, constrain_radius};
pub use error::{ChannelError, ChannelResult};
pub use fields::OutputField;
pub use flow::characterize_flow;
pub use geometry::set_geometry;
pub use inputs::DesignInputs;
pub use mass::{MassBreakdown, compute_mass};
pub use pressure::{
    PressureStatus, calc_dp, dp_constrained_channels, pressure_drop, with_channel_count,
};
pub use state::{FlowState, Geometry, Hydraulics, Thermal};
pub use thermal::get_channel_generation;
pub use trial::{evaluate_fraction, evaluate_geometry};
