//! cr-solver: power matching, pressure constraint and design sweeps.
//!
//! Provides:
//! - A bounded scalar minimizer for the fuel fraction search
//! - The pressure-constraint adjustment loop
//! - `design_reactor`: search, pressure loop and mass in sequence
//! - Parallel parametric sweeps over channel radius, power and fuel fraction

pub mod bounded;
pub mod design;
pub mod error;
pub mod pressure_loop;
pub mod sweep;

pub use bounded::{BoundedConfig, BoundedResult, minimize_bounded};
pub use design::{
    DEFAULT_ASPECT_RATIO, DEFAULT_CHANNEL_RADIUS, DEFAULT_CLAD_THICKNESS, DEFAULT_POWER_RTOL,
    Design, DesignConfig, PowerMatch, design_reactor, finish_state, generation_objective, reactor_mass,
    solve_channel_count,
};
pub use error::{SolverError, SolverResult};
pub use pressure_loop::{DEFAULT_MAX_PRESSURE_ITERATIONS, PressureOutcome, adjust_dp};
pub use sweep::{SweepPoint, SweepReport, linspace, sweep_designs, sweep_fuel_fraction};
