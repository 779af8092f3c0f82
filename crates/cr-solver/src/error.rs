//! Error types for design solving.

use cr_channel::ChannelError;
use cr_core::CrError;
use cr_props::PropsError;
use thiserror::Error;

/// Errors that can occur while solving a design.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Fuel fraction search did not converge after {evaluations} evaluations (best x = {best_x}, objective = {best_f})")]
    MinimizerFailed {
        evaluations: usize,
        best_x: f64,
        best_f: f64,
    },

    #[error("Target power {target} W not reachable: fuel fraction search ended on a bound at {fuel_frac} with generation {generation} W")]
    PowerNotMatched {
        fuel_frac: f64,
        generation: f64,
        target: f64,
    },

    #[error("Pressure loop exceeded {iterations} iterations (dp = {dp} Pa, limit = {limit} Pa)")]
    PressureLoopDiverged {
        iterations: usize,
        dp: f64,
        limit: f64,
    },

    #[error("Channel model error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Property error: {0}")]
    Props(#[from] PropsError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<CrError> for SolverError {
    fn from(e: CrError) -> Self {
        SolverError::Channel(e.into())
    }
}
