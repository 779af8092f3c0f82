//! Pressure-constraint adjustment loop.

use crate::error::{SolverError, SolverResult};
use cr_channel::{FlowState, PressureStatus, calc_dp, dp_constrained_channels, with_channel_count};
use tracing::debug;

/// Default iteration ceiling for [`adjust_dp`].
pub const DEFAULT_MAX_PRESSURE_ITERATIONS: usize = 100;

/// Outcome of the pressure loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureOutcome {
    /// Final state, pressure drop within the limit
    pub state: FlowState,
    /// Number of channel-count adjustments made
    pub iterations: usize,
}

/// Raise the channel count until the pressure drop is within the limit.
///
/// A state that already satisfies the limit is returned with its channel
/// count unchanged. Each adjustment jumps to the whole channel count whose
/// velocity would meet the limit at the current friction factor, then
/// re-derives flow and pressure drop.
pub fn adjust_dp(state: &FlowState, max_iterations: usize) -> SolverResult<PressureOutcome> {
    let mut current = calc_dp(state)?;
    let limit = current.inputs().flow().dp_limit;
    let mut iterations = 0;

    while current.pressure_status() == PressureStatus::Violated {
        if iterations >= max_iterations {
            return Err(SolverError::PressureLoopDiverged {
                iterations,
                dp: current.dp(),
                limit,
            });
        }
        let n = dp_constrained_channels(&current)?;
        current = with_channel_count(&current, n)?;
        iterations += 1;
        debug!(
            iteration = iterations,
            n_channels = n,
            dp = current.dp(),
            limit,
            "pressure adjustment"
        );
    }

    Ok(PressureOutcome {
        state: current,
        iterations,
    })
}
