//! Darcy-Weisbach pressure drop and the channel count that satisfies a limit.

use crate::common::{check_finite, check_positive};
use crate::error::ChannelResult;
use crate::flow::characterize_flow;
use crate::state::FlowState;
use cr_core::numeric::{Tolerances, nearly_equal};
use std::f64::consts::PI;

/// Whether a state's pressure drop meets the allowable limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureStatus {
    Satisfied,
    Violated,
}

/// `dp = f·L·ρ·v² / (2·D)` [Pa]
pub fn pressure_drop(f: f64, length: f64, rho: f64, velocity: f64, d_h: f64) -> f64 {
    f * length * rho * velocity * velocity / (2.0 * d_h)
}

/// Recompute the channel pressure drop.
pub fn calc_dp(state: &FlowState) -> ChannelResult<FlowState> {
    let g = &state.geometry;
    let hy = &state.hydraulics;
    let dp = pressure_drop(hy.f, g.length, state.inputs.flow().rho, hy.velocity, g.d_h);
    Ok(FlowState {
        dp: check_finite(dp, "pressure drop")?,
        ..state.clone()
    })
}

impl FlowState {
    /// A pressure drop equal to the limit within round-off counts as satisfied.
    pub fn pressure_status(&self) -> PressureStatus {
        let limit = self.inputs.flow().dp_limit;
        if self.dp <= limit || nearly_equal(self.dp, limit, Tolerances::default()) {
            PressureStatus::Satisfied
        } else {
            PressureStatus::Violated
        }
    }
}

/// Smallest whole channel count whose velocity meets the pressure limit at
/// the current friction factor.
///
/// Never returns a count at or below the current one, so repeated
/// application strictly increases the count.
pub fn dp_constrained_channels(state: &FlowState) -> ChannelResult<f64> {
    let fluid = state.inputs.flow();
    let g = &state.geometry;
    let f = check_positive(state.hydraulics.f, "friction factor")?;

    let v_req = (2.0 * g.d_h * fluid.dp_limit / (f * g.length * fluid.rho)).sqrt();
    let v_req = check_positive(v_req, "required velocity")?;
    let r = state.inputs.channel_radius();
    let n_req = (fluid.m_dot / (fluid.rho * v_req * PI * r * r)).ceil();
    let n_req = check_finite(n_req, "required channel count")?;

    if n_req > g.n_channels {
        Ok(n_req)
    } else {
        Ok(g.n_channels.floor() + 1.0)
    }
}

/// Re-derive flow and pressure drop for a new channel count.
///
/// Thermal results are carried over unchanged.
pub fn with_channel_count(state: &FlowState, n_channels: f64) -> ChannelResult<FlowState> {
    let geometry = state
        .geometry
        .with_channel_count(n_channels, state.inputs.channel_radius())?;
    let resized = FlowState {
        geometry,
        ..state.clone()
    };
    calc_dp(&characterize_flow(&resized)?)
}
