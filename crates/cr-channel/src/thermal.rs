//! Series conduction/convection resistance and achievable generation.

use crate::common::{AXIAL_PEAKING, check_finite, check_positive};
use crate::error::ChannelResult;
use crate::state::{FlowState, Geometry, Hydraulics, Thermal};
use std::f64::consts::PI;

impl Thermal {
    /// Resistance network for the whole core, treating all channels in parallel.
    ///
    /// `dt` is the fuel centerline to coolant bulk temperature drop and
    /// `k_fuel` the fuel conductivity. The peak heat rate is scaled by the
    /// cosine axial shape factor to give the axially averaged generation.
    pub fn compute(
        geometry: &Geometry,
        hydraulics: &Hydraulics,
        k_fuel: f64,
        dt: f64,
        r_channel: f64,
    ) -> ChannelResult<Self> {
        let a_cond = check_positive(geometry.a_cond, "conduction area")?;
        let h = check_positive(hydraulics.h, "heat transfer coefficient")?;
        let n = check_positive(geometry.n_channels, "channel count")?;

        let r_cond = geometry.r_cond / (k_fuel * a_cond);
        let r_conv = 1.0 / (h * 2.0 * PI * r_channel * geometry.length * n);
        let q_peak = check_finite(dt / (r_cond + r_conv), "centerline generation")?;
        let generation = q_peak / AXIAL_PEAKING;

        Ok(Self {
            r_cond,
            r_conv,
            dt,
            q_peak,
            generation,
            volumetric: generation / geometry.vol_fuel,
        })
    }
}

/// Achievable generation for the state's geometry and flow.
pub fn get_channel_generation(state: &FlowState) -> ChannelResult<FlowState> {
    let inputs = state.inputs();
    let thermal = Thermal::compute(
        &state.geometry,
        &state.hydraulics,
        inputs.fuel().conductivity()?,
        inputs.temperature_drop()?,
        inputs.channel_radius(),
    )?;
    Ok(FlowState {
        thermal,
        ..state.clone()
    })
}
