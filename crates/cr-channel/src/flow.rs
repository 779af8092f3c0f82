//! Flow characterization: velocity, Reynolds number, friction and heat transfer.

use crate::common::{check_finite, check_positive};
use crate::correlations::pipeflow;
use crate::error::ChannelResult;
use crate::state::{FlowState, Geometry, Hydraulics};
use cr_props::FlowProperties;

impl Hydraulics {
    /// Characterize coolant flow through `geometry`.
    pub fn compute(
        geometry: &Geometry,
        fluid: &FlowProperties,
        roughness: f64,
    ) -> ChannelResult<Self> {
        let a_flow = check_positive(geometry.a_flow, "flow area")?;
        let d_h = check_positive(geometry.d_h, "hydraulic diameter")?;

        let relrough = roughness / d_h;
        let mass_flux = fluid.m_dot / a_flow;
        let velocity = mass_flux / fluid.rho;
        let re = check_finite(fluid.rho * velocity * d_h / fluid.mu, "Reynolds number")?;

        let pf = pipeflow(re, fluid.pr, geometry.ld, relrough)?;
        let h = check_finite(pf.nu_t * fluid.k / d_h, "heat transfer coefficient")?;

        Ok(Self {
            relrough,
            mass_flux,
            velocity,
            re,
            f: pf.f,
            nu: pf.nu_t,
            nu_h: pf.nu_h,
            h,
        })
    }
}

/// Recompute flow results for the state's current geometry.
pub fn characterize_flow(state: &FlowState) -> ChannelResult<FlowState> {
    let inputs = state.inputs();
    let hydraulics = Hydraulics::compute(
        &state.geometry,
        inputs.flow(),
        inputs.clad().roughness()?,
    )?;
    Ok(FlowState {
        hydraulics,
        ..state.clone()
    })
}
