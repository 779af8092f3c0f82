//! Full evaluation of one trial fuel fraction.

use crate::criticality::constrain_radius;
use crate::error::ChannelResult;
use crate::flow::characterize_flow;
use crate::geometry::set_geometry;
use crate::state::FlowState;
use crate::thermal::get_channel_generation;

/// Criticality radius, geometry, flow and generation at `fuel_frac`.
pub fn evaluate_fraction(state: &FlowState, fuel_frac: f64) -> ChannelResult<FlowState> {
    let inputs = state.inputs();
    let core_r = constrain_radius(inputs.fuel(), inputs.coolant(), fuel_frac)?;
    evaluate_geometry(state, fuel_frac, core_r)
}

/// Geometry, flow and generation for a fixed core radius.
pub fn evaluate_geometry(state: &FlowState, fuel_frac: f64, core_r: f64) -> ChannelResult<FlowState> {
    let trial = state.with_fraction(fuel_frac, core_r)?;
    let trial = set_geometry(&trial)?;
    let trial = characterize_flow(&trial)?;
    get_channel_generation(&trial)
}
