//! Reactor mass from final geometry.

use crate::common::{REFLECTOR_RADIUS_RATIO, check_finite};
use crate::error::ChannelResult;
use crate::state::{FlowState, Geometry};
use serde::Serialize;

/// Fuel, coolant and reflector mass [kg].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MassBreakdown {
    pub fuel: f64,
    pub coolant: f64,
    pub reflector: f64,
    pub total: f64,
}

impl MassBreakdown {
    /// The reflector is an annulus out to 1.05 core radii, taken as
    /// `(r_o² - r_c²)·L·ρ` without the factor of π.
    pub fn compute(
        geometry: &Geometry,
        rho_fuel: f64,
        rho_coolant: f64,
        rho_reflector: f64,
    ) -> ChannelResult<Self> {
        let fuel = geometry.vol_fuel * rho_fuel;
        let coolant = geometry.vol_cool * rho_coolant;
        let r = geometry.core_r;
        let reflector = ((r * REFLECTOR_RADIUS_RATIO).powi(2) - r * r) * geometry.length * rho_reflector;
        let total = check_finite(fuel + coolant + reflector, "reactor mass")?;
        Ok(Self {
            fuel,
            coolant,
            reflector,
            total,
        })
    }
}

/// Attach the mass breakdown to a final state.
pub fn compute_mass(state: &FlowState) -> ChannelResult<FlowState> {
    let inputs = state.inputs();
    let mass = MassBreakdown::compute(
        &state.geometry,
        inputs.fuel().density()?,
        inputs.flow().rho,
        inputs.reflector().density()?,
    )?;
    Ok(FlowState {
        mass: Some(mass),
        ..state.clone()
    })
}
