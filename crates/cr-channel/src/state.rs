//! The design-point state value.
//!
//! A `FlowState` is never mutated in place. Each stage (geometry, flow,
//! thermal, pressure, mass) takes a state by reference and returns a new one,
//! so callers always hold explicit before/after snapshots.

use crate::error::{ChannelError, ChannelResult};
use crate::inputs::DesignInputs;
use crate::mass::MassBreakdown;
use serde::Serialize;

/// Fuel fraction a fresh state starts from.
pub const INITIAL_FUEL_FRACTION: f64 = 0.75;

/// Core radius [m] a fresh state starts from.
pub const INITIAL_CORE_RADIUS: f64 = 1.0;

/// Derived core and channel geometry. All SI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Geometry {
    /// Core radius [m]
    pub core_r: f64,
    /// Core cross-section [m²]
    pub a_core: f64,
    /// Total coolant flow area [m²]
    pub a_flow: f64,
    /// Total fuel area [m²]
    pub a_fuel: f64,
    /// Channel (core) length [m]
    pub length: f64,
    /// Length over hydraulic diameter [-]
    pub ld: f64,
    /// Fuel volume [m³]
    pub vol_fuel: f64,
    /// Coolant volume [m³]
    pub vol_cool: f64,
    /// Number of coolant channels, real-valued [-]
    pub n_channels: f64,
    /// Conduction path length from fuel to channel wall [m]
    pub r_cond: f64,
    /// Total conduction surface area [m²]
    pub a_cond: f64,
    /// Hydraulic diameter [m]
    pub d_h: f64,
}

/// Flow characterization results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Hydraulics {
    pub relrough: f64,
    /// Mass flux [kg/m²-s]
    pub mass_flux: f64,
    /// [m/s]
    pub velocity: f64,
    pub re: f64,
    /// Darcy friction factor
    pub f: f64,
    /// Constant wall temperature Nusselt number
    pub nu: f64,
    /// Constant heat flux Nusselt number
    pub nu_h: f64,
    /// Heat transfer coefficient [W/m²-K]
    pub h: f64,
}

/// Thermal resistance network and achievable generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Thermal {
    /// Fuel conduction resistance [K/W]
    pub r_cond: f64,
    /// Wall-to-coolant convection resistance [K/W]
    pub r_conv: f64,
    /// Centerline-to-bulk temperature drop [K]
    pub dt: f64,
    /// Peak (centerline) heat rate [W]
    pub q_peak: f64,
    /// Axially averaged core generation [W]
    pub generation: f64,
    /// Volumetric generation in the fuel [W/m³]
    pub volumetric: f64,
}

/// One candidate design.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowState {
    pub(crate) inputs: DesignInputs,
    pub(crate) fuel_frac: f64,
    pub(crate) geometry: Geometry,
    pub(crate) hydraulics: Hydraulics,
    pub(crate) thermal: Thermal,
    pub(crate) dp: f64,
    pub(crate) mass: Option<MassBreakdown>,
}

impl FlowState {
    /// Fresh state: initial fuel fraction and core radius, nothing derived.
    pub fn new(inputs: DesignInputs) -> Self {
        Self {
            inputs,
            fuel_frac: INITIAL_FUEL_FRACTION,
            geometry: Geometry {
                core_r: INITIAL_CORE_RADIUS,
                ..Geometry::default()
            },
            hydraulics: Hydraulics::default(),
            thermal: Thermal::default(),
            dp: 0.0,
            mass: None,
        }
    }

    /// Set fuel fraction and core radius, clearing all derived results.
    pub fn with_fraction(&self, fuel_frac: f64, core_r: f64) -> ChannelResult<Self> {
        if !(fuel_frac > 0.0 && fuel_frac < 1.0) {
            return Err(ChannelError::Domain {
                what: "fuel fraction",
                value: fuel_frac,
            });
        }
        if !(core_r > 0.0) || !core_r.is_finite() {
            return Err(ChannelError::Domain {
                what: "core radius",
                value: core_r,
            });
        }
        Ok(Self {
            fuel_frac,
            geometry: Geometry {
                core_r,
                ..Geometry::default()
            },
            ..Self::new(self.inputs.clone())
        })
    }

    pub fn inputs(&self) -> &DesignInputs {
        &self.inputs
    }

    pub fn fuel_frac(&self) -> f64 {
        self.fuel_frac
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn hydraulics(&self) -> &Hydraulics {
        &self.hydraulics
    }

    pub fn thermal(&self) -> &Thermal {
        &self.thermal
    }

    /// Channel pressure drop [Pa]
    pub fn dp(&self) -> f64 {
        self.dp
    }

    pub fn mass(&self) -> Option<&MassBreakdown> {
        self.mass.as_ref()
    }

    /// Whole number of channels (real-valued count rounded up).
    pub fn channel_count(&self) -> u64 {
        self.geometry.n_channels.ceil().max(0.0) as u64
    }

    /// Generation per whole channel [W].
    pub fn generation_per_channel(&self) -> f64 {
        match self.channel_count() {
            0 => 0.0,
            n => self.thermal.generation / n as f64,
        }
    }

    /// Achievable generation minus target power [W].
    pub fn generation_error(&self) -> f64 {
        self.thermal.generation - self.inputs.power()
    }
}
