//! Design case file schema.

use serde::{Deserialize, Serialize};

pub const CASE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    /// Fuel material key
    pub fuel: String,
    /// Coolant key
    pub coolant: String,
    #[serde(default = "default_cladding")]
    pub cladding: String,
    #[serde(default = "default_reflector")]
    pub reflector: String,
    pub power_w: f64,
    #[serde(default = "default_channel_radius")]
    pub channel_radius_m: f64,
    #[serde(default = "default_clad_thickness")]
    pub clad_thickness_m: f64,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    pub flow: FlowDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    pub mass_flow_kg_s: f64,
    pub inlet_temperature_k: f64,
    pub outlet_temperature_k: f64,
    pub inlet_pressure_pa: f64,
    pub outlet_pressure_pa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverDef {
    pub fuel_fraction_bounds: (f64, f64),
    pub fuel_fraction_tol: f64,
    pub max_evaluations: usize,
    pub max_pressure_iterations: usize,
    /// Relative power mismatch tolerated when the search ends on a bound
    pub power_rtol: f64,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            fuel_fraction_bounds: (0.01, 1.0),
            fuel_fraction_tol: 1e-3,
            max_evaluations: 500,
            max_pressure_iterations: 100,
            power_rtol: cr_solver::DEFAULT_POWER_RTOL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub channel_radius_m: RangeDef,
    pub power_w: RangeDef,
}

/// Inclusive, evenly spaced range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RangeDef {
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

impl FlowDef {
    /// The reference supercritical CO2 cycle state point.
    pub fn co2_reference() -> Self {
        Self {
            mass_flow_kg_s: 1.0,
            inlet_temperature_k: 900.0,
            outlet_temperature_k: 1000.0,
            inlet_pressure_pa: 17.9e6,
            outlet_pressure_pa: 17.4e6,
        }
    }
}

impl CaseFile {
    /// A UW/CO2 case at default geometry.
    pub fn baseline(name: impl Into<String>, power_w: f64) -> Self {
        Self {
            version: CASE_VERSION,
            name: name.into(),
            fuel: "UW".to_string(),
            coolant: "CO2".to_string(),
            cladding: default_cladding(),
            reflector: default_reflector(),
            power_w,
            channel_radius_m: default_channel_radius(),
            clad_thickness_m: default_clad_thickness(),
            aspect_ratio: default_aspect_ratio(),
            flow: FlowDef::co2_reference(),
            solver: None,
            sweep: None,
        }
    }
}

fn default_cladding() -> String {
    "Inconel-718".to_string()
}

fn default_reflector() -> String {
    "Carbon".to_string()
}

fn default_channel_radius() -> f64 {
    cr_solver::DEFAULT_CHANNEL_RADIUS
}

fn default_clad_thickness() -> f64 {
    cr_solver::DEFAULT_CLAD_THICKNESS
}

fn default_aspect_ratio() -> f64 {
    cr_solver::DEFAULT_ASPECT_RATIO
}
