//! Case file validation logic.

use crate::schema::{CASE_VERSION, CaseFile, RangeDef, SolverDef};
use cr_props::{Coolant, Material};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Unknown {field}: {key}")]
    UnknownKey { field: String, key: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > CASE_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let fuel = Material::from_key(&case.fuel).map_err(|_| unknown("fuel", &case.fuel))?;
    if !fuel.is_fuel() {
        return Err(invalid("fuel", &case.fuel, "material is not a fuel"));
    }
    Coolant::from_key(&case.coolant).map_err(|_| unknown("coolant", &case.coolant))?;
    Material::from_key(&case.cladding).map_err(|_| unknown("cladding", &case.cladding))?;
    Material::from_key(&case.reflector).map_err(|_| unknown("reflector", &case.reflector))?;

    positive("power_w", case.power_w)?;
    positive("channel_radius_m", case.channel_radius_m)?;
    positive("aspect_ratio", case.aspect_ratio)?;
    if !(case.clad_thickness_m >= 0.0) || !case.clad_thickness_m.is_finite() {
        return Err(invalid(
            "clad_thickness_m",
            case.clad_thickness_m,
            "must be non-negative",
        ));
    }

    let flow = &case.flow;
    positive("flow.mass_flow_kg_s", flow.mass_flow_kg_s)?;
    positive("flow.inlet_temperature_k", flow.inlet_temperature_k)?;
    positive("flow.outlet_temperature_k", flow.outlet_temperature_k)?;
    positive("flow.inlet_pressure_pa", flow.inlet_pressure_pa)?;
    positive("flow.outlet_pressure_pa", flow.outlet_pressure_pa)?;
    if flow.inlet_pressure_pa == flow.outlet_pressure_pa {
        return Err(invalid(
            "flow.outlet_pressure_pa",
            flow.outlet_pressure_pa,
            "must differ from inlet pressure",
        ));
    }

    if let Some(solver) = &case.solver {
        validate_solver(solver)?;
    }

    if let Some(sweep) = &case.sweep {
        validate_range("sweep.channel_radius_m", &sweep.channel_radius_m)?;
        validate_range("sweep.power_w", &sweep.power_w)?;
    }

    Ok(())
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    let (lo, hi) = solver.fuel_fraction_bounds;
    if !(lo > 0.0 && hi <= 1.0 && lo < hi) {
        return Err(invalid(
            "solver.fuel_fraction_bounds",
            format!("({lo}, {hi})"),
            "require 0 < lower < upper <= 1",
        ));
    }
    positive("solver.fuel_fraction_tol", solver.fuel_fraction_tol)?;
    positive("solver.power_rtol", solver.power_rtol)?;
    if solver.max_evaluations == 0 {
        return Err(invalid("solver.max_evaluations", 0, "must be at least 1"));
    }
    Ok(())
}

fn validate_range(field: &str, range: &RangeDef) -> Result<(), ValidationError> {
    positive(&format!("{field}.start"), range.start)?;
    positive(&format!("{field}.end"), range.end)?;
    if range.points == 0 {
        return Err(invalid(&format!("{field}.points"), 0, "must be at least 1"));
    }
    if range.points > 1 && range.start == range.end {
        return Err(invalid(
            field,
            range.start,
            "start and end must differ for more than one point",
        ));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn unknown(field: &str, key: &str) -> ValidationError {
    ValidationError::UnknownKey {
        field: field.to_string(),
        key: key.to_string(),
    }
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
