//! cr-project: design case file format, validation and conversion to solver inputs.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_case};

use cr_channel::{ChannelError, DesignInputs};
use cr_core::units::{k, kgps, m, pa, w};
use cr_props::{Coolant, FlowProperties, Material, PropsError};
use cr_solver::{BoundedConfig, DesignConfig, linspace};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Property error: {0}")]
    Props(#[from] PropsError),

    #[error("Design input error: {0}")]
    Channel(#[from] ChannelError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let case: CaseFile = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &CaseFile) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let case: CaseFile = serde_json::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &CaseFile) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a case, choosing the format from the file extension (JSON for
/// `.json`, YAML otherwise).
pub fn load_case(path: &std::path::Path) -> ProjectResult<CaseFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

impl CaseFile {
    pub fn flow_properties(&self) -> ProjectResult<FlowProperties> {
        let f = &self.flow;
        Ok(FlowProperties::new(
            Coolant::from_key(&self.coolant)?,
            kgps(f.mass_flow_kg_s),
            (k(f.inlet_temperature_k), k(f.outlet_temperature_k)),
            (pa(f.inlet_pressure_pa), pa(f.outlet_pressure_pa)),
        )?)
    }

    pub fn design_inputs(&self) -> ProjectResult<DesignInputs> {
        let inputs = DesignInputs::new(
            m(self.channel_radius_m),
            m(self.clad_thickness_m),
            self.aspect_ratio,
            w(self.power_w),
            Material::from_key(&self.fuel)?,
            self.flow_properties()?,
        )?
        .with_cladding(Material::from_key(&self.cladding)?)?
        .with_reflector(Material::from_key(&self.reflector)?)?;
        Ok(inputs)
    }

    pub fn design_config(&self) -> DesignConfig {
        let solver = self.solver.clone().unwrap_or_default();
        DesignConfig {
            bounds: solver.fuel_fraction_bounds,
            minimizer: BoundedConfig {
                xatol: solver.fuel_fraction_tol,
                max_evaluations: solver.max_evaluations,
            },
            max_pressure_iterations: solver.max_pressure_iterations,
            power_rtol: solver.power_rtol,
        }
    }

    /// Channel radii and powers of the sweep section, if present.
    pub fn sweep_axes(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        self.sweep.as_ref().map(|s| {
            let r = &s.channel_radius_m;
            let q = &s.power_w;
            (
                linspace(r.start, r.end, r.points),
                linspace(q.start, q.end, q.points),
            )
        })
    }
}
