//! Outer fuel-fraction search and the full design pipeline.

use crate::bounded::{BoundedConfig, minimize_bounded};
use crate::error::{SolverError, SolverResult};
use crate::pressure_loop::{DEFAULT_MAX_PRESSURE_ITERATIONS, adjust_dp};
use cr_channel::{
    ChannelError, DesignInputs, FlowState, Geometry, Hydraulics, MassBreakdown, OutputField, Thermal,
    compute_mass, evaluate_fraction, with_channel_count,
};
use cr_core::units::{MassRate, Power, Pressure, Temperature, m};
use cr_props::{Coolant, FlowProperties, Material};
use serde::Serialize;
use tracing::{debug, info};

/// Default coolant channel radius [m].
pub const DEFAULT_CHANNEL_RADIUS: f64 = 0.005;
/// Default cladding thickness [m].
pub const DEFAULT_CLAD_THICKNESS: f64 = 0.00031;
/// Default core aspect ratio [-].
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;
/// Default relative generation tolerance for a bound-limited search.
pub const DEFAULT_POWER_RTOL: f64 = 0.05;

/// Design solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConfig {
    /// Fuel fraction search interval
    pub bounds: (f64, f64),
    /// Minimizer tolerance and evaluation limit
    pub minimizer: BoundedConfig,
    /// Pressure loop iteration ceiling
    pub max_pressure_iterations: usize,
    /// Relative generation error beyond which a search that ends on a bound
    /// is reported as unmatched
    pub power_rtol: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            bounds: (0.01, 1.0),
            minimizer: BoundedConfig::default(),
            max_pressure_iterations: DEFAULT_MAX_PRESSURE_ITERATIONS,
            power_rtol: DEFAULT_POWER_RTOL,
        }
    }
}

impl DesignConfig {
    pub fn validate(&self) -> SolverResult<()> {
        let (lo, hi) = self.bounds;
        if !(lo > 0.0 && hi <= 1.0 && lo < hi) {
            return Err(SolverError::InvalidConfig {
                what: "fuel fraction bounds must satisfy 0 < lower < upper <= 1",
            });
        }
        if !(self.power_rtol > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "power tolerance must be positive",
            });
        }
        Ok(())
    }

    /// True if `x` lies within the minimizer's resolution of a search bound.
    fn on_bound(&self, x: f64) -> bool {
        let (lo, hi) = self.bounds;
        [lo, hi].iter().any(|&b| {
            let resolution = 4.0 * (f64::EPSILON.sqrt() * b.abs() + self.minimizer.xatol / 3.0);
            (x - b).abs() <= resolution
        })
    }
}

/// Power-matched state from the fuel fraction search.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerMatch {
    /// State re-evaluated at the best fuel fraction
    pub state: FlowState,
    /// Squared generation error at the best fuel fraction [W²]
    pub squared_error: f64,
    pub evaluations: usize,
}

/// Squared difference between achievable generation and target power at a
/// trial fuel fraction.
pub fn generation_objective(state: &FlowState, fuel_frac: f64) -> SolverResult<f64> {
    let trial = evaluate_fraction(state, fuel_frac)?;
    let err = trial.generation_error();
    debug!(
        fuel_frac,
        core_r = trial.geometry().core_r,
        n_channels = trial.geometry().n_channels,
        generation = trial.thermal().generation,
        "fuel fraction trial"
    );
    Ok(err * err)
}

/// Find the fuel fraction whose achievable generation matches the target power.
pub fn solve_channel_count(state: &FlowState, config: &DesignConfig) -> SolverResult<PowerMatch> {
    config.validate()?;
    let res = minimize_bounded(
        |x| generation_objective(state, x),
        config.bounds,
        &config.minimizer,
    )?;
    let best = evaluate_fraction(state, res.x)?;

    // The target lies outside what the bracket can deliver.
    let target = state.inputs().power();
    let rel = best.generation_error() / target;
    if config.on_bound(res.x) && rel.abs() > config.power_rtol {
        return Err(SolverError::PowerNotMatched {
            fuel_frac: res.x,
            generation: best.thermal().generation,
            target,
        });
    }

    Ok(PowerMatch {
        squared_error: best.generation_error().powi(2),
        state: best,
        evaluations: res.evaluations,
    })
}

/// A finished design: power matched, pressure constrained, mass computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Design {
    pub fuel: &'static str,
    pub coolant: &'static str,
    /// Target thermal power [W]
    pub power: f64,
    /// Achievable generation at the power-matching point [W]
    pub generation: f64,
    pub channel_radius: f64,
    pub clad_thickness: f64,
    pub aspect_ratio: f64,
    pub fuel_frac: f64,
    pub core_r: f64,
    pub channel_count: u64,
    pub dp: f64,
    pub dp_limit: f64,
    pub h: f64,
    pub per_channel: f64,
    pub volumetric: f64,
    pub velocity: f64,
    pub re: f64,
    pub mass: MassBreakdown,
    pub evaluations: usize,
    pub pressure_iterations: usize,
    pub geometry: Geometry,
    pub hydraulics: Hydraulics,
    pub thermal: Thermal,
    #[serde(skip)]
    state: FlowState,
}

impl Design {
    fn from_state(
        state: FlowState,
        mass: MassBreakdown,
        evaluations: usize,
        pressure_iterations: usize,
    ) -> Self {
        let inputs = state.inputs();
        Self {
            fuel: inputs.fuel().key(),
            coolant: inputs.coolant().key(),
            power: inputs.power(),
            generation: state.thermal().generation,
            channel_radius: inputs.channel_radius(),
            clad_thickness: inputs.clad_thickness(),
            aspect_ratio: inputs.aspect_ratio(),
            fuel_frac: state.fuel_frac(),
            core_r: state.geometry().core_r,
            channel_count: state.channel_count(),
            dp: state.dp(),
            dp_limit: inputs.flow().dp_limit,
            h: state.hydraulics().h,
            per_channel: state.generation_per_channel(),
            volumetric: state.thermal().volumetric,
            velocity: state.hydraulics().velocity,
            re: state.hydraulics().re,
            mass,
            evaluations,
            pressure_iterations,
            geometry: *state.geometry(),
            hydraulics: *state.hydraulics(),
            thermal: *state.thermal(),
            state,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Reported value of an output field.
    pub fn field(&self, field: OutputField) -> f64 {
        match field {
            OutputField::Mass => self.mass.total,
            OutputField::ChannelCount => self.channel_count as f64,
            OutputField::PressureDrop => self.dp,
            OutputField::HeatTransferCoefficient => self.h,
            OutputField::GenerationPerChannel => self.per_channel,
            OutputField::VolumetricGeneration => self.volumetric,
            OutputField::Velocity => self.velocity,
            OutputField::AspectRatio => self.aspect_ratio,
        }
    }
}

/// Power-match the design, enforce the pressure limit, then compute mass.
pub fn design_reactor(inputs: DesignInputs, config: &DesignConfig) -> SolverResult<Design> {
    let initial = FlowState::new(inputs);
    let matched = solve_channel_count(&initial, config)?;
    let whole = round_up_channels(&matched.state)?;
    let pressure = adjust_dp(&whole, config.max_pressure_iterations)?;
    finish(pressure.state, matched.evaluations, pressure.iterations)
}

/// Pressure loop and mass for an already evaluated state.
pub fn finish_state(state: &FlowState, config: &DesignConfig) -> SolverResult<Design> {
    let whole = round_up_channels(state)?;
    let pressure = adjust_dp(&whole, config.max_pressure_iterations)?;
    finish(pressure.state, 0, pressure.iterations)
}

/// Re-derive flow at the whole channel count a built core has.
///
/// Rounding up lowers the channel velocity; the pressure loop that follows
/// still checks the limit.
fn round_up_channels(state: &FlowState) -> SolverResult<FlowState> {
    let n = state.geometry().n_channels.ceil();
    Ok(with_channel_count(state, n)?)
}

fn finish(state: FlowState, evaluations: usize, pressure_iterations: usize) -> SolverResult<Design> {
    let state = compute_mass(&state)?;
    let mass = state
        .mass()
        .copied()
        .ok_or(ChannelError::NonPhysical { what: "reactor mass" })?;

    let design = Design::from_state(state, mass, evaluations, pressure_iterations);
    info!(
        fuel = design.fuel,
        coolant = design.coolant,
        power = design.power,
        fuel_frac = design.fuel_frac,
        channels = design.channel_count,
        dp = design.dp,
        mass = design.mass.total,
        evaluations,
        pressure_iterations,
        "design converged"
    );
    Ok(design)
}

/// Total reactor mass [kg] for a fuel/coolant pair at default geometry.
pub fn reactor_mass(
    fuel: Material,
    coolant: Coolant,
    power: Power,
    m_dot: MassRate,
    temps: (Temperature, Temperature),
    pressures: (Pressure, Pressure),
) -> SolverResult<f64> {
    let flow = FlowProperties::new(coolant, m_dot, temps, pressures)?;
    let inputs = DesignInputs::new(
        m(DEFAULT_CHANNEL_RADIUS),
        m(DEFAULT_CLAD_THICKNESS),
        DEFAULT_ASPECT_RATIO,
        power,
        fuel,
        flow,
    )?;
    Ok(design_reactor(inputs, &DesignConfig::default())?.mass.total)
}
