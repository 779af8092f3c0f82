//! Parametric design sweeps.
//!
//! Every point owns its own inputs and state, so points are evaluated in
//! parallel with rayon. A failing point is recorded, not propagated.

use crate::design::{Design, DesignConfig, design_reactor, finish_state};
use crate::error::{SolverError, SolverResult};
use cr_channel::{DesignInputs, FlowState, evaluate_fraction};
use cr_core::units::{m, w};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

/// One evaluated sweep point.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    /// Channel radius [m]
    pub channel_radius: f64,
    /// Target thermal power [W]
    pub power: f64,
    /// Fuel fraction, when fixed by the sweep
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_frac: Option<f64>,
    pub design: Option<Design>,
    pub error: Option<String>,
}

impl SweepPoint {
    fn new(
        channel_radius: f64,
        power: f64,
        fuel_frac: Option<f64>,
        result: SolverResult<Design>,
    ) -> Self {
        let (design, error) = match result {
            Ok(d) => (Some(d), None),
            Err(e) => {
                warn!(channel_radius, power, error = %e, "sweep point failed");
                (None, Some(e.to_string()))
            }
        };
        Self {
            channel_radius,
            power,
            fuel_frac,
            design,
            error,
        }
    }
}

/// Result of a sweep.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    pub fn num_successful(&self) -> usize {
        self.points.iter().filter(|p| p.design.is_some()).count()
    }

    pub fn num_failed(&self) -> usize {
        self.points.len() - self.num_successful()
    }

    /// Lowest-mass successful point.
    pub fn min_mass(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .filter(|p| p.design.is_some())
            .min_by(|a, b| mass_of(a).total_cmp(&mass_of(b)))
    }
}

fn mass_of(p: &SweepPoint) -> f64 {
    p.design.as_ref().map_or(f64::INFINITY, |d| d.mass.total)
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Full design for every (channel radius, power) pair.
pub fn sweep_designs(
    base: &DesignInputs,
    radii: &[f64],
    powers: &[f64],
    config: &DesignConfig,
) -> SweepReport {
    let grid: Vec<(f64, f64)> = radii
        .iter()
        .flat_map(|&r| powers.iter().map(move |&q| (r, q)))
        .collect();
    debug!(points = grid.len(), "design sweep");

    let points = grid
        .par_iter()
        .map(|&(r, q)| {
            let result = base
                .clone()
                .with_channel_radius(m(r))
                .and_then(|inp| inp.with_power(w(q)))
                .map_err(SolverError::from)
                .and_then(|inp| design_reactor(inp, config));
            SweepPoint::new(r, q, None, result)
        })
        .collect();

    SweepReport { points }
}

/// Pressure-constrained design at each fixed fuel fraction, without the
/// power-matching search.
pub fn sweep_fuel_fraction(
    inputs: &DesignInputs,
    fractions: &[f64],
    config: &DesignConfig,
) -> SweepReport {
    let base = FlowState::new(inputs.clone());
    let points = fractions
        .par_iter()
        .map(|&ff| {
            let result = evaluate_fraction(&base, ff)
                .map_err(SolverError::from)
                .and_then(|state| finish_state(&state, config));
            SweepPoint::new(inputs.channel_radius(), inputs.power(), Some(ff), result)
        })
        .collect();

    SweepReport { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());
    }

    #[test]
    fn empty_report() {
        let report = SweepReport::default();
        assert!(report.min_mass().is_none());
        assert_eq!(report.num_failed(), 0);
    }
}
