//! Bulk coolant flow conditions for one design point.

use crate::coolant::Coolant;
use crate::error::{PropsError, PropsResult};
use cr_core::numeric::ensure_positive;
use cr_core::units::{MassRate, Pressure, Temperature};
use tracing::warn;

/// Coolant state averaged axially across the core.
///
/// Secondary properties come from the coolant's linear fits evaluated at the
/// bulk (inlet/outlet mean) temperature. All fields are SI.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowProperties {
    pub coolant: Coolant,
    /// Mass flow rate [kg/s]
    pub m_dot: f64,
    /// Bulk coolant temperature [K]
    pub t_bulk: f64,
    /// Allowable core pressure drop set by the power cycle [Pa]
    pub dp_limit: f64,
    /// Thermal conductivity [W/m-K]
    pub k: f64,
    /// Dynamic viscosity [Pa·s]
    pub mu: f64,
    /// Density [kg/m³]
    pub rho: f64,
    /// Specific heat [J/kg-K]
    pub cp: f64,
    /// Prandtl number [-]
    pub pr: f64,
}

impl FlowProperties {
    /// Build flow properties from power-cycle boundary conditions.
    ///
    /// `temps` and `pressures` are (inlet, outlet) pairs. The pressure-drop
    /// limit is the absolute difference of the two pressures.
    pub fn new(
        coolant: Coolant,
        m_dot: MassRate,
        temps: (Temperature, Temperature),
        pressures: (Pressure, Pressure),
    ) -> PropsResult<Self> {
        let m_dot = ensure_positive(m_dot.value, "mass flow rate")
            .map_err(|_| PropsError::InvalidArg {
                what: "mass flow rate must be positive",
            })?;
        let t_bulk = (temps.0.value + temps.1.value) / 2.0;
        ensure_positive(t_bulk, "bulk temperature")?;
        let dp_limit = (pressures.1.value - pressures.0.value).abs();
        if dp_limit <= 0.0 || !dp_limit.is_finite() {
            return Err(PropsError::InvalidArg {
                what: "inlet and outlet pressure must differ",
            });
        }

        let fits = coolant.fits();
        if !fits.in_range(t_bulk) {
            warn!(
                coolant = coolant.key(),
                t_bulk,
                t_min = fits.t_limit.0,
                t_max = fits.t_limit.1,
                "bulk temperature outside property fit range"
            );
        }

        let k = ensure_positive(fits.k.eval(t_bulk), "coolant conductivity")?;
        let mu = ensure_positive(fits.mu.eval(t_bulk), "coolant viscosity")?;
        let rho = ensure_positive(fits.rho.eval(t_bulk), "coolant density")?;
        let cp = ensure_positive(fits.cp.eval(t_bulk), "coolant specific heat")?;

        Ok(Self {
            coolant,
            m_dot,
            t_bulk,
            dp_limit,
            k,
            mu,
            rho,
            cp,
            pr: cp * mu / k,
        })
    }

    /// Replace the allowable pressure drop.
    pub fn with_dp_limit(mut self, dp_limit: Pressure) -> PropsResult<Self> {
        self.dp_limit = ensure_positive(dp_limit.value, "pressure drop limit")?;
        Ok(self)
    }

    /// Replace the mass flow rate.
    pub fn with_mass_flow(mut self, m_dot: MassRate) -> PropsResult<Self> {
        self.m_dot = ensure_positive(m_dot.value, "mass flow rate")?;
        Ok(self)
    }
}
