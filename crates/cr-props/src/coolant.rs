//! Coolant definitions and temperature fits.
//!
//! Each coolant carries a linear fit `p(T) = a·T + b` for conductivity,
//! viscosity, density and specific heat, valid on a bounded temperature range
//! around the power-cycle operating point.

use crate::error::{PropsError, PropsResult};

/// Linear property fit `a·T + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub a: f64,
    pub b: f64,
}

impl LinearFit {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        self.a * t + self.b
    }
}

/// Supported coolants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coolant {
    /// Supercritical carbon dioxide
    CO2,
    /// Supercritical water
    H2O,
}

/// Fit coefficients for one coolant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolantFits {
    /// Validity range [K]
    pub t_limit: (f64, f64),
    /// Thermal conductivity [W/m-K]
    pub k: LinearFit,
    /// Dynamic viscosity [Pa·s]
    pub mu: LinearFit,
    /// Density [kg/m³]
    pub rho: LinearFit,
    /// Specific heat [J/kg-K]
    pub cp: LinearFit,
}

impl Coolant {
    pub const ALL: [Coolant; 2] = [Coolant::CO2, Coolant::H2O];

    pub fn key(&self) -> &'static str {
        match self {
            Coolant::CO2 => "CO2",
            Coolant::H2O => "H2O",
        }
    }

    pub fn from_key(key: &str) -> PropsResult<Self> {
        key.parse()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Coolant::CO2 => "Carbon Dioxide",
            Coolant::H2O => "Water",
        }
    }

    pub fn fits(&self) -> CoolantFits {
        match self {
            Coolant::H2O => CoolantFits {
                t_limit: (790.0, 1100.0),
                k: LinearFit::new(0.00015, 0.0010235),
                mu: LinearFit::new(3.4757e-8, 1.3711e-5),
                rho: LinearFit::new(-0.03012, 61.25238),
                cp: LinearFit::new(0.2526, 2343.3392),
            },
            Coolant::CO2 => CoolantFits {
                t_limit: (790.0, 1100.0),
                k: LinearFit::new(5.97036e-5, 0.0302958),
                mu: LinearFit::new(2.5034e-8, 2.4244e-5),
                rho: LinearFit::new(-0.062477, 134.47062),
                cp: LinearFit::new(0.14586, 1166.915214),
            },
        }
    }
}

impl CoolantFits {
    /// True if `t` lies inside the fit range (inclusive).
    pub fn in_range(&self, t: f64) -> bool {
        t >= self.t_limit.0 && t <= self.t_limit.1
    }
}

impl std::str::FromStr for Coolant {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Coolant::CO2),
            "H2O" | "WATER" => Ok(Coolant::H2O),
            _ => Err(PropsError::UnknownCoolant { key: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Coolant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
