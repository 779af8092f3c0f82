//! Critical core radius as a power law in fuel fraction.

use crate::common::check_positive;
use crate::error::{ChannelError, ChannelResult};
use cr_props::{Coolant, Material};

/// Power-law fit `r_core = a · fuel_frac^b` from criticality calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalityFit {
    pub a: f64,
    pub b: f64,
}

impl CriticalityFit {
    /// Coefficients for a (fuel, coolant) pair.
    pub fn lookup(fuel: Material, coolant: Coolant) -> ChannelResult<Self> {
        let (a, b) = match (fuel, coolant) {
            (Material::UO2, Coolant::CO2) => (0.16271, -0.8515),
            (Material::UO2, Coolant::H2O) => (0.1706, -0.61361),
            (Material::UW, Coolant::CO2) => (0.15385, -0.8309),
            (Material::UW, Coolant::H2O) => (0.16270, -0.6487),
            _ => {
                return Err(ChannelError::UnsupportedPair {
                    fuel: fuel.key().to_string(),
                    coolant: coolant.key().to_string(),
                });
            }
        };
        Ok(Self { a, b })
    }

    pub fn radius(&self, fuel_frac: f64) -> f64 {
        self.a * fuel_frac.powf(self.b)
    }
}

/// Minimum critical core radius [m] for a fuel fraction.
pub fn constrain_radius(fuel: Material, coolant: Coolant, fuel_frac: f64) -> ChannelResult<f64> {
    let fit = CriticalityFit::lookup(fuel, coolant)?;
    check_positive(fuel_frac, "fuel fraction")?;
    check_positive(fit.radius(fuel_frac), "core radius")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_fraction_returns_prefactor() {
        for fuel in Material::FUELS {
            for coolant in Coolant::ALL {
                let fit = CriticalityFit::lookup(fuel, coolant).unwrap();
                assert_eq!(constrain_radius(fuel, coolant, 1.0).unwrap(), fit.a);
            }
        }
    }

    #[test]
    fn known_value() {
        let r = constrain_radius(Material::UW, Coolant::CO2, 0.5).unwrap();
        assert!((r - 0.15385 * 0.5_f64.powf(-0.8309)).abs() < 1e-15);
    }

    #[test]
    fn radius_grows_as_fuel_is_diluted() {
        let dense = constrain_radius(Material::UO2, Coolant::H2O, 0.9).unwrap();
        let sparse = constrain_radius(Material::UO2, Coolant::H2O, 0.2).unwrap();
        assert!(sparse > dense);
    }

    #[test]
    fn unsupported_pair_is_fatal() {
        let err = constrain_radius(Material::Carbon, Coolant::CO2, 0.5).unwrap_err();
        assert_eq!(
            err,
            ChannelError::UnsupportedPair {
                fuel: "Carbon".into(),
                coolant: "CO2".into()
            }
        );
    }

    #[test]
    fn zero_fraction_is_domain_error() {
        assert!(matches!(
            constrain_radius(Material::UW, Coolant::CO2, 0.0),
            Err(ChannelError::Domain { .. })
        ));
    }
}
