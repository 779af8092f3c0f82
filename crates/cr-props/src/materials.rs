//! Solid material property table.
//!
//! Fuels carry a centerline temperature limit, conductivity and density.
//! Structural materials carry a surface roughness and/or density. Values are SI.

use crate::error::{PropsError, PropsResult};

/// Volume fraction of UN in the UN/W CERMET.
const UW_UN_FRACTION: f64 = 0.6;
const RHO_UN: f64 = 11_300.0;
const RHO_W: f64 = 19_300.0;

/// Materials known to the design model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Uranium nitride in a tungsten matrix (CERMET fuel)
    UW,
    /// Uranium dioxide fuel
    UO2,
    /// Inconel-718 cladding
    Inconel718,
    /// Graphite reflector
    Carbon,
}

/// Raw property record for one material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProps {
    /// Maximum fuel centerline temperature [K]
    pub t_center: Option<f64>,
    /// Thermal conductivity [W/m-K]
    pub k: Option<f64>,
    /// Density [kg/m³]
    pub rho: Option<f64>,
    /// Absolute surface roughness [m]
    pub roughness: Option<f64>,
}

impl Material {
    pub const ALL: [Material; 4] = [
        Material::UW,
        Material::UO2,
        Material::Inconel718,
        Material::Carbon,
    ];

    /// Fuels supported by the criticality fits.
    pub const FUELS: [Material; 2] = [Material::UW, Material::UO2];

    pub fn key(&self) -> &'static str {
        match self {
            Material::UW => "UW",
            Material::UO2 => "UO2",
            Material::Inconel718 => "Inconel-718",
            Material::Carbon => "Carbon",
        }
    }

    /// Look up a material by key, failing on unknown keys.
    pub fn from_key(key: &str) -> PropsResult<Self> {
        key.parse()
    }

    pub fn is_fuel(&self) -> bool {
        self.props().t_center.is_some()
    }

    pub fn props(&self) -> MaterialProps {
        match self {
            Material::UW => MaterialProps {
                t_center: Some(1847.5),
                k: Some(51.0),
                rho: Some(UW_UN_FRACTION * RHO_UN + (1.0 - UW_UN_FRACTION) * RHO_W),
                roughness: None,
            },
            Material::UO2 => MaterialProps {
                t_center: Some(1705.65),
                k: Some(3.6),
                rho: Some(10_970.0),
                roughness: None,
            },
            Material::Inconel718 => MaterialProps {
                t_center: None,
                k: None,
                rho: Some(8190.0),
                roughness: Some(1.5e-6),
            },
            Material::Carbon => MaterialProps {
                t_center: None,
                k: None,
                rho: Some(1700.0),
                roughness: None,
            },
        }
    }

    /// Fuel centerline temperature limit [K].
    pub fn centerline_temperature(&self) -> PropsResult<f64> {
        self.props().t_center.ok_or_else(|| self.missing("centerline temperature"))
    }

    /// Thermal conductivity [W/m-K].
    pub fn conductivity(&self) -> PropsResult<f64> {
        self.props().k.ok_or_else(|| self.missing("thermal conductivity"))
    }

    /// Density [kg/m³].
    pub fn density(&self) -> PropsResult<f64> {
        self.props().rho.ok_or_else(|| self.missing("density"))
    }

    /// Absolute surface roughness [m].
    pub fn roughness(&self) -> PropsResult<f64> {
        self.props().roughness.ok_or_else(|| self.missing("surface roughness"))
    }

    fn missing(&self, what: &'static str) -> PropsError {
        PropsError::MissingProperty {
            material: self.key(),
            what,
        }
    }
}

impl std::str::FromStr for Material {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "UW" | "UN-W" => Ok(Material::UW),
            "UO2" => Ok(Material::UO2),
            "INCONEL-718" | "INCONEL718" | "IN718" => Ok(Material::Inconel718),
            "CARBON" | "GRAPHITE" | "C" => Ok(Material::Carbon),
            _ => Err(PropsError::UnknownMaterial { key: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip() {
        for mat in Material::ALL {
            assert_eq!(Material::from_key(mat.key()).unwrap(), mat);
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = Material::from_key("PuO2").unwrap_err();
        assert_eq!(
            err,
            PropsError::UnknownMaterial {
                key: "PuO2".to_string()
            }
        );
    }

    #[test]
    fn cermet_density_is_volume_weighted() {
        let rho = Material::UW.density().unwrap();
        assert!((rho - 14_500.0).abs() < 1e-9);
    }

    #[test]
    fn fuel_values() {
        assert_eq!(Material::UW.centerline_temperature().unwrap(), 1847.5);
        assert_eq!(Material::UW.conductivity().unwrap(), 51.0);
        assert_eq!(Material::UO2.centerline_temperature().unwrap(), 1705.65);
        assert_eq!(Material::UO2.conductivity().unwrap(), 3.6);
        assert_eq!(Material::UO2.density().unwrap(), 10_970.0);
    }

    #[test]
    fn role_mismatch_reports_missing_property() {
        assert!(Material::UW.roughness().is_err());
        assert!(matches!(
            Material::Carbon.centerline_temperature(),
            Err(PropsError::MissingProperty {
                material: "Carbon",
                ..
            })
        ));
        assert_eq!(Material::Inconel718.roughness().unwrap(), 1.5e-6);
    }

    #[test]
    fn only_fuels_are_fuels() {
        assert!(Material::UW.is_fuel());
        assert!(Material::UO2.is_fuel());
        assert!(!Material::Inconel718.is_fuel());
        assert!(!Material::Carbon.is_fuel());
    }
}
