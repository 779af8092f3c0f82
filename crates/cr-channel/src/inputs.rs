//! Design-point inputs: geometry guess, power target and material selection.

use crate::criticality::CriticalityFit;
use crate::error::{ChannelError, ChannelResult};
use cr_core::units::{Length, Power};
use cr_props::{Coolant, FlowProperties, Material};

/// Everything a design point is solved against.
///
/// Built once per design and shared by every trial state. Geometry values
/// are SI (metres); `power` is the target thermal power in watts.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignInputs {
    channel_radius: f64,
    clad_thickness: f64,
    aspect_ratio: f64,
    power: f64,
    fuel: Material,
    clad: Material,
    reflector: Material,
    flow: FlowProperties,
}

impl DesignInputs {
    /// Create design inputs with Inconel-718 cladding and a graphite reflector.
    ///
    /// The coolant is taken from `flow`. Fails if a geometry value or the
    /// power is non-positive, if `fuel` is not a fuel, or if no criticality
    /// fit exists for the fuel/coolant pair.
    pub fn new(
        channel_radius: Length,
        clad_thickness: Length,
        aspect_ratio: f64,
        power: Power,
        fuel: Material,
        flow: FlowProperties,
    ) -> ChannelResult<Self> {
        Self {
            channel_radius: channel_radius.value,
            clad_thickness: clad_thickness.value,
            aspect_ratio,
            power: power.value,
            fuel,
            clad: Material::Inconel718,
            reflector: Material::Carbon,
            flow,
        }
        .validated()
    }

    /// Create design inputs from material and coolant keys.
    ///
    /// `coolant_key` must name the same coolant the flow properties were
    /// evaluated for.
    pub fn from_keys(
        channel_radius: Length,
        clad_thickness: Length,
        aspect_ratio: f64,
        power: Power,
        fuel_key: &str,
        coolant_key: &str,
        flow: FlowProperties,
    ) -> ChannelResult<Self> {
        let fuel = Material::from_key(fuel_key)?;
        let coolant = Coolant::from_key(coolant_key)?;
        if coolant != flow.coolant {
            return Err(ChannelError::InvalidArg {
                what: "coolant key does not match flow properties",
            });
        }
        Self::new(channel_radius, clad_thickness, aspect_ratio, power, fuel, flow)
    }

    fn validated(self) -> ChannelResult<Self> {
        positive(self.channel_radius, "channel radius must be positive")?;
        if !(self.clad_thickness >= 0.0) || !self.clad_thickness.is_finite() {
            return Err(ChannelError::InvalidArg {
                what: "cladding thickness must be non-negative",
            });
        }
        positive(self.aspect_ratio, "aspect ratio must be positive")?;
        positive(self.power, "thermal power must be positive")?;

        if !self.fuel.is_fuel() {
            return Err(ChannelError::InvalidRole {
                material: self.fuel.key(),
                role: "fuel",
            });
        }
        if self.clad.props().roughness.is_none() {
            return Err(ChannelError::InvalidRole {
                material: self.clad.key(),
                role: "cladding",
            });
        }
        if self.reflector.props().rho.is_none() {
            return Err(ChannelError::InvalidRole {
                material: self.reflector.key(),
                role: "reflector",
            });
        }
        CriticalityFit::lookup(self.fuel, self.flow.coolant)?;

        if self.temperature_drop()? <= 0.0 {
            return Err(ChannelError::InvalidArg {
                what: "fuel centerline temperature must exceed coolant bulk temperature",
            });
        }
        Ok(self)
    }

    pub fn with_cladding(mut self, clad: Material) -> ChannelResult<Self> {
        self.clad = clad;
        self.validated()
    }

    pub fn with_reflector(mut self, reflector: Material) -> ChannelResult<Self> {
        self.reflector = reflector;
        self.validated()
    }

    pub fn with_channel_radius(mut self, channel_radius: Length) -> ChannelResult<Self> {
        self.channel_radius = channel_radius.value;
        self.validated()
    }

    pub fn with_power(mut self, power: Power) -> ChannelResult<Self> {
        self.power = power.value;
        self.validated()
    }

    pub fn with_flow(mut self, flow: FlowProperties) -> ChannelResult<Self> {
        self.flow = flow;
        self.validated()
    }

    /// Coolant channel radius [m]
    pub fn channel_radius(&self) -> f64 {
        self.channel_radius
    }

    /// Cladding thickness [m]; carried for reporting, not used by the channel model.
    pub fn clad_thickness(&self) -> f64 {
        self.clad_thickness
    }

    /// Core length over core radius [-]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Target thermal power [W]
    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn fuel(&self) -> Material {
        self.fuel
    }

    pub fn coolant(&self) -> Coolant {
        self.flow.coolant
    }

    pub fn clad(&self) -> Material {
        self.clad
    }

    pub fn reflector(&self) -> Material {
        self.reflector
    }

    pub fn flow(&self) -> &FlowProperties {
        &self.flow
    }

    /// Fuel centerline to coolant bulk temperature difference [K].
    pub fn temperature_drop(&self) -> ChannelResult<f64> {
        Ok(self.fuel.centerline_temperature()? - self.flow.t_bulk)
    }
}

fn positive(value: f64, what: &'static str) -> ChannelResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ChannelError::InvalidArg { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cr_core::units::{k, kgps, m, pa, w};

    fn flow(coolant: Coolant) -> FlowProperties {
        FlowProperties::new(
            coolant,
            kgps(1.0),
            (k(900.0), k(1000.0)),
            (pa(17.9e6), pa(17.4e6)),
        )
        .unwrap()
    }

    fn inputs() -> DesignInputs {
        DesignInputs::new(
            m(0.005),
            m(0.00031),
            1.0,
            w(1.0e5),
            Material::UW,
            flow(Coolant::CO2),
        )
        .unwrap()
    }

    #[test]
    fn defaults_and_accessors() {
        let inp = inputs();
        assert_eq!(inp.clad(), Material::Inconel718);
        assert_eq!(inp.reflector(), Material::Carbon);
        assert_eq!(inp.coolant(), Coolant::CO2);
        assert_eq!(inp.channel_radius(), 0.005);
        assert!((inp.temperature_drop().unwrap() - 897.5).abs() < 1e-12);
    }

    #[test]
    fn from_keys_matches_new() {
        let a = DesignInputs::from_keys(
            m(0.005),
            m(0.00031),
            1.0,
            w(1.0e5),
            "UW",
            "CO2",
            flow(Coolant::CO2),
        )
        .unwrap();
        assert_eq!(a, inputs());
    }

    #[test]
    fn unknown_keys_are_configuration_errors() {
        let err = DesignInputs::from_keys(
            m(0.005),
            m(0.0),
            1.0,
            w(1.0e5),
            "Pu",
            "CO2",
            flow(Coolant::CO2),
        )
        .unwrap_err();
        assert!(matches!(err, ChannelError::Props(_)));

        let err = DesignInputs::from_keys(
            m(0.005),
            m(0.0),
            1.0,
            w(1.0e5),
            "UW",
            "He",
            flow(Coolant::CO2),
        )
        .unwrap_err();
        assert!(matches!(err, ChannelError::Props(_)));
    }

    #[test]
    fn coolant_mismatch_rejected() {
        let err = DesignInputs::from_keys(
            m(0.005),
            m(0.0),
            1.0,
            w(1.0e5),
            "UW",
            "H2O",
            flow(Coolant::CO2),
        )
        .unwrap_err();
        assert!(matches!(err, ChannelError::InvalidArg { .. }));
    }

    #[test]
    fn non_positive_geometry_rejected() {
        let f = flow(Coolant::CO2);
        for (r, c, ar, q) in [
            (0.0, 0.0, 1.0, 1e5),
            (0.005, -1e-4, 1.0, 1e5),
            (0.005, 0.0, 0.0, 1e5),
            (0.005, 0.0, 1.0, 0.0),
            (f64::NAN, 0.0, 1.0, 1e5),
        ] {
            let res = DesignInputs::new(m(r), m(c), ar, w(q), Material::UW, f.clone());
            assert!(matches!(res, Err(ChannelError::InvalidArg { .. })));
        }
    }

    #[test]
    fn material_roles_enforced() {
        let err = DesignInputs::new(
            m(0.005),
            m(0.0),
            1.0,
            w(1e5),
            Material::Carbon,
            flow(Coolant::CO2),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ChannelError::InvalidRole {
                material: "Carbon",
                role: "fuel"
            }
        );

        assert!(matches!(
            inputs().with_cladding(Material::UO2),
            Err(ChannelError::InvalidRole { role: "cladding", .. })
        ));
        assert!(inputs().with_reflector(Material::Inconel718).is_ok());
    }

    #[test]
    fn builders_revalidate() {
        assert!(inputs().with_power(w(-1.0)).is_err());
        let inp = inputs().with_channel_radius(m(0.008)).unwrap();
        assert_eq!(inp.channel_radius(), 0.008);
    }
}
