use cr_core::units::{k, kgps, pa};
use cr_props::{Coolant, FlowProperties, Material, PropsError};
use proptest::prelude::*;

#[test]
fn material_keys_roundtrip() {
    for mat in Material::ALL {
        assert_eq!(Material::from_key(mat.key()).unwrap(), mat);
    }
    for coolant in Coolant::ALL {
        assert_eq!(Coolant::from_key(coolant.key()).unwrap(), coolant);
    }
    assert!(matches!(
        Material::from_key("Pu"),
        Err(PropsError::UnknownMaterial { .. })
    ));
}

#[test]
fn fuels_carry_thermal_limits() {
    for fuel in Material::FUELS {
        assert!(fuel.is_fuel());
        assert!(fuel.centerline_temperature().unwrap() > 1000.0);
        assert!(fuel.conductivity().unwrap() > 0.0);
        assert!(fuel.density().unwrap() > 0.0);
    }
    assert!(!Material::Inconel718.is_fuel());
    assert!(Material::Carbon.roughness().is_err());
    assert!(Material::Inconel718.roughness().unwrap() > 0.0);
}

#[test]
fn water_reference_state() {
    let fp = FlowProperties::new(
        Coolant::H2O,
        kgps(0.2),
        (k(900.0), k(1000.0)),
        (pa(17.5e6), pa(17.3e6)),
    )
    .unwrap();
    assert_eq!(fp.coolant, Coolant::H2O);
    assert!((fp.dp_limit - 2.0e5).abs() < 1e-6);
    assert!((fp.rho - (-0.03012 * 950.0 + 61.25238)).abs() < 1e-9);
}

proptest! {
    #[test]
    fn fits_are_physical_in_range(
        t_in in 790.0_f64..1000.0,
        rise in 1.0_f64..100.0,
        m_dot in 0.05_f64..5.0,
    ) {
        for coolant in Coolant::ALL {
            let fp = FlowProperties::new(
                coolant,
                kgps(m_dot),
                (k(t_in), k(t_in + rise)),
                (pa(17.9e6), pa(17.4e6)),
            )
            .unwrap();
            prop_assert!(fp.k > 0.0 && fp.mu > 0.0 && fp.rho > 0.0 && fp.cp > 0.0);
            prop_assert!((fp.pr - fp.cp * fp.mu / fp.k).abs() <= 1e-12 * fp.pr);
        }
    }
}
