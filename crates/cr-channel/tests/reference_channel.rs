//! Channel model against a hand-checked reference core: UW fuel, CO2 coolant,
//! six 5 mm channels in a 0.16 m core.

use cr_channel::{
    DesignInputs, FlowRegime, FlowState, OutputField, PressureStatus, calc_dp, compute_mass,
    dp_constrained_channels, evaluate_fraction, evaluate_geometry, with_channel_count,
};
use cr_core::units::{k, kgps, m, pa, w};
use cr_props::{Coolant, FlowProperties, Material};

const R_CHANNEL: f64 = 0.005;
const CORE_R: f64 = 0.16;

fn rel_err(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

fn reference_inputs(dp_limit: Option<f64>) -> DesignInputs {
    let mut flow = FlowProperties::new(
        Coolant::CO2,
        kgps(1.0),
        (k(900.0), k(1000.0)),
        (pa(17.9e6), pa(17.4e6)),
    )
    .unwrap();
    if let Some(limit) = dp_limit {
        flow = flow.with_dp_limit(pa(limit)).unwrap();
    }
    DesignInputs::new(m(R_CHANNEL), m(0.00031), 1.0, w(1.0e5), Material::UW, flow).unwrap()
}

fn reference_state(dp_limit: Option<f64>) -> FlowState {
    let ff = 1.0 - 6.0 * R_CHANNEL * R_CHANNEL / (CORE_R * CORE_R);
    let state = FlowState::new(reference_inputs(dp_limit));
    evaluate_geometry(&state, ff, CORE_R).unwrap()
}

#[test]
fn flow_characterization_matches_reference() {
    let s = reference_state(None);
    let hy = s.hydraulics();

    assert!((hy.f - 0.003030597).abs() < 1e-7, "f = {}", hy.f);
    assert!((hy.nu - 126.0544263).abs() < 1e-7, "Nu = {}", hy.nu);
    assert!((hy.h - 1096.8527578).abs() < 1e-5, "h = {}", hy.h);
    assert_eq!(hy.nu, hy.nu_h);

    assert!(rel_err(hy.velocity, 28.2499651265) < 1e-9);
    assert!(rel_err(hy.re, 441_854.964445) < 1e-9);
    assert_eq!(FlowRegime::from_reynolds(hy.re), FlowRegime::Turbulent);
    assert!((hy.relrough - 1.5e-4).abs() < 1e-15);
}

#[test]
fn generation_matches_reference() {
    let s = reference_state(None);
    let th = s.thermal();

    assert!((th.generation - 8432.851535).abs() < 1.0, "gen = {}", th.generation);
    assert!(rel_err(th.r_cond, 0.037525106) < 1e-7);
    assert!(rel_err(th.r_conv, 0.030229472) < 1e-7);
    assert!((th.dt - 897.5).abs() < 1e-12);
    assert!((s.generation_per_channel() * 6.0 - th.generation).abs() < 1e-9);
    assert!(
        (th.volumetric * s.geometry().vol_fuel - th.generation).abs() < 1e-6 * th.generation
    );
}

#[test]
fn pressure_drop_matches_reference() {
    let s = calc_dp(&reference_state(None)).unwrap();
    assert!(rel_err(s.dp(), 1453.43264876) < 1e-8, "dp = {}", s.dp());
    assert_eq!(s.pressure_status(), PressureStatus::Satisfied);
    assert_eq!(s.channel_count(), 6);
}

#[test]
fn tight_limit_requires_more_channels() {
    let s = calc_dp(&reference_state(Some(100.0))).unwrap();
    assert_eq!(s.pressure_status(), PressureStatus::Violated);

    let n = dp_constrained_channels(&s).unwrap();
    assert!(n > 6.0);
    assert_eq!(n, n.floor());

    let resized = with_channel_count(&s, n).unwrap();
    assert!(resized.dp() < s.dp());
    assert!(resized.hydraulics().velocity < s.hydraulics().velocity);
    assert_eq!(resized.geometry().a_fuel, s.geometry().a_fuel);
    assert_eq!(resized.thermal(), s.thermal());
}

#[test]
fn channel_count_strictly_increases() {
    let s = calc_dp(&reference_state(Some(1.0e6))).unwrap();
    let n = dp_constrained_channels(&s).unwrap();
    assert_eq!(n, 7.0);
}

#[test]
fn trial_pipeline_uses_criticality_radius() {
    let base = FlowState::new(reference_inputs(None));
    let s = evaluate_fraction(&base, 0.6).unwrap();
    let expected_r = 0.15385 * 0.6_f64.powf(-0.8309);
    assert!((s.geometry().core_r - expected_r).abs() < 1e-15);
    assert_eq!(s.fuel_frac(), 0.6);
    assert!(s.thermal().generation > 0.0);
    assert!(s.mass().is_none());

    assert!(evaluate_fraction(&base, 0.0).is_err());
    assert!(evaluate_fraction(&base, 1.0).is_err());
}

#[test]
fn mass_and_report_fields() {
    let s = compute_mass(&calc_dp(&reference_state(None)).unwrap()).unwrap();
    let mass = s.mass().unwrap();
    assert_eq!(mass.total, mass.fuel + mass.coolant + mass.reflector);

    for field in OutputField::ALL {
        let v = field.value(&s).unwrap();
        assert!(v.is_finite(), "{field} = {v}");
    }
    assert_eq!(OutputField::ChannelCount.value(&s), Some(6.0));
    assert_eq!(OutputField::AspectRatio.value(&s), Some(1.0));
}
