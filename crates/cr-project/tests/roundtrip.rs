use cr_project::*;
use std::path::Path;

fn cases_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../cases")
}

#[test]
fn roundtrip_yaml_baseline() {
    let case = CaseFile::baseline("Baseline", 1.0e5);
    validate_case(&case).unwrap();

    let path = std::env::temp_dir().join("cr_project_roundtrip_baseline.yaml");
    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn roundtrip_json_with_solver_and_sweep() {
    let mut case = CaseFile::baseline("Sweep", 1.2e5);
    case.solver = Some(SolverDef {
        fuel_fraction_tol: 1e-4,
        power_rtol: 0.02,
        ..Default::default()
    });
    case.sweep = Some(SweepDef {
        channel_radius_m: RangeDef {
            start: 0.005,
            end: 0.01,
            points: 2,
        },
        power_w: RangeDef {
            start: 9.0e4,
            end: 1.5e5,
            points: 4,
        },
    });

    let path = std::env::temp_dir().join("cr_project_roundtrip_sweep.json");
    save_json(&path, &case).unwrap();
    let loaded = load_case(&path).unwrap();

    assert_eq!(case, loaded);
    assert_eq!(loaded.design_config().power_rtol, 0.02);
    let (radii, powers) = loaded.sweep_axes().unwrap();
    assert_eq!(radii, vec![0.005, 0.01]);
    assert_eq!(powers.len(), 4);
}

#[test]
fn save_rejects_invalid_case() {
    let mut case = CaseFile::baseline("Bad", 1.0e5);
    case.fuel = "Pu".to_string();
    let path = std::env::temp_dir().join("cr_project_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &case),
        Err(ProjectError::Validation(ValidationError::UnknownKey { .. }))
    ));
}

#[test]
fn minimal_yaml_takes_defaults() {
    let yaml = r#"
version: 1
name: minimal
fuel: UW
coolant: CO2
power_w: 100000.0
flow:
  mass_flow_kg_s: 1.0
  inlet_temperature_k: 900.0
  outlet_temperature_k: 1000.0
  inlet_pressure_pa: 17900000.0
  outlet_pressure_pa: 17400000.0
"#;
    let case: CaseFile = serde_yaml::from_str(yaml).unwrap();
    validate_case(&case).unwrap();

    assert_eq!(case.channel_radius_m, 0.005);
    assert_eq!(case.clad_thickness_m, 0.00031);
    assert_eq!(case.aspect_ratio, 1.0);
    assert_eq!(case.cladding, "Inconel-718");
    assert_eq!(case.reflector, "Carbon");
    assert!(case.solver.is_none());

    let config = case.design_config();
    assert_eq!(config.bounds, (0.01, 1.0));
    assert_eq!(config.minimizer.xatol, 1e-3);
    assert_eq!(config.minimizer.max_evaluations, 500);
    assert_eq!(config.max_pressure_iterations, 100);
    assert_eq!(config.power_rtol, cr_solver::DEFAULT_POWER_RTOL);
}

#[test]
fn case_converts_to_design_inputs() {
    let case = CaseFile::baseline("Convert", 1.0e5);
    let inputs = case.design_inputs().unwrap();

    assert_eq!(inputs.channel_radius(), 0.005);
    assert_eq!(inputs.power(), 1.0e5);
    assert_eq!(inputs.fuel().key(), "UW");
    assert_eq!(inputs.coolant().key(), "CO2");
    assert!((inputs.flow().dp_limit - 5.0e5).abs() < 1e-6);
}

#[test]
fn bundled_cases_load_and_design() {
    for name in ["baseline_uw_co2.yaml", "uo2_h2o_sweep.yaml"] {
        let path = cases_dir().join(name);
        let case = load_yaml(&path).unwrap_or_else(|e| panic!("Failed to load {name}: {e}"));
        let design = cr_solver::design_reactor(case.design_inputs().unwrap(), &case.design_config())
            .unwrap_or_else(|e| panic!("Failed to design {name}: {e}"));
        assert!(design.mass.total > 0.0);
    }

    let sweep = load_yaml(&cases_dir().join("uo2_h2o_sweep.yaml")).unwrap();
    let (radii, powers) = sweep.sweep_axes().unwrap();
    assert_eq!(radii.len(), 3);
    assert_eq!(powers, vec![90_000.0, 120_000.0, 150_000.0]);
}
