mod error;

use clap::{Parser, Subcommand};
use cr_channel::OutputField;
use cr_project::{CaseFile, load_case, validate_case};
use cr_solver::{Design, SweepReport, design_reactor, sweep_designs};
use error::{CliError, CliResult};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cr-cli")]
#[command(about = "Coolable CLI - coolant channel sizing for compact reactor cores", long_about = None)]
struct Cli {
    /// Log solver iterations (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a design case file
    Validate {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
    },
    /// Size the core described by a case file
    Design {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// Write the full design as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Size a core from geometry arguments
    Quick {
        /// Coolant channel radius [m]
        radius: f64,
        /// Core length over core radius
        aspect_ratio: f64,
        /// Cladding thickness [m]
        clad_thickness: f64,
        /// Fuel material key
        #[arg(long, default_value = "UW")]
        fuel: String,
        /// Coolant key
        #[arg(long, default_value = "CO2")]
        coolant: String,
        /// Thermal power [W]
        #[arg(long, default_value_t = 1.0e5)]
        power: f64,
        /// Coolant mass flow [kg/s]
        #[arg(long)]
        mass_flow: Option<f64>,
        /// Inlet and outlet temperature [K]
        #[arg(long, num_args = 2, value_names = ["T_IN", "T_OUT"])]
        temperatures: Option<Vec<f64>>,
        /// Inlet and outlet pressure [Pa]
        #[arg(long, num_args = 2, value_names = ["P_IN", "P_OUT"])]
        pressures: Option<Vec<f64>>,
        /// Write the full design as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Run the sweep section of a case file
    Sweep {
        /// Path to the case file (YAML or JSON)
        case_path: PathBuf,
        /// Write every sweep point as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Design { case_path, json } => cmd_design(&case_path, json.as_deref()),
        Commands::Quick {
            radius,
            aspect_ratio,
            clad_thickness,
            fuel,
            coolant,
            power,
            mass_flow,
            temperatures,
            pressures,
            json,
        } => {
            let mut case = CaseFile::baseline("quick", power);
            case.fuel = fuel;
            case.coolant = coolant;
            case.channel_radius_m = radius;
            case.aspect_ratio = aspect_ratio;
            case.clad_thickness_m = clad_thickness;
            if let Some(mdot) = mass_flow {
                case.flow.mass_flow_kg_s = mdot;
            }
            if let Some([t_in, t_out]) = temperatures.as_deref() {
                case.flow.inlet_temperature_k = *t_in;
                case.flow.outlet_temperature_k = *t_out;
            }
            if let Some([p_in, p_out]) = pressures.as_deref() {
                case.flow.inlet_pressure_pa = *p_in;
                case.flow.outlet_pressure_pa = *p_out;
            }
            cmd_quick(&case, json.as_deref())
        }
        Commands::Sweep { case_path, json } => cmd_sweep(&case_path, json.as_deref()),
    }
}

/// `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cmd_validate(case_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = load_case(case_path)?;
    case.design_inputs()?;
    println!("✓ Case '{}' is valid", case.name);
    Ok(())
}

fn cmd_design(case_path: &Path, json: Option<&Path>) -> CliResult<()> {
    let case = load_case(case_path)?;
    println!("Designing case: {}", case.name);
    run_design(&case, json)
}

fn cmd_quick(case: &CaseFile, json: Option<&Path>) -> CliResult<()> {
    validate_case(case).map_err(cr_project::ProjectError::from)?;
    println!("{}", quick_banner(case));
    run_design(case, json)
}

fn quick_banner(case: &CaseFile) -> String {
    format!(
        "Designing {}/{} core, r = {} m, L/r_core = {}",
        case.fuel, case.coolant, case.channel_radius_m, case.aspect_ratio
    )
}

fn run_design(case: &CaseFile, json: Option<&Path>) -> CliResult<()> {
    let design = design_reactor(case.design_inputs()?, &case.design_config())?;
    println!("✓ Design converged in {} evaluations", design.evaluations);
    print_design(&design);

    if let Some(path) = json {
        write_json(path, &design)?;
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

fn cmd_sweep(case_path: &Path, json: Option<&Path>) -> CliResult<()> {
    let case = load_case(case_path)?;
    let (radii, powers) = case
        .sweep_axes()
        .ok_or_else(|| CliError::NoSweep(case.name.clone()))?;
    println!(
        "Sweeping case '{}': {} radii x {} powers",
        case.name,
        radii.len(),
        powers.len()
    );

    let report = sweep_designs(&case.design_inputs()?, &radii, &powers, &case.design_config());
    info!(
        successful = report.num_successful(),
        failed = report.num_failed(),
        "sweep finished"
    );
    print_sweep(&report);

    if let Some(path) = json {
        write_json(path, &report)?;
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

fn print_design(design: &Design) {
    println!("  Fuel fraction:      {:.4}", design.fuel_frac);
    println!("  Core radius (m):    {:.4}", design.core_r);
    println!("  Reynolds number:    {:.0}", design.re);
    if design.pressure_iterations > 0 {
        println!(
            "  Channels added for pressure limit in {} iterations",
            design.pressure_iterations
        );
    }
    for field in OutputField::ALL {
        println!("  {:<40} {:.6e}", field.to_string(), design.field(field));
    }
}

fn print_sweep(report: &SweepReport) {
    println!(
        "✓ {} of {} points succeeded",
        report.num_successful(),
        report.points.len()
    );
    for point in report.points.iter().filter(|p| p.error.is_some()) {
        println!(
            "  r = {:.4} m, Q = {:.0} W: {}",
            point.channel_radius,
            point.power,
            point.error.as_deref().unwrap_or_default()
        );
    }
    match report.min_mass() {
        Some(best) => {
            println!(
                "Minimum mass at r = {:.4} m, Q = {:.0} W",
                best.channel_radius, best.power
            );
            if let Some(design) = &best.design {
                print_design(design);
            }
        }
        None => println!("No successful sweep points"),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> CliResult<()> {
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn quick_aspect_ratio_is_length_over_core_radius() {
        let cmd = Cli::command();
        let quick = cmd.find_subcommand("quick").unwrap();
        let arg = quick
            .get_arguments()
            .find(|a| a.get_id() == "aspect_ratio")
            .unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("core radius"), "{help}");

        let mut case = CaseFile::baseline("quick", 1.0e5);
        case.aspect_ratio = 1.5;
        let banner = quick_banner(&case);
        assert!(banner.contains("L/r_core = 1.5"), "{banner}");
        assert!(!banner.contains("L/D"));
    }

    #[test]
    fn quick_parses_flow_overrides() {
        let cli = Cli::try_parse_from([
            "cr-cli", "quick", "0.006", "1.2", "0.0003", "--coolant", "H2O", "--mass-flow", "0.2",
            "--pressures", "17.5e6", "17.3e6",
        ])
        .unwrap();
        match cli.command {
            Commands::Quick {
                radius,
                coolant,
                mass_flow,
                pressures,
                ..
            } => {
                assert_eq!(radius, 0.006);
                assert_eq!(coolant, "H2O");
                assert_eq!(mass_flow, Some(0.2));
                assert_eq!(pressures, Some(vec![17.5e6, 17.3e6]));
            }
            _ => panic!("expected quick"),
        }
    }
}
