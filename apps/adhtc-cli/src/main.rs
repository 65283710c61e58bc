use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use adhtc_app::{AppResult, DiagramKind, PlantReport, plant_service, run_service};
use adhtc_diagram::{format_number, series_csv, write_series_csv};
use adhtc_engines::BoilerOutcome;
use adhtc_steam::{SaturationSource, SteamTables, TableFiles};

#[derive(Parser)]
#[command(name = "adhtc")]
#[command(about = "AD-HTC biogas plant model - digestion, boiler and power cycle", long_about = None)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate plant file syntax and values
    Validate {
        /// Path to the plant YAML or JSON file
        plant_path: PathBuf,
    },
    /// List the biomass presets
    Presets,
    /// Evaluate a plant and print its report
    Run {
        /// Path to the plant YAML or JSON file
        plant_path: PathBuf,
        /// Print the full report as JSON instead of the summary
        #[arg(long)]
        json: bool,
        /// Write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Look up steam properties
    #[command(subcommand)]
    Steam(SteamCommands),
    /// Export the point series of one diagram as CSV
    Diagram {
        /// Path to the plant YAML or JSON file
        plant_path: PathBuf,
        /// Which diagram to export
        kind: DiagramArg,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum SteamCommands {
    /// Saturated water/steam at a temperature
    Saturation {
        /// Temperature [°C]
        temperature_c: f64,
        /// Directory holding the reference steam tables
        #[arg(long, default_value = "data")]
        tables: PathBuf,
    },
    /// Superheated steam or compressed liquid at a pressure and temperature
    Superheated {
        /// Pressure [MPa]
        pressure_mpa: f64,
        /// Temperature [°C]
        temperature_c: f64,
        /// Directory holding the reference steam tables
        #[arg(long, default_value = "data")]
        tables: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DiagramArg {
    /// Boiler temperature-enthalpy
    Th,
    /// Steam cycle enthalpy-entropy
    Hs,
    /// Gas cycle temperature-entropy
    Ts,
}

impl From<DiagramArg> for DiagramKind {
    fn from(arg: DiagramArg) -> Self {
        match arg {
            DiagramArg::Th => DiagramKind::Th,
            DiagramArg::Hs => DiagramKind::Hs,
            DiagramArg::Ts => DiagramKind::Ts,
        }
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Validate { plant_path } => cmd_validate(&plant_path),
        Commands::Presets => cmd_presets(),
        Commands::Run {
            plant_path,
            json,
            output,
        } => cmd_run(&plant_path, json, output.as_deref()),
        Commands::Steam(steam_cmd) => match steam_cmd {
            SteamCommands::Saturation {
                temperature_c,
                tables,
            } => cmd_steam_saturation(temperature_c, &tables),
            SteamCommands::Superheated {
                pressure_mpa,
                temperature_c,
                tables,
            } => cmd_steam_superheated(pressure_mpa, temperature_c, &tables),
        },
        Commands::Diagram {
            plant_path,
            kind,
            output,
        } => cmd_diagram(&plant_path, kind.into(), output.as_deref()),
    }
}

fn cmd_validate(plant_path: &Path) -> AppResult<()> {
    println!("Validating plant: {}", plant_path.display());
    let plant = plant_service::load_plant(plant_path)?;
    plant_service::validate_plant(&plant)?;
    println!("✓ Plant is valid");
    Ok(())
}

fn cmd_presets() -> AppResult<()> {
    println!("Biomass presets:");
    for p in plant_service::list_presets() {
        println!(
            "  {:<22} {} (moisture {}%, dry matter {}%, water ratio {})",
            p.key, p.label, p.moisture_pct, p.dry_matter_pct, p.water_ratio
        );
    }
    println!("  {:<22} Custom (moisture_pct required)", "custom");
    Ok(())
}

fn cmd_run(plant_path: &Path, json: bool, output: Option<&Path>) -> AppResult<()> {
    let report = run_service::run_plant(plant_path)?;

    if let Some(path) = output {
        adhtc_app::save_report(path, &report)?;
        println!("✓ Report written to {}", path.display());
    }

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &PlantReport) {
    let d = &report.display;
    println!("Plant: {}", report.manifest.plant_name);
    println!(
        "  Feedstock: {} (moisture {}%, water ratio {})",
        report.biomass_label,
        format_number(report.moisture_pct_used),
        format_number(report.added_water_ratio)
    );
    for warning in &d.warnings {
        println!("  Warning: {}", warning);
    }

    println!("\nDigestion:");
    println!("  Total slurry:         {}", d.total_slurry);
    println!("  Final total solids:   {} %", d.final_total_solids_pct);
    println!("  Moisture-rich stream: {}", d.moisture_rich);
    println!("  Moisture-lean stream: {}", d.moisture_lean);
    println!("  Rate constant:        {} 1/day", d.k_per_day);
    println!("  Time to maturity:     {}", d.days_to_maturity);
    println!("  Average biogas:       {} m³/day", d.avg_daily_m3);
    println!("  Peak biogas:          {} m³/day", d.peak_daily_m3);
    println!("  Methane mass:         {} kg", d.methane_mass_kg);
    println!("  Ignition power:       {} kW", d.ignition_power_kw);

    if let Some(boiler) = &report.boiler {
        println!("\nBoiler:");
        match boiler {
            BoilerOutcome::StaticCharge(r) => {
                println!("  Start-up heat:        {} kJ", format_number(r.q_startup_kj));
                println!(
                    "  Methane needed:       {} kg",
                    format_number(r.methane_needed_kg)
                );
                println!(
                    "  Time to steam:        {} min",
                    format_number(r.startup_time_minutes)
                );
                println!(
                    "  Daily split:          {} kg/day boiler ({}%), {} kg/day collector ({}%)",
                    format_number(r.boiler_kg_per_day),
                    format_number(r.boiler_pct),
                    format_number(r.collector_kg_per_day),
                    format_number(r.collector_pct)
                );
            }
            BoilerOutcome::ContinuousFlow(r) => {
                println!("  Heat load:            {} kW", format_number(r.heat_load_kw));
                println!(
                    "  Methane demand:       {} kg/hr",
                    format_number(r.methane_demand_kg_hr)
                );
                println!(
                    "  Hourly split:         {} kg/hr boiler ({}%), {} kg/hr collector ({}%)",
                    format_number(r.boiler_kg_hr),
                    format_number(r.boiler_pct),
                    format_number(r.collector_kg_hr),
                    format_number(r.collector_pct)
                );
            }
        }
        println!("  Steam data:           {}", report.saturation_source);
        if let Some(message) = &report.boiler_message {
            println!("  Warning: {}", message);
        }
    }

    if let Some(cycle) = &report.power_cycle {
        println!("\nPower cycle:");
        println!(
            "  T1..T4:               {} / {} / {} / {} °C",
            format_number(cycle.t1_c),
            format_number(cycle.t2_c),
            format_number(cycle.t3_c),
            format_number(cycle.t4_c)
        );
        println!(
            "  Compressor / turbine: {} / {} kW",
            format_number(cycle.w_comp_kw),
            format_number(cycle.w_turb_kw)
        );
        println!(
            "  Net electrical power: {} kWe",
            format_number(cycle.net_power_kwe)
        );
    }

    let available: Vec<&str> = [
        ("th", report.diagrams.th.is_some()),
        ("hs", report.diagrams.hs.is_some()),
        ("ts", report.diagrams.ts.is_some()),
    ]
    .iter()
    .filter(|(_, present)| *present)
    .map(|(name, _)| *name)
    .collect();
    if !available.is_empty() {
        println!("\nDiagrams: {}", available.join(", "));
    }
}

fn load_tables(dir: &Path) -> SteamTables {
    SteamTables::load(dir, &TableFiles::default())
}

fn cmd_steam_saturation(temperature_c: f64, tables_dir: &Path) -> AppResult<()> {
    let tables = load_tables(tables_dir);
    match tables.lookup_saturation(temperature_c) {
        Some(props) => {
            println!("Saturation at {} °C (reference table):", temperature_c);
            if let Some(p) = tables
                .saturation()
                .and_then(|t| t.saturation_pressure(temperature_c))
            {
                println!("  P    = {} MPa", p);
            }
            println!("  h_f  = {} kJ/kg", format_number(props.h_f));
            println!("  h_g  = {} kJ/kg", format_number(props.h_g));
            println!("  h_fg = {} kJ/kg", format_number(props.h_fg()));
            println!("  s_f  = {} kJ/kg·K", props.s_f);
            println!("  s_g  = {} kJ/kg·K", props.s_g);
        }
        None => {
            let source = tables.saturation_source();
            println!("Saturation at {} °C (built-in table):", temperature_c);
            println!(
                "  h_f  = {} kJ/kg",
                format_number(source.liquid_enthalpy(temperature_c))
            );
            println!(
                "  h_g  = {} kJ/kg",
                format_number(source.vapor_enthalpy(temperature_c))
            );
            println!(
                "  h_fg = {} kJ/kg",
                format_number(source.latent_heat(temperature_c))
            );
        }
    }
    Ok(())
}

fn cmd_steam_superheated(pressure_mpa: f64, temperature_c: f64, tables_dir: &Path) -> AppResult<()> {
    let tables = load_tables(tables_dir);
    match tables.lookup_superheated(pressure_mpa, temperature_c) {
        Some(props) => {
            println!("Steam at {} MPa, {} °C:", pressure_mpa, temperature_c);
            println!("  h = {} kJ/kg", format_number(props.h));
            println!("  s = {} kJ/kg·K", props.s);
            if let Some(phase) = tables
                .superheated()
                .and_then(|t| t.phase(pressure_mpa, temperature_c))
            {
                println!("  phase (nearest entry) = {}", phase);
            }
        }
        None => {
            println!(
                "No superheated data for {} MPa, {} °C in {}",
                pressure_mpa,
                temperature_c,
                tables_dir.display()
            );
        }
    }
    Ok(())
}

fn cmd_diagram(plant_path: &Path, kind: DiagramKind, output: Option<&Path>) -> AppResult<()> {
    let report = run_service::run_plant(plant_path)?;
    let series = run_service::diagram_series(&report, kind)?;
    let points: usize = series.iter().map(|s| s.points.len()).sum();

    // Write to file or stdout
    if let Some(path) = output {
        let file = std::fs::File::create(path)?;
        write_series_csv(&series, file)?;
        println!("✓ Exported {} data points to {}", points, path.display());
    } else {
        print!("{}", series_csv(&series));
    }
    Ok(())
}
