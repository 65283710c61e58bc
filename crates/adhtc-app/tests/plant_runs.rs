//! End-to-end runs of the sample plants shipped in `plants/`.

use std::path::PathBuf;

use adhtc_app::{
    AppError, DiagramKind, diagram_series, evaluate_plant, load_plant, load_report, run_plant,
    save_plant, save_report,
};
use adhtc_engines::BoilerOutcome;
use adhtc_project::{
    BiomassType, BoilerDef, DiagramsDef, FeedstockDef, FlowUnit, KineticsDef, MassFlowDef,
    PlantDef,
};
use adhtc_steam::SteamTables;

fn plant_path(name: &str) -> Option<PathBuf> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("plants");
    path.push(name);
    if !path.exists() {
        eprintln!("Skipping test: sample plant not found at {:?}", path);
        return None;
    }
    Some(path)
}

fn scenario_b_plant() -> PlantDef {
    PlantDef {
        version: 1,
        name: "Scenario B".to_string(),
        feedstock: FeedstockDef {
            biomass: BiomassType::Cattle,
            mass_flow: MassFlowDef {
                value: 60.0,
                unit: FlowUnit::KgPerDay,
            },
            temperature_c: 25.0,
            moisture_pct: None,
            added_water_ratio: None,
        },
        kinetics: KineticsDef::default(),
        boiler: Some(BoilerDef::StaticCharge {
            water_capacity_kg: 200.0,
            steam_temperature_c: 180.0,
            ambient_temperature_c: 25.0,
            efficiency_pct: 85.0,
        }),
        power_cycle: None,
        steam_tables: None,
        diagrams: DiagramsDef::default(),
    }
}

#[test]
fn campus_cattle_full_pipeline() {
    let Some(path) = plant_path("campus_cattle.yaml") else {
        return;
    };
    let report = run_plant(&path).expect("run should succeed");

    assert!(report.steam_tables.saturation);
    assert!(report.steam_tables.supports_hs_diagram());
    assert_eq!(report.saturation_source, "saturation-table");
    assert_eq!(report.biomass_label, "Cattle / slurry (dung)");

    let k = &report.kinetics;
    assert!((k.moisture_rich_kg_s - 0.94 * 60.0 / 86_400.0).abs() < 1e-12);
    assert_eq!(k.peak_daily_m3, k.avg_daily_m3 * 1.5);

    let boiler = report.boiler.as_ref().and_then(|b| b.as_static()).unwrap();
    assert!(boiler.boiler_kg_per_day <= boiler.methane_per_day_kg);

    let power = report.power_cycle.as_ref().unwrap();
    let net = (power.w_turb_kw - power.w_comp_kw) * 0.94;
    assert!((power.net_power_kwe - net).abs() < 1e-9);

    assert!(report.diagrams.th.as_ref().unwrap().from_tables);
    assert!(report.diagrams.hs.is_some());
    assert!(report.diagrams.ts.is_some());
    assert!(report.schematic.natural.is_some());
}

#[test]
fn continuous_flow_plant() {
    let Some(path) = plant_path("food_waste_continuous.yaml") else {
        return;
    };
    let report = run_plant(&path).unwrap();
    match report.boiler.as_ref().unwrap() {
        BoilerOutcome::ContinuousFlow(r) => assert!(r.heat_load_kw > 0.0),
        BoilerOutcome::StaticCharge(_) => panic!("plant declares a continuous-flow boiler"),
    }
    // No static charge, so neither boiler diagram exists
    assert!(report.diagrams.th.is_none());
    assert!(report.diagrams.hs.is_none());
    assert!(matches!(
        diagram_series(&report, DiagramKind::Th),
        Err(AppError::DiagramUnavailable(_))
    ));
}

#[test]
fn custom_json_plant_has_power_only() {
    let Some(path) = plant_path("custom_residue.json") else {
        return;
    };
    let report = run_plant(&path).unwrap();
    assert_eq!(report.biomass_label, "Custom");
    assert_eq!(report.moisture_pct_used, 55.0);
    assert!(report.boiler.is_none());
    assert!(diagram_series(&report, DiagramKind::Ts).is_ok());
}

#[test]
fn builtin_tables_reproduce_scenario_b() {
    let report = evaluate_plant(&scenario_b_plant(), &SteamTables::builtin_only()).unwrap();
    assert_eq!(report.saturation_source, "builtin");
    assert!(!report.steam_tables.saturation);

    let boiler = report.boiler.as_ref().and_then(|b| b.as_static()).unwrap();
    assert!((boiler.q_startup_kj - 532_580.0).abs() < 1e-6);
    assert!((boiler.methane_needed_kg - 12.53).abs() < 0.01);

    // Built-in tables cannot support the h-s diagram
    assert!(report.diagrams.hs.is_none());
    assert!(report.diagrams.th.is_some());
}

#[test]
fn report_round_trips_through_json() {
    let report = evaluate_plant(&scenario_b_plant(), &SteamTables::builtin_only()).unwrap();
    let path = std::env::temp_dir().join("adhtc_app_report.json");
    save_report(&path, &report).unwrap();

    let value = load_report(&path).unwrap();
    assert_eq!(value["manifest"]["plant_name"], "Scenario B");
    assert_eq!(value["boiler"]["mode"], "static_charge");
    assert!(value["kinetics"]["avg_daily_m3"].as_f64().unwrap() > 0.0);
}

#[test]
fn saved_plant_reloads_in_either_format() {
    let plant = scenario_b_plant();
    for name in ["adhtc_app_plant.yaml", "adhtc_app_plant.json"] {
        let path = std::env::temp_dir().join(name);
        save_plant(&path, &plant).unwrap();
        assert_eq!(load_plant(&path).unwrap(), plant);
    }
}
