//! Pipeline execution: kinetics → boiler → power cycle → diagrams and display fields.

use std::path::Path;
use std::str::FromStr;

use adhtc_diagram::{
    DisplayFields, SchematicData, Series, feedstock_sankey, gas_ts_from_cycle, hs_diagram,
    insufficient_message, th_diagram,
};
use adhtc_engines::{
    BoilerRequest, evaluate_boiler_request, evaluate_kinetics_with, evaluate_power_cycle,
    validate_fuel,
};
use adhtc_project::PlantDef;
use adhtc_steam::SteamTables;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::plant_compile::compile_plant;
use crate::plant_service;
use crate::report::{DiagramSet, PlantReport, ReportManifest};

/// Diagrams that can be exported as point series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    /// Boiler temperature–enthalpy
    Th,
    /// Steam cycle enthalpy–entropy
    Hs,
    /// Gas cycle temperature–entropy
    Ts,
}

impl FromStr for DiagramKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "th" => Ok(DiagramKind::Th),
            "hs" => Ok(DiagramKind::Hs),
            "ts" => Ok(DiagramKind::Ts),
            other => Err(AppError::DiagramUnavailable(format!(
                "unknown diagram '{other}' (expected th, hs or ts)"
            ))),
        }
    }
}

/// Evaluate a validated plant against already loaded steam tables.
pub fn evaluate_plant(plant: &PlantDef, tables: &SteamTables) -> AppResult<PlantReport> {
    let inputs = compile_plant(plant)?;
    let source = tables.saturation_source();

    let kinetics = evaluate_kinetics_with(&inputs.feedstock, &inputs.arrhenius);
    if kinetics.slurry.high_solids_warning {
        warn!(
            final_total_solids_pct = kinetics.slurry.final_total_solids_pct,
            "high solid content, risk of blockage"
        );
    }

    let boiler = inputs
        .boiler
        .as_ref()
        .map(|request| evaluate_boiler_request(request, kinetics.avg_daily_m3, source));

    let power_cycle = match &inputs.power_cycle {
        Some(cycle) => {
            validate_fuel(kinetics.v_total_m3, kinetics.volatile_yield_kg)?;
            Some(evaluate_power_cycle(
                cycle,
                kinetics.v_total_m3,
                kinetics.volatile_yield_kg,
            ))
        }
        None => None,
    };

    let static_input = match &inputs.boiler {
        Some(BoilerRequest::StaticCharge(input)) => Some(input),
        _ => None,
    };
    let static_result = boiler.as_ref().and_then(|b| b.as_static());

    let th = match (static_input, static_result) {
        (Some(input), Some(result)) => Some(th_diagram(input, result, tables)),
        _ => None,
    };
    let hs = static_input.and_then(|input| {
        hs_diagram(
            input.water_capacity_kg,
            input.steam_temperature_c,
            &inputs.hs_options,
            tables,
        )
    });
    if static_input.is_some() && hs.is_none() {
        warn!("h-s cycle diagram unavailable without the full steam tables");
    }
    let ts = power_cycle.as_ref().map(gas_ts_from_cycle);

    let biomass_label = match plant.feedstock.biomass.preset() {
        Some(preset) => preset.label.to_string(),
        None => "Custom".to_string(),
    };

    info!(
        plant = %plant.name,
        avg_daily_m3 = kinetics.avg_daily_m3,
        days_to_maturity = kinetics.days_to_maturity,
        boiler = boiler.is_some(),
        power_cycle = power_cycle.is_some(),
        saturation_source = source.name(),
        "plant evaluated"
    );

    Ok(PlantReport {
        manifest: ReportManifest::new(&plant.name),
        biomass_label,
        moisture_pct_used: inputs.feedstock.moisture_pct,
        added_water_ratio: inputs.feedstock.added_water_ratio,
        display: DisplayFields::from_kinetics(&kinetics),
        boiler_message: boiler.as_ref().and_then(insufficient_message),
        sankey: feedstock_sankey(kinetics.moisture_rich_kg_s, kinetics.moisture_lean_kg_s),
        schematic: SchematicData::new(Some(&kinetics), static_input, power_cycle.as_ref()),
        diagrams: DiagramSet { th, hs, ts },
        steam_tables: tables.availability(),
        saturation_source: source.name().to_string(),
        kinetics,
        boiler,
        power_cycle,
    })
}

/// Load a plant file and its steam tables, then evaluate it.
pub fn run_plant(plant_path: &Path) -> AppResult<PlantReport> {
    let plant = plant_service::load_plant(plant_path)?;
    let tables = plant_service::load_steam_tables(&plant, Some(plant_path));
    evaluate_plant(&plant, &tables)
}

/// Point series of one diagram in a report.
pub fn diagram_series(report: &PlantReport, kind: DiagramKind) -> AppResult<Vec<Series>> {
    let d = &report.diagrams;
    let series = match kind {
        DiagramKind::Th => d.th.as_ref().map(|th| th.series()),
        DiagramKind::Hs => d.hs.as_ref().map(|hs| hs.series()),
        DiagramKind::Ts => d.ts.as_ref().map(|ts| ts.series()),
    };
    series.ok_or_else(|| {
        let reason = match kind {
            DiagramKind::Th => "the T-H diagram needs a static-charge boiler",
            DiagramKind::Hs => {
                "the h-s diagram needs a static-charge boiler and both reference steam tables"
            }
            DiagramKind::Ts => "the T-s diagram needs a power cycle",
        };
        AppError::DiagramUnavailable(reason.to_string())
    })
}
