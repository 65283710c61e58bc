//! Plant definition validation.

use crate::schema::{BiomassType, BoilerDef, FeedstockDef, LATEST_VERSION, PlantDef, PowerCycleDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field} ({reason})")]
    MissingValue { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    Ok(())
}

fn in_range(field: &str, value: f64, lo: f64, hi: f64, reason: &str) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < lo || value > hi {
        return Err(invalid(field, value, reason));
    }
    Ok(())
}

fn above_absolute_zero(field: &str, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value <= -273.15 {
        return Err(invalid(field, value, "must be above absolute zero"));
    }
    Ok(())
}

pub fn validate_plant(plant: &PlantDef) -> Result<(), ValidationError> {
    if plant.version == 0 || plant.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: plant.version,
        });
    }

    validate_feedstock(&plant.feedstock)?;

    finite(
        "kinetics pre_exponential_per_day",
        plant.kinetics.pre_exponential_per_day,
    )?;
    finite(
        "kinetics activation_energy_j_per_mol",
        plant.kinetics.activation_energy_j_per_mol,
    )?;

    if let Some(boiler) = &plant.boiler {
        validate_boiler(boiler)?;
    }
    if let Some(cycle) = &plant.power_cycle {
        validate_power_cycle(cycle)?;
    }

    finite("diagrams superheat_delta_c", plant.diagrams.superheat_delta_c)?;
    if let Some(t) = plant.diagrams.cycle_return_temperature_c {
        above_absolute_zero("diagrams cycle_return_temperature_c", t)?;
    }

    Ok(())
}

fn validate_feedstock(feed: &FeedstockDef) -> Result<(), ValidationError> {
    let flow = feed.mass_flow.value;
    finite("feedstock mass_flow", flow)?;
    if flow < 0.0 {
        return Err(invalid("feedstock mass_flow", flow, "must be non-negative"));
    }

    above_absolute_zero("feedstock temperature_c", feed.temperature_c)?;

    match feed.moisture_pct {
        Some(m) => in_range("feedstock moisture_pct", m, 0.0, 100.0, "must be within [0, 100]")?,
        None if feed.biomass == BiomassType::Custom => {
            return Err(ValidationError::MissingValue {
                field: "feedstock moisture_pct".to_string(),
                reason: "custom biomass has no preset moisture".to_string(),
            });
        }
        None => {}
    }

    if let Some(ratio) = feed.added_water_ratio {
        finite("feedstock added_water_ratio", ratio)?;
        if ratio < 0.0 {
            return Err(invalid(
                "feedstock added_water_ratio",
                ratio,
                "must be non-negative",
            ));
        }
    }

    Ok(())
}

fn validate_boiler(boiler: &BoilerDef) -> Result<(), ValidationError> {
    match *boiler {
        BoilerDef::StaticCharge {
            water_capacity_kg,
            steam_temperature_c,
            ambient_temperature_c,
            efficiency_pct,
        } => {
            finite("boiler water_capacity_kg", water_capacity_kg)?;
            if water_capacity_kg <= 0.0 {
                return Err(invalid(
                    "boiler water_capacity_kg",
                    water_capacity_kg,
                    "must be positive",
                ));
            }
            above_absolute_zero("boiler steam_temperature_c", steam_temperature_c)?;
            above_absolute_zero("boiler ambient_temperature_c", ambient_temperature_c)?;
            in_range(
                "boiler efficiency_pct",
                efficiency_pct,
                1.0,
                99.0,
                "must be within [1, 99]",
            )?;
        }
        BoilerDef::ContinuousFlow {
            water_feed_kg_per_hr,
            steam_temperature_c,
            efficiency_pct,
        } => {
            finite("boiler water_feed_kg_per_hr", water_feed_kg_per_hr)?;
            if water_feed_kg_per_hr < 0.0 {
                return Err(invalid(
                    "boiler water_feed_kg_per_hr",
                    water_feed_kg_per_hr,
                    "must be non-negative",
                ));
            }
            above_absolute_zero("boiler steam_temperature_c", steam_temperature_c)?;
            in_range(
                "boiler efficiency_pct",
                efficiency_pct,
                1.0,
                99.0,
                "must be within [1, 99]",
            )?;
        }
    }
    Ok(())
}

fn validate_power_cycle(cycle: &PowerCycleDef) -> Result<(), ValidationError> {
    finite("power_cycle air_mass_flow_kg_s", cycle.air_mass_flow_kg_s)?;
    if cycle.air_mass_flow_kg_s <= 0.0 {
        return Err(invalid(
            "power_cycle air_mass_flow_kg_s",
            cycle.air_mass_flow_kg_s,
            "must be positive",
        ));
    }

    finite("power_cycle pressure_ratio", cycle.pressure_ratio)?;
    if cycle.pressure_ratio <= 1.0 {
        return Err(invalid(
            "power_cycle pressure_ratio",
            cycle.pressure_ratio,
            "must be greater than 1",
        ));
    }

    for (field, eta) in [
        ("power_cycle eta_compressor", cycle.eta_compressor),
        ("power_cycle eta_turbine", cycle.eta_turbine),
        ("power_cycle eta_generator", cycle.eta_generator),
    ] {
        finite(field, eta)?;
        if eta <= 0.0 || eta > 1.0 {
            return Err(invalid(field, eta, "must be within (0, 1]"));
        }
    }

    above_absolute_zero("power_cycle ambient_temperature_c", cycle.ambient_temperature_c)?;
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::schema::{DiagramsDef, FlowUnit, KineticsDef, MassFlowDef};
    use proptest::prelude::*;

    fn custom_plant(moisture: f64, flow: f64) -> PlantDef {
        PlantDef {
            version: LATEST_VERSION,
            name: "p".to_string(),
            feedstock: FeedstockDef {
                biomass: BiomassType::Custom,
                mass_flow: MassFlowDef {
                    value: flow,
                    unit: FlowUnit::KgPerS,
                },
                temperature_c: 25.0,
                moisture_pct: Some(moisture),
                added_water_ratio: None,
            },
            kinetics: KineticsDef::default(),
            boiler: None,
            power_cycle: None,
            steam_tables: None,
            diagrams: DiagramsDef::default(),
        }
    }

    proptest! {
        #[test]
        fn moisture_accepted_iff_percentage(moisture in -50.0_f64..150.0, flow in 0.0_f64..100.0) {
            let ok = validate_plant(&custom_plant(moisture, flow)).is_ok();
            prop_assert_eq!(ok, (0.0..=100.0).contains(&moisture));
        }
    }
}
