//! Plant definition → validated engine inputs.

use adhtc_diagram::HsOptions;
use adhtc_engines::{
    ArrheniusParams, BoilerInput, BoilerRequest, ContinuousBoilerInput, FeedstockInput,
    PowerCycleInput,
};
use adhtc_project::{BoilerDef, PlantDef};

use crate::error::{AppError, AppResult};

/// Everything one evaluation needs, checked at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantInputs {
    pub feedstock: FeedstockInput,
    pub arrhenius: ArrheniusParams,
    pub boiler: Option<BoilerRequest>,
    pub power_cycle: Option<PowerCycleInput>,
    pub hs_options: HsOptions,
}

pub fn compile_plant(plant: &PlantDef) -> AppResult<PlantInputs> {
    let feed = &plant.feedstock;
    let moisture_pct = feed.effective_moisture_pct().ok_or_else(|| {
        AppError::Validation("feedstock moisture_pct is required for custom biomass".to_string())
    })?;

    let feedstock = FeedstockInput {
        mass_flow_kg_s: feed.mass_flow.to_kg_s(),
        moisture_pct,
        added_water_ratio: feed.effective_water_ratio(),
        temperature_c: feed.temperature_c,
    };
    feedstock.validate()?;

    let arrhenius = ArrheniusParams {
        pre_exponential_per_day: plant.kinetics.pre_exponential_per_day,
        activation_energy_j_per_mol: plant.kinetics.activation_energy_j_per_mol,
    };
    arrhenius.validate()?;

    let boiler = plant.boiler.map(|def| match def {
        BoilerDef::StaticCharge {
            water_capacity_kg,
            steam_temperature_c,
            ambient_temperature_c,
            efficiency_pct,
        } => BoilerRequest::StaticCharge(BoilerInput {
            water_capacity_kg,
            steam_temperature_c,
            ambient_temperature_c,
            efficiency_pct,
        }),
        BoilerDef::ContinuousFlow {
            water_feed_kg_per_hr,
            steam_temperature_c,
            efficiency_pct,
        } => BoilerRequest::ContinuousFlow(ContinuousBoilerInput::new(
            water_feed_kg_per_hr,
            steam_temperature_c,
            efficiency_pct,
        )),
    });
    if let Some(request) = &boiler {
        request.validate()?;
    }

    let power_cycle = plant.power_cycle.map(|def| PowerCycleInput {
        air_mass_flow_kg_s: def.air_mass_flow_kg_s,
        pressure_ratio: def.pressure_ratio,
        eta_compressor: def.eta_compressor,
        eta_turbine: def.eta_turbine,
        eta_generator: def.eta_generator,
        ambient_temperature_c: def.ambient_temperature_c,
    });
    if let Some(cycle) = &power_cycle {
        cycle.validate()?;
    }

    let initial_temperature_c = match plant.boiler {
        Some(BoilerDef::StaticCharge {
            ambient_temperature_c,
            ..
        }) => ambient_temperature_c,
        _ => HsOptions::default().initial_temperature_c,
    };
    let hs_options = HsOptions {
        initial_temperature_c,
        superheat_delta_c: plant.diagrams.superheat_delta_c,
        return_temperature_c: plant.diagrams.cycle_return_temperature_c,
    };

    Ok(PlantInputs {
        feedstock,
        arrhenius,
        boiler,
        power_cycle,
        hs_options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use adhtc_project::{
        BiomassType, DiagramsDef, FeedstockDef, FlowUnit, KineticsDef, MassFlowDef,
    };

    fn plant(biomass: BiomassType) -> PlantDef {
        PlantDef {
            version: 1,
            name: "test".to_string(),
            feedstock: FeedstockDef {
                biomass,
                mass_flow: MassFlowDef {
                    value: 3600.0,
                    unit: FlowUnit::KgPerHr,
                },
                temperature_c: 30.0,
                moisture_pct: None,
                added_water_ratio: None,
            },
            kinetics: KineticsDef::default(),
            boiler: Some(BoilerDef::StaticCharge {
                water_capacity_kg: 50.0,
                steam_temperature_c: 160.0,
                ambient_temperature_c: 18.0,
                efficiency_pct: 80.0,
            }),
            power_cycle: None,
            steam_tables: None,
            diagrams: DiagramsDef::default(),
        }
    }

    #[test]
    fn preset_values_flow_into_feedstock() {
        let inputs = compile_plant(&plant(BiomassType::Manure)).unwrap();
        assert!((inputs.feedstock.mass_flow_kg_s - 1.0).abs() < 1e-12);
        assert_eq!(inputs.feedstock.moisture_pct, 72.0);
        assert_eq!(inputs.feedstock.added_water_ratio, 1.2);
        assert!(matches!(inputs.boiler, Some(BoilerRequest::StaticCharge(_))));
        assert!(inputs.power_cycle.is_none());
        assert_eq!(inputs.hs_options.initial_temperature_c, 18.0);
    }

    #[test]
    fn custom_without_moisture_is_rejected() {
        let err = compile_plant(&plant(BiomassType::Custom)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn engine_validation_runs() {
        let mut p = plant(BiomassType::Cattle);
        p.boiler = Some(BoilerDef::StaticCharge {
            water_capacity_kg: 0.0,
            steam_temperature_c: 160.0,
            ambient_temperature_c: 18.0,
            efficiency_pct: 80.0,
        });
        assert!(matches!(compile_plant(&p), Err(AppError::Engine(_))));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn daily_flow_compiles_to_kg_per_s(value in 0.1f64..1.0e5, water in 0.0f64..5.0) {
                let mut p = plant(BiomassType::GrassSilage);
                p.feedstock.mass_flow = MassFlowDef { value, unit: FlowUnit::KgPerDay };
                p.feedstock.added_water_ratio = Some(water);
                let inputs = compile_plant(&p).unwrap();
                prop_assert!((inputs.feedstock.mass_flow_kg_s - value / 86_400.0).abs() <= 1e-12 * value);
                prop_assert_eq!(inputs.feedstock.added_water_ratio, water);
            }
        }
    }
}
