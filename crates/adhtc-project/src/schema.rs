//! Plant definition schema.

use serde::{Deserialize, Serialize};

/// Newest plant file version this crate reads.
pub const LATEST_VERSION: u32 = 1;

pub const DEFAULT_SATURATION_FILE: &str = "saturated_by_pressure_V1.4.csv";
pub const DEFAULT_SUPERHEATED_FILE: &str = "compressed_liquid_and_superheated_steam_V1.3.csv";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantDef {
    pub version: u32,
    pub name: String,
    pub feedstock: FeedstockDef,
    #[serde(default)]
    pub kinetics: KineticsDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boiler: Option<BoilerDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_cycle: Option<PowerCycleDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_tables: Option<SteamTablesDef>,
    #[serde(default)]
    pub diagrams: DiagramsDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BiomassType {
    Cattle,
    FoodWaste,
    Manure,
    GrassSilage,
    AgriculturalResidue,
    Custom,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowUnit {
    #[serde(rename = "kg_per_s")]
    KgPerS,
    #[serde(rename = "kg_per_hr")]
    KgPerHr,
    #[serde(rename = "kg_per_day")]
    KgPerDay,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MassFlowDef {
    pub value: f64,
    pub unit: FlowUnit,
}

impl MassFlowDef {
    pub fn to_kg_s(&self) -> f64 {
        let rate = match self.unit {
            FlowUnit::KgPerS => adhtc_core::kgps(self.value),
            FlowUnit::KgPerHr => adhtc_core::kg_per_hour(self.value),
            FlowUnit::KgPerDay => adhtc_core::kg_per_day(self.value),
        };
        adhtc_core::as_kgps(rate)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedstockDef {
    pub biomass: BiomassType,
    pub mass_flow: MassFlowDef,
    #[serde(default = "default_temperature_c")]
    pub temperature_c: f64,
    /// Overrides the preset moisture; required for `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture_pct: Option<f64>,
    /// Overrides the preset water ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_water_ratio: Option<f64>,
}

impl FeedstockDef {
    /// Moisture used for the run: the override, else the preset.
    pub fn effective_moisture_pct(&self) -> Option<f64> {
        self.moisture_pct
            .or_else(|| self.biomass.preset().map(|p| p.moisture_pct))
    }

    /// Water ratio used for the run: the override, else the preset, else none.
    pub fn effective_water_ratio(&self) -> f64 {
        self.added_water_ratio
            .or_else(|| self.biomass.preset().map(|p| p.water_ratio))
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct KineticsDef {
    #[serde(default = "default_pre_exponential")]
    pub pre_exponential_per_day: f64,
    #[serde(default = "default_activation_energy")]
    pub activation_energy_j_per_mol: f64,
}

impl Default for KineticsDef {
    fn default() -> Self {
        Self {
            pre_exponential_per_day: default_pre_exponential(),
            activation_energy_j_per_mol: default_activation_energy(),
        }
    }
}

/// One boiler mode per plant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BoilerDef {
    StaticCharge {
        water_capacity_kg: f64,
        steam_temperature_c: f64,
        #[serde(default = "default_temperature_c")]
        ambient_temperature_c: f64,
        efficiency_pct: f64,
    },
    ContinuousFlow {
        water_feed_kg_per_hr: f64,
        steam_temperature_c: f64,
        efficiency_pct: f64,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PowerCycleDef {
    pub air_mass_flow_kg_s: f64,
    pub pressure_ratio: f64,
    pub eta_compressor: f64,
    pub eta_turbine: f64,
    pub eta_generator: f64,
    #[serde(default = "default_temperature_c")]
    pub ambient_temperature_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SteamTablesDef {
    /// Relative to the plant file; the plant file's directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(default = "default_saturation_file")]
    pub saturation_file: String,
    #[serde(default = "default_superheated_file")]
    pub superheated_file: String,
}

impl Default for SteamTablesDef {
    fn default() -> Self {
        Self {
            directory: None,
            saturation_file: default_saturation_file(),
            superheated_file: default_superheated_file(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiagramsDef {
    #[serde(default = "default_superheat_delta")]
    pub superheat_delta_c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_return_temperature_c: Option<f64>,
}

impl Default for DiagramsDef {
    fn default() -> Self {
        Self {
            superheat_delta_c: default_superheat_delta(),
            cycle_return_temperature_c: None,
        }
    }
}

fn default_temperature_c() -> f64 {
    25.0
}

fn default_pre_exponential() -> f64 {
    1e10
}

fn default_activation_energy() -> f64 {
    60_000.0
}

fn default_superheat_delta() -> f64 {
    20.0
}

fn default_saturation_file() -> String {
    DEFAULT_SATURATION_FILE.to_string()
}

fn default_superheated_file() -> String {
    DEFAULT_SUPERHEATED_FILE.to_string()
}
